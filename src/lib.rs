//! Circle Game - eat the red circles, avoid the yellow squares
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, game state)
//! - `renderer`: 2D canvas drawing of a game state
//! - `platform`: Input decoding and frame pacing for the browser loop
//! - `settings`: Data-driven game tuning

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default simulation rate (one tick per frame on a 60 Hz display)
    pub const TICK_RATE_HZ: f32 = 60.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 200.0;
    pub const PLAYER_START_Y: f32 = 200.0;
    pub const PLAYER_RADIUS: f32 = 10.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Radius gained per collectible eaten
    pub const GROWTH_PER_COLLECTIBLE: f32 = 1.0;

    /// Collectible defaults
    pub const COLLECTIBLE_RADIUS: f32 = 5.0;
    pub const INITIAL_COLLECTIBLES: u32 = 10;
    /// Per-tick probability of spawning one more collectible
    pub const SPAWN_CHANCE: f64 = 0.01;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 10.0;
    pub const OBSTACLE_COLOR: &str = "yellow";
    pub const INITIAL_OBSTACLES: u32 = 5;
}

/// Clamp a circle's centre so the whole circle stays inside `[0, bounds]`.
///
/// If the circle is wider than the arena it is centred on that axis.
#[inline]
pub fn clamp_circle(center: Vec2, radius: f32, bounds: Vec2) -> Vec2 {
    let clamp_axis = |c: f32, extent: f32| {
        if 2.0 * radius >= extent {
            extent / 2.0
        } else {
            c.clamp(radius, extent - radius)
        }
    };
    Vec2::new(clamp_axis(center.x, bounds.x), clamp_axis(center.y, bounds.y))
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per `tick` call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use spawn::random_position;
pub use state::{Collectible, Command, Direction, GameEvent, GameState, Obstacle, Player};
pub use tick::tick;

//! Game tuning
//!
//! Every number the simulation uses comes from here. The browser build reads
//! an optional JSON override from the canvas's `data-settings` attribute;
//! nothing is persisted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Drawing surface width in pixels
    pub width: f32,
    /// Drawing surface height in pixels
    pub height: f32,

    // === Player ===
    /// Player centre at the start of every session
    pub player_start: Vec2,
    /// Player radius at the start of every session
    pub player_radius: f32,
    /// Velocity magnitude set by a direction key
    pub player_speed: f32,

    // === Entities ===
    pub collectible_radius: f32,
    /// Side length of the obstacle squares
    pub obstacle_size: f32,
    /// CSS colour for obstacles (cosmetic only)
    pub obstacle_color: String,
    pub initial_collectibles: u32,
    pub initial_obstacles: u32,
    /// Per-tick probability of spawning a collectible (0.0 - 1.0)
    pub spawn_chance: f64,

    // === Timing ===
    /// Simulation ticks per second
    pub tick_rate_hz: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,

            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,

            collectible_radius: COLLECTIBLE_RADIUS,
            obstacle_size: OBSTACLE_SIZE,
            obstacle_color: OBSTACLE_COLOR.to_string(),
            initial_collectibles: INITIAL_COLLECTIBLES,
            initial_obstacles: INITIAL_OBSTACLES,
            spawn_chance: SPAWN_CHANCE,

            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl Settings {
    /// Parse settings from (possibly partial) JSON; missing keys take defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Arena size as a vector
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Replace values the simulation cannot run with, logging each fix
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.width > 0.0) || !(self.height > 0.0) {
            log::warn!(
                "Invalid arena size {}x{}, using {}x{}",
                self.width,
                self.height,
                defaults.width,
                defaults.height
            );
            self.width = defaults.width;
            self.height = defaults.height;
        }
        if !(self.player_radius > 0.0) {
            log::warn!("Invalid player_radius {}, using default", self.player_radius);
            self.player_radius = defaults.player_radius;
        }
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            log::warn!("Invalid player_speed {}, using default", self.player_speed);
            self.player_speed = defaults.player_speed;
        }
        if !(self.collectible_radius > 0.0) {
            log::warn!(
                "Invalid collectible_radius {}, using default",
                self.collectible_radius
            );
            self.collectible_radius = defaults.collectible_radius;
        }
        if !(self.obstacle_size > 0.0) {
            log::warn!("Invalid obstacle_size {}, using default", self.obstacle_size);
            self.obstacle_size = defaults.obstacle_size;
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            let clamped = if self.spawn_chance.is_nan() {
                defaults.spawn_chance
            } else {
                self.spawn_chance.clamp(0.0, 1.0)
            };
            log::warn!("spawn_chance {} out of range, using {}", self.spawn_chance, clamped);
            self.spawn_chance = clamped;
        }
        if !(self.tick_rate_hz > 0.0) || !self.tick_rate_hz.is_finite() {
            log::warn!("Invalid tick_rate_hz {}, using default", self.tick_rate_hz);
            self.tick_rate_hz = defaults.tick_rate_hz;
        }
        if !self.player_start.is_finite() {
            log::warn!("Invalid player_start {:?}, using default", self.player_start);
            self.player_start = defaults.player_start;
        }

        self
    }

    /// Load settings from a canvas `data-settings` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::HtmlCanvasElement) -> Self {
        let mut settings = match canvas.get_attribute("data-settings") {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from data-settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed data-settings: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        };

        // The canvas element's own size wins over the tuning file
        if canvas.has_attribute("width") {
            settings.width = canvas.width() as f32;
        }
        if canvas.has_attribute("height") {
            settings.height = canvas.height() as f32;
        }

        settings.sanitized()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

//! Game state and core simulation types
//!
//! Everything the simulation reads or writes lives in [`GameState`]; the
//! frame-loop driver owns it and hands it to `tick` and the renderer.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::spawn::random_position;
use crate::Settings;

/// Cardinal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Unit vector in screen space (y grows downwards)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
        }
    }
}

/// A decoded player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move in one direction at full speed (last key wins)
    Steer(Direction),
    /// Begin the first session (click)
    Start,
    /// Start over after a game over (space)
    Restart,
}

/// Things that happened during a tick or command, for logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    SessionStarted,
    Consumed { radius: f32 },
    CollectibleSpawned { pos: Vec2 },
    GameOver { radius: f32, ticks: u64 },
    Restarted,
}

/// The player's circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    /// Velocity magnitude applied by steering
    pub speed: f32,
}

impl Player {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: settings.player_start,
            radius: settings.player_radius,
            vel: Vec2::ZERO,
            speed: settings.player_speed,
        }
    }

    /// Point the player along one axis, zeroing the other
    pub fn steer(&mut self, dir: Direction) {
        self.vel = dir.unit() * self.speed;
    }

    /// Bounding square of the player's circle
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }
}

/// A circle the player can eat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub radius: f32,
}

impl Collectible {
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }
}

/// A square that ends the session on contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    /// Side length
    pub size: f32,
    /// CSS colour (cosmetic)
    pub color: String,
}

impl Obstacle {
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.size))
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the session RNG was created from
    pub seed: u64,
    /// Tuning this state was built with
    pub settings: Settings,
    /// Has the player clicked to begin
    pub started: bool,
    /// Has the player hit an obstacle
    pub over: bool,
    /// Simulation ticks that did work this session
    pub time_ticks: u64,
    pub player: Player,
    /// Collectibles in spawn order
    pub collectibles: Vec<Collectible>,
    /// Obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Spawner randomness
    rng: Pcg32,
    /// Events not yet drained by the driver
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh, not-yet-started game
    pub fn new(seed: u64, settings: Settings) -> Self {
        Self {
            seed,
            player: Player::new(&settings),
            settings,
            started: false,
            over: false,
            time_ticks: 0,
            collectibles: Vec::new(),
            obstacles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Arena size
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.settings.bounds()
    }

    /// Apply a decoded input. Returns whether it changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Steer(dir) => {
                self.player.steer(dir);
                true
            }
            Command::Start => {
                if self.started {
                    return false;
                }
                self.started = true;
                self.seed_session();
                self.events.push(GameEvent::SessionStarted);
                true
            }
            Command::Restart => {
                if !self.over {
                    return false;
                }
                self.reset();
                true
            }
        }
    }

    /// Put the session back to its opening position and reseed entities.
    ///
    /// The game stays started; the RNG keeps running so each retry gets a
    /// new layout.
    pub fn reset(&mut self) {
        self.collectibles.clear();
        self.obstacles.clear();
        self.player = Player::new(&self.settings);
        self.over = false;
        self.time_ticks = 0;
        self.started = true;
        self.seed_session();
        self.events.push(GameEvent::Restarted);
    }

    /// Spawn the opening set of collectibles and obstacles
    fn seed_session(&mut self) {
        for _ in 0..self.settings.initial_collectibles {
            self.spawn_collectible();
        }
        for _ in 0..self.settings.initial_obstacles {
            self.spawn_obstacle();
        }
    }

    /// Add one collectible at a random position inside the arena
    pub fn spawn_collectible(&mut self) -> Vec2 {
        let radius = self.settings.collectible_radius;
        let bounds = self.bounds();
        let pos = random_position(&mut self.rng, bounds, 2.0 * radius);
        self.collectibles.push(Collectible { pos, radius });
        pos
    }

    /// Add one obstacle at a random position inside the arena
    pub fn spawn_obstacle(&mut self) -> Vec2 {
        let size = self.settings.obstacle_size;
        let bounds = self.bounds();
        let pos = random_position(&mut self.rng, bounds, size);
        self.obstacles.push(Obstacle {
            pos,
            size,
            color: self.settings.obstacle_color.clone(),
        });
        pos
    }

    /// Bernoulli trial against the configured spawn chance
    pub(super) fn roll_spawn(&mut self) -> bool {
        let chance = self.settings.spawn_chance;
        chance > 0.0 && self.rng.random::<f64>() < chance
    }

    pub(super) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

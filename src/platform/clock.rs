//! Fixed-timestep frame pacing
//!
//! `requestAnimationFrame` fires at the display's refresh rate. The clock
//! turns frame timestamps into a whole number of simulation ticks so the
//! player moves at the same speed on 60 Hz and 144 Hz screens.

/// Frame gaps longer than this (tab in background, debugger) are truncated
const MAX_FRAME_SECS: f64 = 0.25;
/// Slack for timestamp rounding so a 16.666 ms frame still counts as a tick
const EPSILON_SECS: f64 = 1e-6;

/// Accumulates frame time and hands out ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_secs: f64,
    max_substeps: u32,
    accumulator: f64,
    last_time_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(tick_rate_hz: f32, max_substeps: u32) -> Self {
        Self {
            tick_secs: 1.0 / tick_rate_hz as f64,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
            last_time_ms: None,
        }
    }

    /// Register a frame at `now_ms` (a `requestAnimationFrame` timestamp) and
    /// return how many ticks to run before drawing it.
    ///
    /// The first frame always runs one tick.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_time_ms.replace(now_ms) else {
            return 1;
        };

        let dt = ((now_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_SECS);
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator + EPSILON_SECS >= self.tick_secs && ticks < self.max_substeps {
            self.accumulator -= self.tick_secs;
            ticks += 1;
        }

        if ticks == self.max_substeps {
            // Too far behind; drop the backlog instead of catching up
            self.accumulator = self.accumulator.clamp(0.0, self.tick_secs);
        }
        self.accumulator = self.accumulator.max(0.0);

        ticks
    }
}

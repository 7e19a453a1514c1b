//! Platform abstraction layer
//!
//! Browser-facing pieces that are still plain Rust:
//! - Input decoding (key events to commands)
//! - Frame pacing (display frames to simulation ticks)

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{command_for_click, command_for_key};

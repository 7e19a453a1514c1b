//! 2D canvas rendering module
//!
//! Frames are drawn through the `Surface` trait so the same code paints the
//! browser canvas and the recording `DrawList` used off-browser.

pub mod scene;
pub mod surface;

pub use scene::render;
pub use surface::{DrawCall, DrawList, Surface};

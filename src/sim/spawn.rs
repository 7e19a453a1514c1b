//! Random placement of new entities
//!
//! Positions are uniform over the arena shrunk by the entity's extent, so a
//! new entity never starts hanging off the right or bottom edge. Entities may
//! overlap each other or the player.

use glam::Vec2;
use rand::Rng;

/// Uniform position in `[0, bounds - extent)` on each axis.
///
/// An axis with no room left collapses to 0.
pub fn random_position<R: Rng>(rng: &mut R, bounds: Vec2, extent: f32) -> Vec2 {
    let span = (bounds - Vec2::splat(extent)).max(Vec2::ZERO);
    Vec2::new(rng.random::<f32>() * span.x, rng.random::<f32>() * span.y)
}

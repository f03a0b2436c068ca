//! Rooms domain: placing the player on entry.

use bevy::prelude::*;

use crate::content::Segment;
use crate::movement::ground_height_at;

/// Top y for a body of `size` placed at `spawn_x`: just above the ground
/// under its foot, or `fallback_y` when nothing spans that x.
pub fn spawn_height(
    segments: &[Segment],
    spawn_x: f32,
    size: Vec2,
    margin: f32,
    fallback_y: f32,
) -> f32 {
    let foot_x = spawn_x + size.x / 2.0;
    ground_height_at(segments, foot_x).map_or(fallback_y, |ground_y| ground_y - size.y - margin)
}

//! Movement domain: ground resolution against terrain segments.
//!
//! One resolver serves every grounded actor. The player system lives here;
//! the enemy step calls the same functions from the combat domain.

use bevy::prelude::*;

use crate::content::Segment;
use crate::core::CanvasConfig;
use crate::movement::{Body, MovementState, MovementTuning, Player, Velocity};
use crate::rooms::RoomRegistry;

/// Base snap distance; the effective tolerance grows with fall speed.
pub const SNAP_TOLERANCE: f32 = 20.0;

/// The segment an actor's foot rests on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    pub segment_index: usize,
    pub line_y: f32,
}

/// Where and when an actor that fell out of the room is put back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallReset {
    /// Distance below the canvas bottom that triggers the reset.
    pub margin: f32,
    /// Top-left position the actor is moved to.
    pub safe_point: Vec2,
}

/// First segment, in order, that supports a foot at (`foot_x`, `foot_y`)
/// moving with vertical velocity `vy`.
///
/// Actors moving upward never snap. Segments spanning `foot_x` whose line
/// is out of tolerance are skipped and the scan continues.
pub fn find_support(
    segments: &[Segment],
    foot_x: f32,
    foot_y: f32,
    vy: f32,
) -> Option<GroundContact> {
    if vy < 0.0 {
        return None;
    }

    segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| segment.spans(foot_x))
        .find_map(|(segment_index, segment)| {
            let line_y = segment.y_at(foot_x)?;
            ((foot_y - line_y).abs() < SNAP_TOLERANCE + vy).then_some(GroundContact {
                segment_index,
                line_y,
            })
        })
}

/// Resolve one actor against the terrain. Clears `on_ground` and sets it
/// again only when a supporting segment is found.
pub fn resolve_ground(
    segments: &[Segment],
    body: &mut Body,
    velocity: &mut Velocity,
    state: &mut MovementState,
) -> Option<GroundContact> {
    state.on_ground = false;

    let foot = body.foot();
    let contact = find_support(segments, foot.x, foot.y, velocity.0.y)?;

    body.position.y = contact.line_y - body.size.y;
    velocity.0.y = 0.0;
    state.on_ground = true;
    Some(contact)
}

/// Height of the first segment spanning `x`, without any tolerance.
pub fn ground_height_at(segments: &[Segment], x: f32) -> Option<f32> {
    segments
        .iter()
        .filter(|segment| segment.spans(x))
        .find_map(|segment| segment.y_at(x))
}

/// Teleport an actor that fell past the canvas back to its safe point.
/// Returns true when the reset fired.
pub fn apply_fall_reset(
    body: &mut Body,
    velocity: &mut Velocity,
    canvas_height: f32,
    reset: &FallReset,
) -> bool {
    if body.position.y <= canvas_height + reset.margin {
        return false;
    }

    body.position = reset.safe_point;
    velocity.0.y = 0.0;
    true
}

pub(crate) fn resolve_player_ground(
    registry: Res<RoomRegistry>,
    canvas: Res<CanvasConfig>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Body, &mut Velocity, &mut MovementState), With<Player>>,
) {
    let segments = registry.segments();
    let reset = tuning.fall_reset();

    for (mut body, mut velocity, mut state) in &mut query {
        let was_on_ground = state.on_ground;
        resolve_ground(segments, &mut body, &mut velocity, &mut state);

        if state.on_ground && !was_on_ground {
            debug!("Landed at ({:.1}, {:.1})", body.position.x, body.position.y);
        }

        if apply_fall_reset(&mut body, &mut velocity, canvas.height, &reset) {
            info!(
                "Player fell out of the room, reset to ({}, {})",
                reset.safe_point.x, reset.safe_point.y
            );
        }
    }
}

//! Rooms domain: left/right boundary handling between neighbouring rooms.

use crate::rooms::registry::{RoomRegistry, RoomSwitch};

/// Where a room's entry points sit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeEntries {
    /// Spawn x when arriving through the left edge.
    pub left: f32,
    /// Spawn x when arriving through the right edge.
    pub right: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeOutcome {
    Inside,
    /// No neighbour on that side: pin x there and stop.
    Clamp { x: f32 },
    Switch(RoomSwitch),
}

/// Decide what happens to an actor at `x` with hitbox `width`.
///
/// Leaving through the right edge enters the next room at its left entry;
/// leaving through the left edge enters the previous room at its right
/// entry. The first and last rooms act as walls.
pub fn room_edge_outcome(
    registry: &RoomRegistry,
    x: f32,
    width: f32,
    canvas_width: f32,
    entries: EdgeEntries,
) -> EdgeOutcome {
    let max_x = canvas_width - width;

    if x > max_x {
        if registry.has_next() {
            EdgeOutcome::Switch(RoomSwitch {
                index: registry.current_index + 1,
                spawn_x: entries.left,
            })
        } else {
            EdgeOutcome::Clamp { x: max_x }
        }
    } else if x < 0.0 {
        if registry.has_previous() {
            EdgeOutcome::Switch(RoomSwitch {
                index: registry.current_index - 1,
                spawn_x: entries.right,
            })
        } else {
            EdgeOutcome::Clamp { x: 0.0 }
        }
    } else {
        EdgeOutcome::Inside
    }
}

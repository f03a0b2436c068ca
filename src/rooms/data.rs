//! Rooms domain: runtime room data.

use bevy::prelude::*;

use crate::content::{BackgroundDef, RoomDef, Segment};
use crate::rooms::terrain::extract_segments;

/// A room ready for play, with its terrain already flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomData {
    pub id: String,
    pub background: BackgroundDef,
    pub segments: Vec<Segment>,
    /// Top-left of the single enemy spawned on entry, if any.
    pub enemy_spawn: Option<Vec2>,
}

impl RoomData {
    pub fn from_def(def: &RoomDef) -> Self {
        Self {
            id: def.id.clone(),
            background: def.background.clone(),
            segments: extract_segments(def.shape.as_ref()),
            enemy_spawn: def.enemy_spawn.map(Vec2::from),
        }
    }
}

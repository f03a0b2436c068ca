//! Rooms domain: ordered room registry and the pending switch.

use bevy::prelude::*;

use crate::content::{RoomDef, Segment};
use crate::rooms::data::RoomData;

/// A requested move to another room, applied by `process_room_switch`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomSwitch {
    pub index: usize,
    /// Player x in the new room.
    pub spawn_x: f32,
}

/// Rooms in play order plus the current one.
#[derive(Resource, Debug, Default)]
pub struct RoomRegistry {
    pub rooms: Vec<RoomData>,
    pub current_index: usize,
    pub pending: Option<RoomSwitch>,
}

impl RoomRegistry {
    pub fn from_defs(defs: &[RoomDef]) -> Self {
        Self {
            rooms: defs.iter().map(RoomData::from_def).collect(),
            current_index: 0,
            pending: None,
        }
    }

    pub fn current(&self) -> Option<&RoomData> {
        self.rooms.get(self.current_index)
    }

    /// Walkable segments of the current room (empty before any room).
    pub fn segments(&self) -> &[Segment] {
        self.current()
            .map(|room| room.segments.as_slice())
            .unwrap_or_default()
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.rooms.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn request_switch(&mut self, index: usize, spawn_x: f32) {
        self.pending = Some(RoomSwitch { index, spawn_x });
    }

    pub fn take_pending(&mut self) -> Option<RoomSwitch> {
        self.pending.take()
    }

    /// Make `index` current. Returns `None`, leaving the registry unchanged,
    /// when the index is out of range.
    pub fn enter(&mut self, index: usize) -> Option<&RoomData> {
        if index >= self.rooms.len() {
            return None;
        }
        self.current_index = index;
        self.rooms.get(index)
    }
}

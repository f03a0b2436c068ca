//! Rooms domain: events for room transitions.

use bevy::ecs::message::Message;

/// Written once a room switch has been applied.
#[derive(Debug)]
pub struct RoomEnteredEvent {
    pub index: usize,
    pub room_id: String,
}

impl Message for RoomEnteredEvent {}

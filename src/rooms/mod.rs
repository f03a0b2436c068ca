//! Rooms domain: room flow plugin wiring and public exports.

mod background;
mod components;
mod data;
mod events;
mod graph;
mod registry;
mod spawn;
mod systems;
mod terrain;

#[cfg(test)]
mod tests;

pub use background::{BackgroundRequest, CurrentBackground, VideoPlayback};
pub use components::BackgroundLayer;
pub use data::RoomData;
pub use events::RoomEnteredEvent;
pub use graph::{EdgeEntries, EdgeOutcome, room_edge_outcome};
pub use registry::{RoomRegistry, RoomSwitch};
pub use spawn::spawn_height;
pub use terrain::extract_segments;

use bevy::prelude::*;

use crate::core::{GameState, StepSet};
use crate::rooms::systems::{
    apply_room_background, check_room_edges, process_room_switch, spawn_background_layer,
    sync_background_layer,
};

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoomRegistry>()
            .init_resource::<CurrentBackground>()
            .add_message::<RoomEnteredEvent>()
            .add_systems(Startup, spawn_background_layer)
            .add_systems(
                FixedUpdate,
                (
                    check_room_edges.run_if(in_state(GameState::Run)),
                    process_room_switch,
                    apply_room_background,
                )
                    .chain()
                    .in_set(StepSet::RoomSwitch),
            )
            .add_systems(Update, sync_background_layer);
    }
}

//! Core domain: start gate, canvas configuration and the fixed world step.

mod resources;
mod state;
mod systems;

pub use resources::{CanvasConfig, MusicConfig};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{handle_start_trigger, setup_camera, start_music};

/// Display ticks per second; all tuning is expressed per tick.
pub const STEPS_PER_SECOND: f64 = 60.0;

/// Ordering of one world step inside `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum StepSet {
    /// Player input, integration and ground resolution
    PlayerPhysics,
    /// Room-edge check and pending room switch (the switch also runs before
    /// the start trigger)
    RoomSwitch,
    /// Jump, state selection, player animation
    PlayerState,
    /// Enemy AI, physics and animation
    Enemies,
    /// Enemy body contact with the player
    Contact,
    /// Spell casting and flight
    Spells,
    /// Removal of finished actors
    Cleanup,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<CanvasConfig>()
            .init_resource::<MusicConfig>()
            .insert_resource(Time::<Fixed>::from_hz(STEPS_PER_SECOND))
            .configure_sets(
                FixedUpdate,
                (
                    StepSet::PlayerPhysics,
                    StepSet::RoomSwitch,
                    StepSet::PlayerState,
                    StepSet::Enemies,
                    StepSet::Contact,
                    StepSet::Spells,
                    StepSet::Cleanup,
                )
                    .chain(),
            )
            .configure_sets(
                FixedUpdate,
                (
                    StepSet::PlayerPhysics,
                    StepSet::PlayerState,
                    StepSet::Enemies,
                    StepSet::Contact,
                    StepSet::Spells,
                    StepSet::Cleanup,
                )
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                handle_start_trigger.run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnEnter(GameState::Run), start_music);
    }
}

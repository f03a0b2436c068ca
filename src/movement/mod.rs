//! Movement domain: player locomotion, terrain collision and input.

mod bootstrap;
mod components;
mod resources;
pub(crate) mod systems;


pub use bootstrap::ACTOR_Z;
pub use components::{Body, DrawSize, Facing, MovementState, Player, PlayerAction, Velocity};
pub use resources::{MovementInput, MovementTuning, PlayerAnimations};
pub use systems::collisions::{
    FallReset, GroundContact, SNAP_TOLERANCE, apply_fall_reset, find_support, ground_height_at,
    resolve_ground,
};

use bevy::prelude::*;

use crate::core::StepSet;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_jump, apply_player_input, integrate_player_motion, read_input, resolve_player_ground,
    update_player_action,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input)
            .add_systems(
                FixedUpdate,
                (
                    apply_player_input,
                    integrate_player_motion,
                    resolve_player_ground,
                )
                    .chain()
                    .in_set(StepSet::PlayerPhysics),
            )
            .add_systems(
                FixedUpdate,
                (apply_jump, update_player_action)
                    .chain()
                    .in_set(StepSet::PlayerState),
            );
    }
}

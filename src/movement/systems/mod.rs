//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::resolve_player_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_jump, apply_player_input, integrate_player_motion, update_player_action,
};

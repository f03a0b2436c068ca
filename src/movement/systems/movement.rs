//! Movement domain: player locomotion steps.
//!
//! Each step is a plain function over components so it can be driven
//! directly in tests; the systems below only fetch the data.

use bevy::prelude::*;

use crate::movement::{
    Body, Facing, MovementInput, MovementState, MovementTuning, Player, PlayerAction, Velocity,
};
use crate::sprites::AnimationCursor;

/// Accelerate toward the held direction and pick the ground action.
pub fn apply_horizontal_input(
    horizontal: Option<Facing>,
    tuning: &MovementTuning,
    velocity: &mut Velocity,
    state: &mut MovementState,
) -> PlayerAction {
    match horizontal {
        Some(facing) => {
            velocity.0.x += facing.sign() * tuning.accel;
            state.facing = facing;
            PlayerAction::Running
        }
        None => PlayerAction::Idle,
    }
}

/// Friction, then position; gravity, then position. Gravity integrates
/// every step regardless of contact; the resolver runs afterwards.
pub fn integrate_player(tuning: &MovementTuning, body: &mut Body, velocity: &mut Velocity) {
    velocity.0.x *= tuning.friction;
    body.position.x += velocity.0.x;

    velocity.0.y += tuning.gravity;
    body.position.y += velocity.0.y;
}

/// Start a jump when grounded. Returns true if the jump fired.
pub fn try_jump(
    jump_held: bool,
    tuning: &MovementTuning,
    velocity: &mut Velocity,
    state: &mut MovementState,
) -> bool {
    if !jump_held || !state.on_ground {
        return false;
    }
    velocity.0.y = tuning.jump_impulse;
    state.on_ground = false;
    true
}

/// Being airborne overrides whatever the input selected.
pub fn select_action(input_action: PlayerAction, on_ground: bool) -> PlayerAction {
    if on_ground {
        input_action
    } else {
        PlayerAction::Jumping
    }
}

pub fn animate_player(tuning: &MovementTuning, action: PlayerAction, cursor: &mut AnimationCursor) {
    let animations = &tuning.animation;
    let range = match action {
        PlayerAction::Idle => animations.idle,
        PlayerAction::Running => animations.running,
        PlayerAction::Jumping => animations.jumping,
    };
    cursor.advance_in_range(range, animations.ticks_per_frame);
}

pub(crate) fn apply_player_input(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Velocity, &mut MovementState, &mut PlayerAction), With<Player>>,
) {
    for (mut velocity, mut state, mut action) in &mut query {
        *action = apply_horizontal_input(input.horizontal, &tuning, &mut velocity, &mut state);
    }
}

pub(crate) fn integrate_player_motion(
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Body, &mut Velocity), With<Player>>,
) {
    for (mut body, mut velocity) in &mut query {
        integrate_player(&tuning, &mut body, &mut velocity);
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Velocity, &mut MovementState), With<Player>>,
) {
    for (mut velocity, mut state) in &mut query {
        if try_jump(input.jump_held, &tuning, &mut velocity, &mut state) {
            debug!("Jump: vy={}", velocity.0.y);
        }
    }
}

pub(crate) fn update_player_action(
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut PlayerAction, &mut AnimationCursor), With<Player>>,
) {
    for (state, mut action, mut cursor) in &mut query {
        *action = select_action(*action, state.on_ground);
        animate_player(&tuning, *action, &mut cursor);
    }
}

//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{Facing, MovementInput};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    let left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);

    input.horizontal = if right {
        Some(Facing::Right)
    } else if left {
        Some(Facing::Left)
    } else {
        None
    };

    input.jump_held = keyboard.pressed(KeyCode::KeyW)
        || keyboard.pressed(KeyCode::ArrowUp)
        || keyboard.pressed(KeyCode::Space);
}

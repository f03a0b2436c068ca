//! Movement domain: player bootstrap.

use bevy::prelude::*;

use crate::movement::{Body, DrawSize, MovementState, MovementTuning, Player, PlayerAction, Velocity};
use crate::sprites::AnimationCursor;

/// Z layer of actors, above the room background.
pub const ACTOR_Z: f32 = 10.0;

/// Spawn the single player entity. Runs at startup so the initial room
/// switch can place it on the ground before the first step.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let draw_size = Vec2::splat(tuning.draw_size);
    commands.spawn((
        Player,
        Name::new("Player"),
        Body::new(tuning.spawn_point(), tuning.hitbox()),
        Velocity::default(),
        MovementState::default(),
        PlayerAction::default(),
        AnimationCursor::default(),
        DrawSize(draw_size),
        Sprite {
            custom_size: Some(draw_size),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, ACTOR_Z),
        Visibility::Hidden,
    ));

    info!(
        "Spawned player at ({}, {}) with hitbox {}x{}",
        tuning.spawn_x, tuning.spawn_y, tuning.hitbox_width, tuning.hitbox_height
    );
}

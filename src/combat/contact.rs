//! Combat domain: body contact between the player and enemies.

use bevy::prelude::*;

use crate::combat::components::Enemy;
use crate::combat::resources::{ContactMode, EnemyTuning};
use crate::movement::{Body, Player, Velocity};

/// Apply contact with one enemy. Returns true if the bodies overlapped.
pub fn resolve_contact(
    mode: ContactMode,
    player: &mut Body,
    player_velocity: &mut Velocity,
    enemy: &Body,
    tuning: &EnemyTuning,
) -> bool {
    if !player.overlaps(enemy) {
        return false;
    }

    let player_on_left = player.center().x < enemy.center().x;

    match mode {
        ContactMode::BodyBlock => {
            player.position.x = if player_on_left {
                enemy.position.x - player.size.x
            } else {
                enemy.right()
            };
        }
        ContactMode::Knockback => {
            let away = if player_on_left { -1.0 } else { 1.0 };
            player_velocity.0 = Vec2::new(
                away * tuning.contact_knockback.x,
                -tuning.contact_knockback.y,
            );
        }
    }
    true
}

pub(crate) fn resolve_enemy_contacts(
    mode: Res<ContactMode>,
    tuning: Res<EnemyTuning>,
    mut player_query: Query<(&mut Body, &mut Velocity), (With<Player>, Without<Enemy>)>,
    enemy_query: Query<&Body, (With<Enemy>, Without<Player>)>,
) {
    let Ok((mut player_body, mut player_velocity)) = player_query.single_mut() else {
        return;
    };

    for enemy_body in &enemy_query {
        if resolve_contact(
            *mode,
            &mut player_body,
            &mut player_velocity,
            enemy_body,
            &tuning,
        ) {
            debug!("Player touched enemy ({:?})", *mode);
        }
    }
}

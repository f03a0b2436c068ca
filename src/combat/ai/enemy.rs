//! Combat domain: melee enemy AI, physics and animation.

use bevy::prelude::*;

use crate::combat::components::{Enemy, EnemyAI, EnemyAction};
use crate::combat::events::PlayerKnockbackEvent;
use crate::combat::resources::EnemyTuning;
use crate::core::CanvasConfig;
use crate::movement::{
    Body, Facing, MovementState, MovementTuning, Player, Velocity, apply_fall_reset,
    resolve_ground,
};
use crate::rooms::RoomRegistry;
use crate::sprites::AnimationCursor;

/// Pick the enemy's action from its distance to the player.
///
/// Does nothing while an attack is playing. Returns the velocity to give
/// the player when a new attack lands within knockback range.
pub fn think(
    ai: &mut EnemyAI,
    state: &mut MovementState,
    velocity: &mut Velocity,
    cursor: &mut AnimationCursor,
    enemy_center: Vec2,
    player_center: Vec2,
    tuning: &EnemyTuning,
) -> Option<Vec2> {
    if ai.is_attacking {
        return None;
    }

    let dx = player_center.x - enemy_center.x;
    let distance = enemy_center.distance(player_center);

    if distance < tuning.attack_range {
        ai.action = EnemyAction::Attack;
        ai.is_attacking = true;
        velocity.0.x = 0.0;
        state.facing = Facing::toward(dx);
        cursor.reset();

        (distance < tuning.knockback_range).then(|| {
            Vec2::new(
                state.facing.sign() * tuning.knockback.x,
                -tuning.knockback.y,
            )
        })
    } else if distance < tuning.chase_range {
        ai.action = EnemyAction::Move;
        state.facing = Facing::toward(dx);
        velocity.0.x = state.facing.sign() * tuning.speed * 0.5;
        None
    } else {
        ai.action = EnemyAction::Idle;
        velocity.0.x = 0.0;
        None
    }
}

/// Gravity always applies; horizontal motion is frozen while attacking.
pub fn integrate_enemy(ai: &EnemyAI, gravity: f32, body: &mut Body, velocity: &mut Velocity) {
    velocity.0.y += gravity;
    if !ai.is_attacking {
        body.position.x += velocity.0.x;
    }
    body.position.y += velocity.0.y;
}

/// Advance the clip of the current action. When the attack clip wraps the
/// attack is over and the enemy goes back to idle. Returns true then.
pub fn animate_enemy(ai: &mut EnemyAI, cursor: &mut AnimationCursor, tuning: &EnemyTuning) -> bool {
    let frames = tuning.clip_frames(ai.action);
    let wrapped = cursor.advance_wrapping(frames, tuning.ticks_per_frame);

    if wrapped && ai.action == EnemyAction::Attack {
        ai.action = EnemyAction::Idle;
        ai.is_attacking = false;
        return true;
    }
    false
}

pub(crate) fn update_enemy_ai(
    tuning: Res<EnemyTuning>,
    player_query: Query<&Body, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            Entity,
            &Body,
            &mut EnemyAI,
            &mut MovementState,
            &mut Velocity,
            &mut AnimationCursor,
        ),
        (With<Enemy>, Without<Player>),
    >,
    mut knockback_events: MessageWriter<PlayerKnockbackEvent>,
) {
    let Ok(player_body) = player_query.single() else {
        return;
    };
    let player_center = player_body.center();

    for (entity, body, mut ai, mut state, mut velocity, mut cursor) in &mut enemy_query {
        let previous = ai.action;
        let knockback = think(
            &mut ai,
            &mut state,
            &mut velocity,
            &mut cursor,
            body.center(),
            player_center,
            &tuning,
        );

        if ai.action != previous {
            debug!("Enemy {:?}: {:?} -> {:?}", entity, previous, ai.action);
        }

        if let Some(velocity) = knockback {
            knockback_events.write(PlayerKnockbackEvent {
                source: entity,
                velocity,
            });
        }
    }
}

pub(crate) fn apply_enemy_physics(
    registry: Res<RoomRegistry>,
    canvas: Res<CanvasConfig>,
    movement: Res<MovementTuning>,
    tuning: Res<EnemyTuning>,
    mut enemy_query: Query<
        (&EnemyAI, &mut Body, &mut Velocity, &mut MovementState),
        (With<Enemy>, Without<Player>),
    >,
) {
    let segments = registry.segments();

    for (ai, mut body, mut velocity, mut state) in &mut enemy_query {
        integrate_enemy(ai, movement.gravity, &mut body, &mut velocity);
        resolve_ground(segments, &mut body, &mut velocity, &mut state);

        let reset = tuning.fall_reset(ai.home);
        if apply_fall_reset(&mut body, &mut velocity, canvas.height, &reset) {
            debug!("Enemy fell out of the room, back to spawn {:?}", ai.home);
        }
    }
}

pub(crate) fn apply_player_knockback(
    mut knockback_events: MessageReader<PlayerKnockbackEvent>,
    mut player_query: Query<&mut Velocity, (With<Player>, Without<Enemy>)>,
) {
    let Ok(mut velocity) = player_query.single_mut() else {
        return;
    };

    for event in knockback_events.read() {
        velocity.0 = event.velocity;
        debug!("Player knocked back by {:?}: {:?}", event.source, event.velocity);
    }
}

pub(crate) fn animate_enemies(
    tuning: Res<EnemyTuning>,
    mut enemy_query: Query<(&mut EnemyAI, &mut AnimationCursor), With<Enemy>>,
) {
    for (mut ai, mut cursor) in &mut enemy_query {
        animate_enemy(&mut ai, &mut cursor, &tuning);
    }
}

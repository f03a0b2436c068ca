//! Combat domain: the projectile spell.
//!
//! A spell charges in place, flies straight until it hits an enemy or runs
//! out of time, plays its impact in place, and is then removed.

use bevy::prelude::*;

use crate::combat::components::{Enemy, Spell, SpellPhase};
use crate::combat::events::SpellImpactEvent;
use crate::combat::resources::{CombatInput, SpellTuning};
use crate::movement::{ACTOR_Z, Body, DrawSize, Facing, MovementState, Player};
use crate::sprites::AnimationCursor;

/// Top-left of a new spell: in front of the caster's hitbox on the side it
/// faces, vertically centred on it.
pub fn cast_origin(caster: &Body, facing: Facing, spell_size: Vec2) -> Vec2 {
    let x = match facing {
        Facing::Right => caster.right(),
        Facing::Left => caster.position.x - spell_size.x,
    };
    Vec2::new(x, caster.center().y - spell_size.y / 2.0)
}

/// Advance one spell by a step. Returns the enemy struck, if the spell
/// entered its impact phase this step.
pub fn step_spell(
    spell: &mut Spell,
    body: &mut Body,
    cursor: &mut AnimationCursor,
    tuning: &SpellTuning,
    enemies: &[(Entity, Body)],
) -> Option<Entity> {
    if spell.is_destroyed() {
        return None;
    }

    cursor.tick(tuning.ticks_per_frame);

    match spell.phase {
        SpellPhase::Invoke => {
            spell.timer += 1;
            cursor.frame_index = 0;
            if spell.timer >= tuning.invoke_duration {
                spell.phase = SpellPhase::Launch;
                spell.timer = 0;
                cursor.reset();
            }
        }
        SpellPhase::Launch => {
            body.position.x += spell.speed;
            spell.timer += 1;
            if cursor.frame_index >= tuning.launch_frames {
                cursor.frame_index = 0;
            }

            if let Some((enemy, _)) = enemies.iter().find(|(_, enemy)| body.overlaps(enemy)) {
                spell.phase = SpellPhase::Impact;
                spell.timer = 0;
                cursor.reset();
                return Some(*enemy);
            }

            if spell.timer > tuning.launch_duration {
                spell.phase = SpellPhase::Destroyed;
            }
        }
        SpellPhase::Impact => {
            spell.timer += 1;
            if cursor.frame_index >= tuning.impact_frames {
                spell.phase = SpellPhase::Destroyed;
            }
        }
        SpellPhase::Destroyed => {}
    }
    None
}

pub(crate) fn spawn_spell(commands: &mut Commands, origin: Vec2, facing: Facing, tuning: &SpellTuning) {
    let size = tuning.body_size();
    commands.spawn((
        Spell::new(facing, tuning.speed),
        Name::new("Spell"),
        Body::new(origin, size),
        AnimationCursor::default(),
        DrawSize(size),
        Sprite {
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, ACTOR_Z + 1.0),
        Visibility::Hidden,
    ));
}

pub(crate) fn cast_spells(
    mut commands: Commands,
    mut input: ResMut<CombatInput>,
    tuning: Res<SpellTuning>,
    player_query: Query<(&Body, &MovementState), With<Player>>,
) {
    if !input.cast_requested {
        return;
    }
    input.cast_requested = false;

    let Ok((body, state)) = player_query.single() else {
        return;
    };

    let origin = cast_origin(body, state.facing, tuning.body_size());
    spawn_spell(&mut commands, origin, state.facing, &tuning);
    info!(
        "[SPELL] Cast {:?} from ({:.0}, {:.0})",
        state.facing, origin.x, origin.y
    );
}

pub(crate) fn update_spells(
    tuning: Res<SpellTuning>,
    mut spell_query: Query<
        (Entity, &mut Spell, &mut Body, &mut AnimationCursor),
        Without<Enemy>,
    >,
    enemy_query: Query<(Entity, &Body), (With<Enemy>, Without<Spell>)>,
    mut impact_events: MessageWriter<SpellImpactEvent>,
) {
    let enemies: Vec<(Entity, Body)> = enemy_query
        .iter()
        .map(|(entity, body)| (entity, *body))
        .collect();

    for (entity, mut spell, mut body, mut cursor) in &mut spell_query {
        if let Some(enemy) = step_spell(&mut spell, &mut body, &mut cursor, &tuning, &enemies) {
            impact_events.write(SpellImpactEvent {
                spell: entity,
                enemy,
                position: body.position,
            });
        }
    }
}

pub(crate) fn log_spell_impacts(mut impact_events: MessageReader<SpellImpactEvent>) {
    for event in impact_events.read() {
        info!(
            "[SPELL] {:?} hit enemy {:?} at ({:.0}, {:.0})",
            event.spell, event.enemy, event.position.x, event.position.y
        );
    }
}

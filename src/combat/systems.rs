//! Combat domain: input latching and cleanup.

use bevy::prelude::*;

use crate::combat::components::Spell;
use crate::combat::resources::CombatInput;

/// Latch the cast key until the next fixed step consumes it, so a press
/// between steps is never lost.
pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<CombatInput>,
) {
    if keyboard.just_pressed(KeyCode::KeyF) || keyboard.just_pressed(KeyCode::KeyJ) {
        input.cast_requested = true;
    }
}

/// Remove finished spells once the step's updates are done.
pub(crate) fn cleanup_spells(mut commands: Commands, spell_query: Query<(Entity, &Spell)>) {
    for (entity, spell) in &spell_query {
        if spell.is_destroyed() {
            commands.entity(entity).despawn();
        }
    }
}

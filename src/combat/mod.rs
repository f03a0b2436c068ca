//! Combat domain: the melee enemy, the spell and their interactions.

pub(crate) mod ai;
mod components;
mod contact;
mod events;
mod resources;
mod spawn;
mod spell;
mod systems;


pub use ai::enemy::{animate_enemy, integrate_enemy, think};
pub use components::{Enemy, EnemyAI, EnemyAction, Spell, SpellPhase};
pub use contact::resolve_contact;
pub use events::{PlayerKnockbackEvent, SpellImpactEvent};
pub use resources::{CombatInput, ContactMode, EnemyCalibration, EnemyTuning, SpellTuning};
pub use spawn::{EnemyBundle, spawn_enemy};
pub use spell::{cast_origin, step_spell};

use bevy::prelude::*;

use crate::combat::ai::{
    animate_enemies, apply_enemy_physics, apply_player_knockback, update_enemy_ai,
};
use crate::combat::contact::resolve_enemy_contacts;
use crate::combat::spell::{cast_spells, log_spell_impacts, update_spells};
use crate::combat::systems::{cleanup_spells, read_combat_input};
use crate::core::{GameState, StepSet};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .init_resource::<ContactMode>()
            .init_resource::<SpellTuning>()
            .init_resource::<CombatInput>()
            .add_message::<SpellImpactEvent>()
            .add_message::<PlayerKnockbackEvent>()
            .add_systems(
                Update,
                read_combat_input.run_if(in_state(GameState::Run)),
            )
            .add_systems(
                FixedUpdate,
                (
                    update_enemy_ai,
                    apply_enemy_physics,
                    apply_player_knockback,
                    animate_enemies,
                )
                    .chain()
                    .in_set(StepSet::Enemies),
            )
            .add_systems(FixedUpdate, resolve_enemy_contacts.in_set(StepSet::Contact))
            .add_systems(
                FixedUpdate,
                (cast_spells, update_spells, log_spell_impacts)
                    .chain()
                    .in_set(StepSet::Spells),
            )
            .add_systems(FixedUpdate, cleanup_spells.in_set(StepSet::Cleanup));
    }
}

//! Combat domain: enemy AI module.

pub(crate) mod enemy;

pub(crate) use enemy::{animate_enemies, apply_enemy_physics, apply_player_knockback, update_enemy_ai};

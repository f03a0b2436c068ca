//! Combat domain: enemy and spell components.

use bevy::prelude::*;

use crate::movement::Facing;

#[derive(Component, Debug)]
pub struct Enemy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyAction {
    #[default]
    Idle,
    Move,
    Attack,
}

#[derive(Component, Debug, Clone)]
pub struct EnemyAI {
    pub action: EnemyAction,
    /// Set while the attack clip plays; freezes AI and horizontal motion.
    pub is_attacking: bool,
    /// Spawn point, also where the enemy returns after falling out.
    pub home: Vec2,
}

impl EnemyAI {
    pub fn new(home: Vec2) -> Self {
        Self {
            action: EnemyAction::Idle,
            is_attacking: false,
            home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpellPhase {
    /// Charging in place.
    #[default]
    Invoke,
    /// Flying horizontally.
    Launch,
    /// Playing the hit effect where it struck.
    Impact,
    /// Finished; removed at the end of the step.
    Destroyed,
}

#[derive(Component, Debug, Clone)]
pub struct Spell {
    pub phase: SpellPhase,
    /// Steps spent in the current phase.
    pub timer: u32,
    /// Signed horizontal speed during launch.
    pub speed: f32,
    pub facing: Facing,
}

impl Spell {
    pub fn new(facing: Facing, speed: f32) -> Self {
        Self {
            phase: SpellPhase::Invoke,
            timer: 0,
            speed: facing.sign() * speed.abs(),
            facing,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.phase == SpellPhase::Destroyed
    }
}

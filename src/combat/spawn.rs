//! Combat domain: enemy spawning helpers.

use bevy::prelude::*;

use crate::combat::components::{Enemy, EnemyAI};
use crate::combat::resources::EnemyTuning;
use crate::movement::{ACTOR_Z, Body, DrawSize, Facing, MovementState, Velocity};
use crate::sprites::AnimationCursor;

/// Bundle for spawning the melee slime
#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub name: Name,
    pub ai: EnemyAI,
    pub body: Body,
    pub velocity: Velocity,
    pub movement: MovementState,
    pub cursor: AnimationCursor,
    pub draw_size: DrawSize,
    pub sprite: Sprite,
    pub transform: Transform,
    pub visibility: Visibility,
}

impl EnemyBundle {
    /// Enemy with its hitbox top-left at `position`, facing left.
    pub fn new(position: Vec2, tuning: &EnemyTuning) -> Self {
        let size = tuning.body_size;
        Self {
            enemy: Enemy,
            name: Name::new("Slime"),
            ai: EnemyAI::new(position),
            body: Body::new(position, size),
            velocity: Velocity::default(),
            movement: MovementState {
                on_ground: false,
                facing: Facing::Left,
            },
            cursor: AnimationCursor::default(),
            draw_size: DrawSize(size),
            sprite: Sprite {
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_xyz(0.0, 0.0, ACTOR_Z),
            visibility: Visibility::Inherited,
        }
    }
}

pub fn spawn_enemy(commands: &mut Commands, position: Vec2, tuning: &EnemyTuning) -> Entity {
    commands.spawn(EnemyBundle::new(position, tuning)).id()
}

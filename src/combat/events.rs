//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A launched spell struck an enemy.
#[derive(Debug)]
pub struct SpellImpactEvent {
    pub spell: Entity,
    pub enemy: Entity,
    pub position: Vec2,
}

impl Message for SpellImpactEvent {}

/// An enemy attack sets the player's velocity.
#[derive(Debug)]
pub struct PlayerKnockbackEvent {
    pub source: Entity,
    pub velocity: Vec2,
}

impl Message for PlayerKnockbackEvent {}

//! Movement domain: tuning and input resources.
//!
//! Tuning is expressed per fixed step: velocities in pixels per step,
//! gravity in pixels per step squared.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::components::Facing;
use crate::movement::systems::collisions::FallReset;
use crate::sprites::FrameRange;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub gravity: f32,
    /// Horizontal velocity multiplier applied every step (< 1).
    pub friction: f32,
    pub accel: f32,
    /// Vertical velocity set by a jump (negative is up).
    pub jump_impulse: f32,
    pub hitbox_width: f32,
    pub hitbox_height: f32,
    pub draw_size: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Gap kept between a freshly placed player and the ground below.
    pub spawn_margin: f32,
    pub fallback_spawn_y: f32,
    /// Distance below the canvas after which the player is reset.
    pub fall_margin: f32,
    pub safe_x: f32,
    pub safe_y: f32,
    /// Spawn x when entering a room from its left edge.
    pub left_entry_x: f32,
    /// Spawn x offset from the right edge when entering from the right.
    pub right_entry_offset: f32,
    pub animation: PlayerAnimations,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            friction: 0.8,
            accel: 1.0,
            jump_impulse: -12.0,
            hitbox_width: 32.0,
            hitbox_height: 48.0,
            draw_size: 64.0,
            spawn_x: 150.0,
            spawn_y: 200.0,
            spawn_margin: 10.0,
            fallback_spawn_y: 200.0,
            fall_margin: 100.0,
            safe_x: 100.0,
            safe_y: 100.0,
            left_entry_x: 20.0,
            right_entry_offset: 80.0,
            animation: PlayerAnimations::default(),
        }
    }
}

impl MovementTuning {
    pub fn hitbox(&self) -> Vec2 {
        Vec2::new(self.hitbox_width, self.hitbox_height)
    }

    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.spawn_x, self.spawn_y)
    }

    pub fn fall_reset(&self) -> FallReset {
        FallReset {
            margin: self.fall_margin,
            safe_point: Vec2::new(self.safe_x, self.safe_y),
        }
    }

    /// Spawn x when entering a room whose width is `canvas_width` from its
    /// right edge.
    pub fn right_entry_x(&self, canvas_width: f32) -> f32 {
        canvas_width - self.right_entry_offset
    }
}

/// Frame ranges of the player sheet per locomotion state.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerAnimations {
    pub ticks_per_frame: u32,
    pub idle: FrameRange,
    pub running: FrameRange,
    pub jumping: FrameRange,
}

impl Default for PlayerAnimations {
    fn default() -> Self {
        Self {
            ticks_per_frame: 8,
            idle: FrameRange::looping(0, 0),
            running: FrameRange::looping(0, 2),
            jumping: FrameRange::hold_last(3, 5),
        }
    }
}

/// Latest key-state snapshot, refreshed every frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Held direction; right wins when both are held.
    pub horizontal: Option<Facing>,
    pub jump_held: bool,
}

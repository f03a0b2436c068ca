//! Combat domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::components::EnemyAction;
use crate::movement::FallReset;

/// Which enemy tuning set is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum EnemyCalibration {
    /// 64x64 slime with wide ranges.
    #[default]
    Standard,
    /// 40x40 slime with tighter ranges.
    Compact,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EnemyTuning {
    pub body_size: Vec2,
    /// Chase moves at half this speed.
    pub speed: f32,
    pub attack_range: f32,
    /// Within this distance an attack also knocks the player back.
    pub knockback_range: f32,
    pub chase_range: f32,
    /// Attack knockback: x away from the enemy, y upward.
    pub knockback: Vec2,
    /// Knockback used by `ContactMode::Knockback`.
    pub contact_knockback: Vec2,
    pub fall_margin: f32,
    pub ticks_per_frame: u32,
    pub idle_frames: usize,
    pub move_frames: usize,
    pub attack_frames: usize,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self::standard()
    }
}

impl EnemyTuning {
    pub fn standard() -> Self {
        Self {
            body_size: Vec2::new(64.0, 64.0),
            speed: 1.5,
            attack_range: 90.0,
            knockback_range: 70.0,
            chase_range: 400.0,
            knockback: Vec2::new(10.0, 5.0),
            contact_knockback: Vec2::new(10.0, 5.0),
            fall_margin: 200.0,
            ticks_per_frame: 10,
            idle_frames: 7,
            move_frames: 7,
            attack_frames: 5,
        }
    }

    pub fn compact() -> Self {
        Self {
            body_size: Vec2::new(40.0, 40.0),
            attack_range: 60.0,
            knockback_range: 45.0,
            chase_range: 300.0,
            ..Self::standard()
        }
    }

    pub fn for_calibration(calibration: EnemyCalibration) -> Self {
        match calibration {
            EnemyCalibration::Standard => Self::standard(),
            EnemyCalibration::Compact => Self::compact(),
        }
    }

    pub fn clip_frames(&self, action: EnemyAction) -> usize {
        match action {
            EnemyAction::Idle => self.idle_frames,
            EnemyAction::Move => self.move_frames,
            EnemyAction::Attack => self.attack_frames,
        }
    }

    /// Enemies that fall out of the room go back to where they spawned.
    pub fn fall_reset(&self, home: Vec2) -> FallReset {
        FallReset {
            margin: self.fall_margin,
            safe_point: home,
        }
    }
}

/// How touching an enemy affects the player, outside of attacks.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum ContactMode {
    /// Push the player out to the enemy's near edge; velocity untouched.
    #[default]
    BodyBlock,
    /// Bounce the player away with `EnemyTuning::contact_knockback`.
    Knockback,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpellTuning {
    pub size: f32,
    pub speed: f32,
    /// Steps spent charging before launch.
    pub invoke_duration: u32,
    /// Maximum steps in flight.
    pub launch_duration: u32,
    pub launch_frames: usize,
    pub impact_frames: usize,
    pub ticks_per_frame: u32,
}

impl Default for SpellTuning {
    fn default() -> Self {
        Self {
            size: 64.0,
            speed: 6.0,
            invoke_duration: 60,
            launch_duration: 120,
            launch_frames: 3,
            impact_frames: 3,
            ticks_per_frame: 8,
        }
    }
}

impl SpellTuning {
    pub fn body_size(&self) -> Vec2 {
        Vec2::splat(self.size)
    }
}

/// Cast requests latched between fixed steps.
#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub cast_requested: bool,
}

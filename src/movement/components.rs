//! Movement domain: bodies, velocities and locomotion state.
//!
//! All positions are in canvas space (origin top-left, y down), so a
//! positive `vy` means falling.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Axis-aligned hitbox. `position` is the top-left corner.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Bottom-centre of the hitbox, the point that rests on the ground.
    pub fn foot(&self) -> Vec2 {
        Vec2::new(
            self.position.x + self.size.x / 2.0,
            self.position.y + self.size.y,
        )
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Strict AABB intersection; touching edges do not overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.position.x < other.right()
            && self.right() > other.position.x
            && self.position.y < other.bottom()
            && self.bottom() > other.position.y
    }
}

/// Pixels per fixed step.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity(pub Vec2);

/// Visual size of the sprite, centred on the hitbox.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct DrawSize(pub Vec2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn is_right(self) -> bool {
        self == Facing::Right
    }

    /// Facing toward a target `dx` away; zero counts as left.
    pub fn toward(dx: f32) -> Self {
        if dx > 0.0 { Facing::Right } else { Facing::Left }
    }
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
}

/// Player locomotion state, selects the animation range.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerAction {
    #[default]
    Idle,
    Running,
    Jumping,
}

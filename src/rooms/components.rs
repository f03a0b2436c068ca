//! Rooms domain: entity markers.

use bevy::prelude::*;

/// Full-canvas sprite showing the current room's background.
#[derive(Component, Debug)]
pub struct BackgroundLayer;

/// Z layer of the background, behind every actor.
pub const BACKGROUND_Z: f32 = -10.0;

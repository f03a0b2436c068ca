//! Core domain: canvas geometry and audio configuration.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::CanvasDef;

/// Size of the playfield in canvas pixels.
///
/// Gameplay runs in canvas space (origin top-left, y down). The camera
/// looks at world space (origin centre, y up); `to_world` bridges the two.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::from(CanvasDef::default())
    }
}

impl From<CanvasDef> for CanvasConfig {
    fn from(def: CanvasDef) -> Self {
        Self {
            width: def.width,
            height: def.height,
        }
    }
}

impl CanvasConfig {
    /// Convert a canvas-space point to world space.
    pub fn to_world(&self, canvas: Vec2) -> Vec2 {
        Vec2::new(canvas.x - self.width / 2.0, self.height / 2.0 - canvas.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Background music started together with the run.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MusicConfig {
    pub source: String,
    pub volume: f32,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            source: "audio/background_song.ogg".to_string(),
            volume: 0.08,
        }
    }
}

//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. Geometry is expressed in canvas space: x grows to
//! the right, y grows downward, origin at the top-left of the canvas.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::{ContactMode, EnemyCalibration, SpellTuning};
use crate::core::MusicConfig;
use crate::movement::MovementTuning;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Geometry
// ============================================================================

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize, Reflect)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// A walkable line between two points. `p1.x` need not be less than `p2.x`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn min_x(&self) -> f32 {
        self.p1.x.min(self.p2.x)
    }

    pub fn max_x(&self) -> f32 {
        self.p1.x.max(self.p2.x)
    }

    /// Zero horizontal extent; slope is undefined.
    pub fn is_vertical(&self) -> bool {
        self.p1.x == self.p2.x
    }

    pub fn is_finite(&self) -> bool {
        [self.p1.x, self.p1.y, self.p2.x, self.p2.y]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Whether `x` lies within the segment's horizontal span (inclusive).
    pub fn spans(&self, x: f32) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }

    /// Height of the line at `x` by linear interpolation.
    ///
    /// Returns `None` for vertical segments. At either endpoint the
    /// endpoint's own y is returned exactly.
    pub fn y_at(&self, x: f32) -> Option<f32> {
        if self.is_vertical() {
            return None;
        }
        if x == self.p1.x {
            return Some(self.p1.y);
        }
        if x == self.p2.x {
            return Some(self.p2.y);
        }
        let slope = (self.p2.y - self.p1.y) / (self.p2.x - self.p1.x);
        Some(self.p1.y + slope * (x - self.p1.x))
    }
}

/// Raw terrain of a room: either explicit lines or a connected polyline.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub enum TerrainShape {
    StaticLines(Vec<Segment>),
    Polyline(Vec<Point>),
}

// ============================================================================
// Rooms (rooms.ron)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect, Default)]
pub enum BackgroundKind {
    #[default]
    Image,
    Video,
}

/// Playback rate used for video backgrounds that don't declare their own.
pub const DEFAULT_VIDEO_PLAYBACK_RATE: f32 = 0.4;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct BackgroundDef {
    pub source: String,
    #[serde(default)]
    pub kind: BackgroundKind,
    #[serde(default)]
    pub playback_rate: Option<f32>,
    /// Still image drawn in place of a video background.
    #[serde(default)]
    pub poster: Option<String>,
}

impl BackgroundDef {
    pub fn image(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: BackgroundKind::Image,
            playback_rate: None,
            poster: None,
        }
    }

    pub fn video(source: impl Into<String>, poster: Option<&str>) -> Self {
        Self {
            source: source.into(),
            kind: BackgroundKind::Video,
            playback_rate: None,
            poster: poster.map(str::to_string),
        }
    }

    pub fn with_playback_rate(mut self, rate: f32) -> Self {
        self.playback_rate = Some(rate);
        self
    }

    /// Declared video, or an `.mp4` source declared without a kind.
    pub fn is_video(&self) -> bool {
        self.kind == BackgroundKind::Video || self.source.ends_with(".mp4")
    }

    /// Effective playback rate for video backgrounds.
    pub fn effective_playback_rate(&self) -> f32 {
        self.playback_rate.unwrap_or(DEFAULT_VIDEO_PLAYBACK_RATE)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct RoomDef {
    pub id: String,
    pub background: BackgroundDef,
    #[serde(default)]
    pub shape: Option<TerrainShape>,
    /// Rooms with a spawn point get exactly one enemy on entry.
    #[serde(default)]
    pub enemy_spawn: Option<Point>,
}

// ============================================================================
// Gameplay config (gameplay.ron) - Single struct, not a list
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct CanvasDef {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasDef {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GameplayConfig {
    pub schema_version: u32,
    pub canvas: CanvasDef,
    pub movement: MovementTuning,
    pub enemy_calibration: EnemyCalibration,
    pub contact_mode: ContactMode,
    pub spell: SpellTuning,
    pub music: MusicConfig,
}

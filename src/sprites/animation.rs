//! Frame-based animation playback.
//!
//! Every actor carries an `AnimationCursor` that advances once per fixed
//! step. How the cursor is bounded depends on the actor kind: the player
//! plays sub-ranges of one sheet, the enemy plays whole clips, and the
//! spell reads the raw frame count to drive its phases.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// What happens when a range reaches its last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum PlaybackMode {
    #[default]
    Loop,
    /// Stay on the last frame until the range changes.
    HoldLast,
}

/// Inclusive range of frames within a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FrameRange {
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub mode: PlaybackMode,
}

impl FrameRange {
    pub const fn looping(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            mode: PlaybackMode::Loop,
        }
    }

    pub const fn hold_last(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            mode: PlaybackMode::HoldLast,
        }
    }

    pub fn contains(&self, frame: usize) -> bool {
        frame >= self.start && frame <= self.end
    }
}

/// Current frame and the ticks spent on it.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationCursor {
    pub frame_index: usize,
    pub frame_timer: u32,
}

impl AnimationCursor {
    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.frame_timer = 0;
    }

    /// Count one tick. Returns true when the frame index was bumped.
    ///
    /// The index is left unbounded; callers clamp or wrap it.
    pub fn tick(&mut self, ticks_per_frame: u32) -> bool {
        self.frame_timer += 1;
        if self.frame_timer >= ticks_per_frame {
            self.frame_timer = 0;
            self.frame_index += 1;
            true
        } else {
            false
        }
    }

    /// Advance within `range`. A cursor outside the range snaps to its
    /// start first, so the index is always inside `range` afterwards.
    pub fn advance_in_range(&mut self, range: FrameRange, ticks_per_frame: u32) {
        if !range.contains(self.frame_index) {
            self.frame_index = range.start;
            self.frame_timer = 0;
        }

        if self.tick(ticks_per_frame) && self.frame_index > range.end {
            self.frame_index = match range.mode {
                PlaybackMode::Loop => range.start,
                PlaybackMode::HoldLast => range.end,
            };
        }
    }

    /// Advance through a clip of `frame_count` frames, wrapping to 0.
    /// Returns true on the tick the clip wraps.
    pub fn advance_wrapping(&mut self, frame_count: usize, ticks_per_frame: u32) -> bool {
        let frame_count = frame_count.max(1);
        self.tick(ticks_per_frame);
        if self.frame_index >= frame_count {
            self.frame_index = 0;
            true
        } else {
            false
        }
    }
}

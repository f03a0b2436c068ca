//! Rooms domain: background selection for the current room.
//!
//! Images go through the asset server. Videos cannot be decoded by the
//! engine, so a video background is kept as a playback request and its
//! poster still (if any) is drawn in its place.

use bevy::prelude::*;

use crate::content::BackgroundDef;

/// Playback settings requested for a video background.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoPlayback {
    pub source: String,
    pub looping: bool,
    pub muted: bool,
    pub rate: f32,
}

/// What to show for a background definition.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundRequest {
    /// Image to draw, relative to assets/.
    pub image: Option<String>,
    pub video: Option<VideoPlayback>,
}

impl BackgroundRequest {
    pub fn from_def(def: &BackgroundDef) -> Self {
        if def.is_video() {
            Self {
                image: def.poster.clone(),
                video: Some(VideoPlayback {
                    source: def.source.clone(),
                    looping: true,
                    muted: true,
                    rate: def.effective_playback_rate(),
                }),
            }
        } else {
            Self {
                image: Some(def.source.clone()),
                video: None,
            }
        }
    }
}

/// Background of the current room. Replaced wholesale on every switch.
#[derive(Resource, Debug, Default)]
pub struct CurrentBackground {
    pub room_id: Option<String>,
    pub image: Option<Handle<Image>>,
    pub video: Option<VideoPlayback>,
}

impl CurrentBackground {
    pub fn replace(&mut self, room_id: &str, request: BackgroundRequest, asset_server: &AssetServer) {
        self.room_id = Some(room_id.to_string());
        self.image = request.image.map(|path| asset_server.load(path));
        self.video = request.video;
    }

    /// One-line summary for the debug readout.
    pub fn describe(&self) -> String {
        let room = self.room_id.as_deref().unwrap_or("-");
        match &self.video {
            Some(video) => format!(
                "bg: {} video '{}' rate={} loop={} muted={}{}",
                room,
                video.source,
                video.rate,
                video.looping,
                video.muted,
                if self.image.is_some() { " +poster" } else { "" }
            ),
            None if self.image.is_some() => format!("bg: {} image", room),
            None => format!("bg: {} none", room),
        }
    }
}

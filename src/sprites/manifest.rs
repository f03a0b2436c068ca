//! Sprite manifest loading and asset management.
//!
//! The manifest maps clip keys (e.g. "slime.attack") to ordered frame image
//! paths. It is read from JSON at startup; when the file is missing or
//! broken the built-in table is used instead.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const MANIFEST_PATH: &str = "assets/sprites/manifest.json";

pub const PLAYER_SHEET: &str = "player.sheet";
pub const SLIME_IDLE: &str = "slime.idle";
pub const SLIME_MOVE: &str = "slime.move";
pub const SLIME_ATTACK: &str = "slime.attack";
pub const SPELL_INVOKE: &str = "spell.invoke";
pub const SPELL_LAUNCH: &str = "spell.launch";
pub const SPELL_IMPACT: &str = "spell.impact";

/// Resource containing clip definitions and their loaded frame handles.
#[derive(Resource, Default)]
pub struct SpriteManifest {
    pub version: u32,
    /// Clip key to frame paths, relative to assets/.
    pub clips: HashMap<String, Vec<String>>,
    /// Loaded texture handles per clip, in frame order.
    pub textures: HashMap<String, Vec<Handle<Image>>>,
}

/// Raw manifest JSON structure.
#[derive(Debug, Deserialize)]
pub(crate) struct ManifestJson {
    pub version: u32,
    pub clips: HashMap<String, Vec<String>>,
}

pub(crate) fn parse_manifest(contents: &str) -> Result<ManifestJson, serde_json::Error> {
    serde_json::from_str(contents)
}

fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix}{i}.png")).collect()
}

/// Clip table used when no manifest file is available.
pub fn builtin_clips() -> HashMap<String, Vec<String>> {
    HashMap::from([
        (
            PLAYER_SHEET.to_string(),
            numbered("sprites/player/player_sprite_", 6),
        ),
        (SLIME_IDLE.to_string(), numbered("sprites/slime/idle_", 7)),
        (SLIME_MOVE.to_string(), numbered("sprites/slime/move_", 7)),
        (SLIME_ATTACK.to_string(), numbered("sprites/slime/attack_", 5)),
        (
            SPELL_INVOKE.to_string(),
            numbered("sprites/magic/magic_ball_invoke_", 1),
        ),
        (
            SPELL_LAUNCH.to_string(),
            numbered("sprites/magic/magic_ball_launch_", 3),
        ),
        (
            SPELL_IMPACT.to_string(),
            numbered("sprites/magic/magic_ball_impact_", 3),
        ),
    ])
}

impl SpriteManifest {
    /// Load the manifest from a JSON file, falling back to the built-in
    /// clip table.
    pub fn load_from_file(&mut self, path: &str, asset_server: &AssetServer) {
        let manifest_path = Path::new(path);

        let parsed = if !manifest_path.exists() {
            warn!("Sprite manifest not found at {:?}, using built-in clips", path);
            None
        } else {
            match fs::read_to_string(manifest_path) {
                Ok(contents) => match parse_manifest(&contents) {
                    Ok(m) => Some(m),
                    Err(e) => {
                        error!("Failed to parse sprite manifest: {}", e);
                        None
                    }
                },
                Err(e) => {
                    error!("Failed to read sprite manifest: {}", e);
                    None
                }
            }
        };

        match parsed {
            Some(manifest_json) => {
                self.version = manifest_json.version;
                self.clips = manifest_json.clips;
            }
            None => {
                self.version = 0;
                self.clips = builtin_clips();
            }
        }

        // Preload all frames
        self.textures = self
            .clips
            .iter()
            .map(|(key, paths)| {
                let handles: Vec<Handle<Image>> =
                    paths.iter().map(|p| asset_server.load(p.clone())).collect();
                (key.clone(), handles)
            })
            .collect();

        info!(
            "Loaded sprite manifest v{} with {} clips",
            self.version,
            self.clips.len()
        );
    }

    /// Number of frames in a clip (0 when unknown).
    pub fn frame_count(&self, key: &str) -> usize {
        self.clips.get(key).map_or(0, Vec::len)
    }

    /// Texture handle for one frame of a clip.
    pub fn frame(&self, key: &str, index: usize) -> Option<&Handle<Image>> {
        self.textures.get(key)?.get(index)
    }
}

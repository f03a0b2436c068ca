//! Sprites module for frame animation and drawing.
//!
//! This module handles:
//! - Loading the sprite manifest from JSON
//! - Animation cursors and frame ranges
//! - Copying actor state onto sprites each frame

pub mod animation;
pub mod manifest;
pub mod render;


use bevy::prelude::*;

pub use animation::*;
pub use manifest::*;
pub use render::{ENEMY_PLACEHOLDER, enemy_clip, spell_frame};

use crate::sprites::render::{draw_enemies, draw_player, draw_spells, sync_body_transforms};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteManifest>()
            .add_systems(Startup, load_sprite_manifest)
            .add_systems(
                Update,
                (sync_body_transforms, draw_player, draw_enemies, draw_spells),
            );
    }
}

/// System to load the sprite manifest at startup.
fn load_sprite_manifest(mut manifest: ResMut<SpriteManifest>, asset_server: Res<AssetServer>) {
    manifest.load_from_file(MANIFEST_PATH, &asset_server);
}

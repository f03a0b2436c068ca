//! Content domain: room and gameplay definitions loaded from RON.
//!
//! Content is read synchronously while the app is being built so every
//! other plugin sees its resources from the first frame. Missing or broken
//! files fall back to the built-in definitions.

mod data;
mod defaults;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{
    BackgroundDef, BackgroundKind, CanvasDef, GameplayConfig, Point, RoomDef, Segment,
    TerrainShape,
};
pub use defaults::builtin_rooms;
pub use validation::validate_rooms;

use bevy::prelude::*;
use std::path::Path;

use crate::combat::EnemyTuning;
use crate::core::CanvasConfig;
use crate::rooms::RoomRegistry;

const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let base_path = Path::new(CONTENT_DIR);

        let config = match loader::load_gameplay_config(base_path) {
            Ok(config) => {
                info!("[CONTENT] Loaded gameplay config v{}", config.schema_version);
                config
            }
            Err(e) => {
                error!("[CONTENT] {}; using default tuning", e);
                GameplayConfig::default()
            }
        };

        let rooms = match loader::load_rooms(base_path) {
            Ok(rooms) => rooms,
            Err(e) => {
                error!("[CONTENT] {}; using built-in rooms", e);
                builtin_rooms()
            }
        };

        for issue in validate_rooms(&rooms, &config.canvas) {
            warn!("[CONTENT] {}", issue);
        }

        let mut registry = RoomRegistry::from_defs(&rooms);
        registry.request_switch(0, config.movement.spawn_x);
        info!(
            "[CONTENT] Room order: {:?}",
            registry.rooms.iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
        );

        app.insert_resource(CanvasConfig::from(config.canvas))
            .insert_resource(registry)
            .insert_resource(config.movement.clone())
            .insert_resource(EnemyTuning::for_calibration(config.enemy_calibration))
            .insert_resource(config.contact_mode)
            .insert_resource(config.spell.clone())
            .insert_resource(config.music.clone());
    }
}

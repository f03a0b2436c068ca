//! Core domain: camera, start gate and music.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::core::resources::MusicConfig;
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Start trigger: Enter leaves the menu. Only scheduled in `MainMenu`, so
/// repeated presses after the first do nothing.
pub(crate) fn handle_start_trigger(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        info!("Start trigger received, entering run");
        next_state.set(GameState::Run);
    }
}

pub(crate) fn start_music(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    music: Res<MusicConfig>,
) {
    commands.spawn((
        AudioPlayer::new(asset_server.load(&music.source)),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(music.volume)),
    ));
    info!("Background music '{}' requested", music.source);
}

//! Debug domain: hotkeys and gizmo overlays.

use bevy::prelude::*;

use crate::combat::{Enemy, EnemyTuning, Spell, spawn_enemy};
use crate::core::{CanvasConfig, GameState};
use crate::debug::state::DebugState;
use crate::movement::{Body, MovementTuning, Player};
use crate::rooms::RoomRegistry;

/// Terrain line colour (dark green).
const TERRAIN_COLOR: Color = Color::srgb(0.0, 0.39, 0.0);
const PLAYER_HITBOX_COLOR: Color = Color::srgb(0.2, 0.8, 1.0);
const ENEMY_HITBOX_COLOR: Color = Color::srgb(1.0, 0.3, 0.3);
const SPELL_HITBOX_COLOR: Color = Color::srgb(1.0, 0.9, 0.2);

/// Handle debug hotkeys: F1 terrain, F2 hitboxes, F3 info, Ctrl+E spawn an
/// enemy, Ctrl+N / Ctrl+P warp to the next / previous room.
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    canvas: Res<CanvasConfig>,
    movement: Res<MovementTuning>,
    enemy_tuning: Res<EnemyTuning>,
    mut debug_state: ResMut<DebugState>,
    mut registry: ResMut<RoomRegistry>,
    player_query: Query<&Body, With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_terrain = !debug_state.show_terrain;
        info!("[DEBUG] Terrain lines: {}", debug_state.show_terrain);
    }
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_hitboxes = !debug_state.show_hitboxes;
        info!("[DEBUG] Hitboxes: {}", debug_state.show_hitboxes);
    }
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl || *state.get() != GameState::Run {
        return;
    }

    // Ctrl+E: Spawn an enemy above the player
    if keyboard.just_pressed(KeyCode::KeyE) {
        if let Ok(body) = player_query.single() {
            let pos = Vec2::new(body.position.x, body.position.y - enemy_tuning.body_size.y);
            spawn_enemy(&mut commands, pos, &enemy_tuning);
            info!("[DEBUG] Spawned enemy at {:?}", pos);
        }
    }

    // Ctrl+N / Ctrl+P: Warp between rooms
    if keyboard.just_pressed(KeyCode::KeyN) && registry.has_next() {
        let index = registry.current_index + 1;
        registry.request_switch(index, movement.left_entry_x);
        info!("[DEBUG] Warping to room {}", index);
    }
    if keyboard.just_pressed(KeyCode::KeyP) && registry.has_previous() {
        let index = registry.current_index - 1;
        registry.request_switch(index, movement.right_entry_x(canvas.width));
        info!("[DEBUG] Warping to room {}", index);
    }
}

pub(crate) fn draw_terrain_lines(
    mut gizmos: Gizmos,
    debug_state: Res<DebugState>,
    canvas: Res<CanvasConfig>,
    registry: Res<RoomRegistry>,
) {
    if !debug_state.show_terrain {
        return;
    }

    for segment in registry.segments() {
        gizmos.line_2d(
            canvas.to_world(segment.p1.into()),
            canvas.to_world(segment.p2.into()),
            TERRAIN_COLOR,
        );
    }
}

fn outline(gizmos: &mut Gizmos, canvas: &CanvasConfig, body: &Body, color: Color) {
    let top_left = body.position;
    let corners = [
        top_left,
        top_left + Vec2::new(body.size.x, 0.0),
        top_left + body.size,
        top_left + Vec2::new(0.0, body.size.y),
    ];
    for (start, end) in corners.iter().zip(corners.iter().cycle().skip(1)) {
        gizmos.line_2d(canvas.to_world(*start), canvas.to_world(*end), color);
    }
}

pub(crate) fn draw_hitboxes(
    mut gizmos: Gizmos,
    debug_state: Res<DebugState>,
    canvas: Res<CanvasConfig>,
    player_query: Query<&Body, With<Player>>,
    enemy_query: Query<&Body, With<Enemy>>,
    spell_query: Query<&Body, With<Spell>>,
) {
    if !debug_state.show_hitboxes {
        return;
    }

    for body in &player_query {
        outline(&mut gizmos, &canvas, body, PLAYER_HITBOX_COLOR);
    }
    for body in &enemy_query {
        outline(&mut gizmos, &canvas, body, ENEMY_HITBOX_COLOR);
    }
    for body in &spell_query {
        outline(&mut gizmos, &canvas, body, SPELL_HITBOX_COLOR);
    }
}

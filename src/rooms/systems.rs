//! Rooms domain: edge checks, room switching and the background layer.

use bevy::prelude::*;

use crate::combat::{Enemy, EnemyTuning, Spell, spawn_enemy};
use crate::core::CanvasConfig;
use crate::movement::{Body, MovementTuning, Player, Velocity};
use crate::rooms::background::{BackgroundRequest, CurrentBackground};
use crate::rooms::components::{BACKGROUND_Z, BackgroundLayer};
use crate::rooms::events::RoomEnteredEvent;
use crate::rooms::graph::{EdgeEntries, EdgeOutcome, room_edge_outcome};
use crate::rooms::registry::RoomRegistry;
use crate::rooms::spawn::spawn_height;

pub(crate) fn check_room_edges(
    canvas: Res<CanvasConfig>,
    tuning: Res<MovementTuning>,
    mut registry: ResMut<RoomRegistry>,
    mut player_query: Query<(&mut Body, &mut Velocity), With<Player>>,
) {
    let entries = EdgeEntries {
        left: tuning.left_entry_x,
        right: tuning.right_entry_x(canvas.width),
    };

    for (mut body, mut velocity) in &mut player_query {
        match room_edge_outcome(
            &registry,
            body.position.x,
            body.size.x,
            canvas.width,
            entries,
        ) {
            EdgeOutcome::Inside => {}
            EdgeOutcome::Clamp { x } => {
                body.position.x = x;
                velocity.0.x = 0.0;
            }
            EdgeOutcome::Switch(switch) => {
                info!(
                    "[TRANSITION] Player leaving room {} for room {}",
                    registry.current_index, switch.index
                );
                registry.request_switch(switch.index, switch.spawn_x);
            }
        }
    }
}

/// Apply a pending room switch: change the current room, replace the
/// enemies, drop spells still in flight and place the player on the new
/// room's ground.
pub(crate) fn process_room_switch(
    mut commands: Commands,
    mut registry: ResMut<RoomRegistry>,
    movement: Res<MovementTuning>,
    enemy_tuning: Res<EnemyTuning>,
    room_actors: Query<Entity, Or<(With<Enemy>, With<Spell>)>>,
    mut player_query: Query<&mut Body, With<Player>>,
    mut entered_events: MessageWriter<RoomEnteredEvent>,
) {
    let Some(switch) = registry.take_pending() else {
        return;
    };

    let room_count = registry.rooms.len();
    let Some(room) = registry.enter(switch.index) else {
        warn!(
            "[TRANSITION] Ignoring switch to room {} ({} rooms loaded)",
            switch.index, room_count
        );
        return;
    };

    for entity in &room_actors {
        commands.entity(entity).despawn();
    }

    if let Some(spawn) = room.enemy_spawn {
        let enemy = spawn_enemy(&mut commands, spawn, &enemy_tuning);
        debug!("Spawned enemy {:?} at {:?}", enemy, spawn);
    }

    for mut body in &mut player_query {
        let y = spawn_height(
            &room.segments,
            switch.spawn_x,
            body.size,
            movement.spawn_margin,
            movement.fallback_spawn_y,
        );
        body.position = Vec2::new(switch.spawn_x, y);
    }

    info!(
        "[TRANSITION] Entered room '{}' ({}/{}) at x={}",
        room.id,
        switch.index + 1,
        room_count,
        switch.spawn_x
    );
    entered_events.write(RoomEnteredEvent {
        index: switch.index,
        room_id: room.id.clone(),
    });
}

/// Swap the background when a room is entered.
pub(crate) fn apply_room_background(
    mut entered_events: MessageReader<RoomEnteredEvent>,
    registry: Res<RoomRegistry>,
    asset_server: Res<AssetServer>,
    mut background: ResMut<CurrentBackground>,
) {
    for event in entered_events.read() {
        let Some(room) = registry.rooms.get(event.index) else {
            continue;
        };

        let request = BackgroundRequest::from_def(&room.background);
        if let Some(video) = &request.video {
            info!(
                "[BACKGROUND] Video '{}' (loop={}, muted={}, rate={})",
                video.source, video.looping, video.muted, video.rate
            );
            if request.image.is_none() {
                warn!("[BACKGROUND] Room '{}' has no poster; background left empty", room.id);
            }
        }
        background.replace(&event.room_id, request, &asset_server);
    }
}

pub(crate) fn spawn_background_layer(mut commands: Commands, canvas: Res<CanvasConfig>) {
    commands.spawn((
        BackgroundLayer,
        Name::new("Background"),
        Sprite {
            custom_size: Some(canvas.size()),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
        Visibility::Hidden,
    ));
}

/// Show the background image once it has loaded; hide it otherwise.
pub(crate) fn sync_background_layer(
    background: Res<CurrentBackground>,
    images: Res<Assets<Image>>,
    mut layer_query: Query<(&mut Sprite, &mut Visibility), With<BackgroundLayer>>,
) {
    for (mut sprite, mut visibility) in &mut layer_query {
        match background
            .image
            .as_ref()
            .filter(|handle| images.get(*handle).is_some())
        {
            Some(handle) => {
                if sprite.image != *handle {
                    sprite.image = handle.clone();
                }
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

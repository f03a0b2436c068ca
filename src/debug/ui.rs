//! Debug domain: info overlay.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::movement::{Body, MovementState, Player, PlayerAction, Velocity};
use crate::rooms::{CurrentBackground, RoomRegistry};

/// Marker for the debug info overlay text
#[derive(Component)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(mut commands: Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(8.0),
            top: Val::Px(8.0),
            ..default()
        },
        ZIndex(200),
        Visibility::Hidden,
    ));
}

pub(crate) fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    registry: Res<RoomRegistry>,
    background: Res<CurrentBackground>,
    player_query: Query<(&Body, &Velocity, &MovementState, &PlayerAction), With<Player>>,
    mut overlay_query: Query<(&mut Text, &mut Visibility), With<DebugInfoOverlay>>,
) {
    let Ok((mut text, mut visibility)) = overlay_query.single_mut() else {
        return;
    };

    if !debug_state.show_info {
        *visibility = Visibility::Hidden;
        return;
    }
    *visibility = Visibility::Inherited;

    let room = registry.current().map_or("-", |r| r.id.as_str());
    let mut info = format!(
        "room: {} ({}/{})",
        room,
        registry.current_index + 1,
        registry.rooms.len()
    );
    info.push('\n');
    info.push_str(&background.describe());

    if let Ok((body, velocity, state, action)) = player_query.single() {
        info.push_str(&format!(
            "\npos: ({:.1}, {:.1})\nvel: ({:.2}, {:.2})\n{:?} grounded={} facing={:?}",
            body.position.x,
            body.position.y,
            velocity.0.x,
            velocity.0.y,
            action,
            state.on_ground,
            state.facing
        ));
    }

    **text = info;
}

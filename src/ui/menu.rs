//! UI domain: start gate overlay.

use bevy::prelude::*;

/// Marker for the start overlay
#[derive(Component)]
pub struct StartScreenUI;

pub const START_PROMPT: &str = "PRESS ENTER TO START";

pub(crate) fn spawn_start_screen(mut commands: Commands) {
    // Dimmed overlay over the first room's background
    commands
        .spawn((
            StartScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(START_PROMPT),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub(crate) fn despawn_start_screen(
    mut commands: Commands,
    query: Query<Entity, With<StartScreenUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

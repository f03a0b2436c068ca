//! Draw synchronisation: copy actor state onto their sprites.
//!
//! Bodies live in canvas space; transforms are placed at the hitbox centre
//! in world space. A frame is only shown once its image has loaded.

use bevy::prelude::*;

use crate::combat::{Enemy, EnemyAI, EnemyAction, Spell, SpellPhase};
use crate::core::{CanvasConfig, GameState};
use crate::movement::{Body, DrawSize, MovementState, Player};
use crate::sprites::animation::AnimationCursor;
use crate::sprites::manifest::{
    PLAYER_SHEET, SLIME_ATTACK, SLIME_IDLE, SLIME_MOVE, SPELL_IMPACT, SPELL_INVOKE, SPELL_LAUNCH,
    SpriteManifest,
};

/// Fill drawn for enemies whose frame has not loaded yet.
pub const ENEMY_PLACEHOLDER: Color = Color::srgb(0.5, 0.0, 0.5);

pub fn enemy_clip(action: EnemyAction) -> &'static str {
    match action {
        EnemyAction::Idle => SLIME_IDLE,
        EnemyAction::Move => SLIME_MOVE,
        EnemyAction::Attack => SLIME_ATTACK,
    }
}

/// Clip and frame to draw for a spell; `None` once it is destroyed.
pub fn spell_frame(
    phase: SpellPhase,
    frame_index: usize,
    launch_frames: usize,
    impact_frames: usize,
) -> Option<(&'static str, usize)> {
    match phase {
        SpellPhase::Invoke => Some((SPELL_INVOKE, 0)),
        SpellPhase::Launch => Some((SPELL_LAUNCH, frame_index % launch_frames.max(1))),
        SpellPhase::Impact => Some((
            SPELL_IMPACT,
            frame_index.min(impact_frames.saturating_sub(1)),
        )),
        SpellPhase::Destroyed => None,
    }
}

/// Point the sprite at `handle` if that image is ready. Returns false when
/// there is nothing drawable.
fn apply_frame(sprite: &mut Sprite, handle: Option<&Handle<Image>>, images: &Assets<Image>) -> bool {
    let Some(handle) = handle.filter(|h| images.get(*h).is_some()) else {
        return false;
    };
    if sprite.image != *handle {
        sprite.image = handle.clone();
    }
    true
}

pub(crate) fn sync_body_transforms(
    canvas: Res<CanvasConfig>,
    mut query: Query<(&Body, &mut Transform)>,
) {
    for (body, mut transform) in &mut query {
        let world = canvas.to_world(body.center());
        transform.translation.x = world.x.floor();
        transform.translation.y = world.y.floor();
    }
}

/// The player stays hidden behind the start gate.
pub(crate) fn draw_player(
    manifest: Res<SpriteManifest>,
    images: Res<Assets<Image>>,
    game_state: Res<State<GameState>>,
    mut query: Query<
        (&AnimationCursor, &MovementState, &mut Sprite, &mut Visibility),
        With<Player>,
    >,
) {
    let running = *game_state.get() == GameState::Run;

    for (cursor, state, mut sprite, mut visibility) in &mut query {
        let handle = manifest.frame(PLAYER_SHEET, cursor.frame_index);
        if running && apply_frame(&mut sprite, handle, &images) {
            sprite.flip_x = !state.facing.is_right();
            *visibility = Visibility::Inherited;
        } else {
            *visibility = Visibility::Hidden;
        }
    }
}

pub(crate) fn draw_enemies(
    manifest: Res<SpriteManifest>,
    images: Res<Assets<Image>>,
    mut query: Query<
        (
            &EnemyAI,
            &AnimationCursor,
            &MovementState,
            &Body,
            &DrawSize,
            &mut Sprite,
        ),
        With<Enemy>,
    >,
) {
    for (ai, cursor, state, body, draw_size, mut sprite) in &mut query {
        let handle = manifest.frame(enemy_clip(ai.action), cursor.frame_index);
        if apply_frame(&mut sprite, handle, &images) {
            sprite.color = Color::WHITE;
            sprite.custom_size = Some(draw_size.0);
            sprite.flip_x = !state.facing.is_right();
        } else {
            sprite.image = Handle::default();
            sprite.color = ENEMY_PLACEHOLDER;
            sprite.custom_size = Some(body.size);
        }
    }
}

pub(crate) fn draw_spells(
    manifest: Res<SpriteManifest>,
    images: Res<Assets<Image>>,
    mut query: Query<(&Spell, &AnimationCursor, &mut Sprite, &mut Visibility)>,
) {
    let launch_frames = manifest.frame_count(SPELL_LAUNCH);
    let impact_frames = manifest.frame_count(SPELL_IMPACT);

    for (spell, cursor, mut sprite, mut visibility) in &mut query {
        let handle = spell_frame(spell.phase, cursor.frame_index, launch_frames, impact_frames)
            .and_then(|(clip, index)| manifest.frame(clip, index));

        if apply_frame(&mut sprite, handle, &images) {
            sprite.flip_x = !spell.facing.is_right();
            *visibility = Visibility::Inherited;
        } else {
            *visibility = Visibility::Hidden;
        }
    }
}

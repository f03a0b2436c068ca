//! Rooms domain: tests for terrain extraction, room flow and backgrounds.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::{check_room_edges, process_room_switch};
use super::{
    BackgroundRequest, CurrentBackground, EdgeEntries, EdgeOutcome, RoomData, RoomEnteredEvent,
    RoomRegistry, RoomSwitch, VideoPlayback, extract_segments, room_edge_outcome, spawn_height,
};
use crate::combat::{Enemy, EnemyTuning, Spell, spawn_enemy};
use crate::content::{BackgroundDef, Point, RoomDef, Segment, TerrainShape, builtin_rooms};
use crate::core::CanvasConfig;
use crate::movement::{Body, Facing, MovementTuning, Player, Velocity};

const CANVAS_WIDTH: f32 = 800.0;
const PLAYER_WIDTH: f32 = 32.0;

fn entries() -> EdgeEntries {
    EdgeEntries {
        left: 20.0,
        right: 720.0,
    }
}

fn registry_at(index: usize) -> RoomRegistry {
    let mut registry = RoomRegistry::from_defs(&builtin_rooms());
    registry.current_index = index;
    registry
}

fn flat(y: f32) -> Segment {
    Segment::new(Point::new(0.0, y), Point::new(800.0, y))
}

// -----------------------------------------------------------------------------
// Terrain extraction tests
// -----------------------------------------------------------------------------

#[test]
fn test_polyline_yields_consecutive_segments() {
    let points = vec![
        Point::new(0.0, 450.0),
        Point::new(100.0, 400.0),
        Point::new(200.0, 420.0),
    ];
    let segments = extract_segments(Some(&TerrainShape::Polyline(points)));
    assert_eq!(
        segments,
        vec![
            Segment::new(Point::new(0.0, 450.0), Point::new(100.0, 400.0)),
            Segment::new(Point::new(100.0, 400.0), Point::new(200.0, 420.0)),
        ]
    );
}

#[test]
fn test_missing_or_short_shape_has_no_ground() {
    assert!(extract_segments(None).is_empty());
    assert!(extract_segments(Some(&TerrainShape::Polyline(vec![Point::new(1.0, 2.0)]))).is_empty());
    assert!(extract_segments(Some(&TerrainShape::StaticLines(Vec::new()))).is_empty());
}

#[test]
fn test_vertical_segments_are_dropped() {
    let shape = TerrainShape::Polyline(vec![
        Point::new(0.0, 450.0),
        Point::new(300.0, 450.0),
        Point::new(300.0, 350.0),
        Point::new(600.0, 350.0),
    ]);
    let segments = extract_segments(Some(&shape));
    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(|s| !s.is_vertical()));
}

#[test]
fn test_extraction_is_idempotent() {
    for room in builtin_rooms() {
        let once = extract_segments(room.shape.as_ref());
        let twice = extract_segments(Some(&TerrainShape::StaticLines(once.clone())));
        assert_eq!(once, twice, "room {}", room.id);
    }
}

#[test]
fn test_room_data_keeps_spawn_point() {
    let rooms = builtin_rooms();
    let data = RoomData::from_def(&rooms[1]);
    assert_eq!(data.id, "room2");
    assert_eq!(data.segments.len(), 5);
    assert_eq!(data.enemy_spawn, Some(Vec2::new(400.0, 300.0)));
    assert!(RoomData::from_def(&rooms[0]).enemy_spawn.is_none());
}

// -----------------------------------------------------------------------------
// Registry tests
// -----------------------------------------------------------------------------

#[test]
fn test_empty_registry_has_no_segments() {
    let registry = RoomRegistry::default();
    assert!(registry.current().is_none());
    assert!(registry.segments().is_empty());
    assert!(!registry.has_next());
    assert!(!registry.has_previous());
}

#[test]
fn test_enter_out_of_range_leaves_registry_unchanged() {
    let mut registry = registry_at(2);
    assert!(registry.enter(9).is_none());
    assert_eq!(registry.current_index, 2);

    assert_eq!(registry.enter(3).map(|room| room.id.as_str()), Some("room5"));
    assert_eq!(registry.current_index, 3);
}

#[test]
fn test_pending_switch_is_taken_once() {
    let mut registry = registry_at(0);
    registry.request_switch(1, 20.0);
    assert_eq!(
        registry.take_pending(),
        Some(RoomSwitch {
            index: 1,
            spawn_x: 20.0
        })
    );
    assert!(registry.take_pending().is_none());
}

// -----------------------------------------------------------------------------
// Edge tests
// -----------------------------------------------------------------------------

#[test]
fn test_inside_room_does_nothing() {
    let registry = registry_at(1);
    assert_eq!(
        room_edge_outcome(&registry, 768.0, PLAYER_WIDTH, CANVAS_WIDTH, entries()),
        EdgeOutcome::Inside
    );
    assert_eq!(
        room_edge_outcome(&registry, 0.0, PLAYER_WIDTH, CANVAS_WIDTH, entries()),
        EdgeOutcome::Inside
    );
}

#[test]
fn test_right_edge_leads_to_next_room() {
    let registry = registry_at(0);
    assert_eq!(
        room_edge_outcome(&registry, 769.0, PLAYER_WIDTH, CANVAS_WIDTH, entries()),
        EdgeOutcome::Switch(RoomSwitch {
            index: 1,
            spawn_x: 20.0
        })
    );
}

#[test]
fn test_left_edge_leads_to_previous_room() {
    let registry = registry_at(2);
    assert_eq!(
        room_edge_outcome(&registry, -1.0, PLAYER_WIDTH, CANVAS_WIDTH, entries()),
        EdgeOutcome::Switch(RoomSwitch {
            index: 1,
            spawn_x: 720.0
        })
    );
}

#[test]
fn test_last_room_right_edge_is_a_wall() {
    let registry = registry_at(3);
    let x = CANVAS_WIDTH - PLAYER_WIDTH + 1.0;
    assert_eq!(
        room_edge_outcome(&registry, x, PLAYER_WIDTH, CANVAS_WIDTH, entries()),
        EdgeOutcome::Clamp { x: 768.0 }
    );
}

#[test]
fn test_first_room_left_edge_is_a_wall() {
    let registry = registry_at(0);
    assert_eq!(
        room_edge_outcome(&registry, -3.0, PLAYER_WIDTH, CANVAS_WIDTH, entries()),
        EdgeOutcome::Clamp { x: 0.0 }
    );
}

// -----------------------------------------------------------------------------
// Spawn placement tests
// -----------------------------------------------------------------------------

#[test]
fn test_spawn_sits_above_ground_under_foot() {
    let size = Vec2::new(32.0, 48.0);
    let y = spawn_height(&[flat(450.0)], 20.0, size, 10.0, 200.0);
    assert_eq!(y, 392.0);
}

#[test]
fn test_spawn_over_gap_uses_fallback() {
    let segments = vec![Segment::new(Point::new(0.0, 450.0), Point::new(275.0, 450.0))];
    let y = spawn_height(&segments, 400.0, Vec2::new(32.0, 48.0), 10.0, 200.0);
    assert_eq!(y, 200.0);
}

// -----------------------------------------------------------------------------
// Background tests
// -----------------------------------------------------------------------------

#[test]
fn test_image_background_request() {
    let request = BackgroundRequest::from_def(&BackgroundDef::image("bg/one.png"));
    assert_eq!(request.image.as_deref(), Some("bg/one.png"));
    assert!(request.video.is_none());
}

#[test]
fn test_video_background_request_uses_poster() {
    let def = BackgroundDef::video("bg/cave.mp4", Some("bg/cave.png")).with_playback_rate(0.6);
    let request = BackgroundRequest::from_def(&def);
    assert_eq!(request.image.as_deref(), Some("bg/cave.png"));

    let video = request.video.unwrap();
    assert_eq!(video.source, "bg/cave.mp4");
    assert!(video.looping);
    assert!(video.muted);
    assert_eq!(video.rate, 0.6);
}

#[test]
fn test_video_without_poster_draws_nothing() {
    let request = BackgroundRequest::from_def(&BackgroundDef::video("bg/cave.mp4", None));
    assert!(request.image.is_none());
    assert_eq!(request.video.map(|v| v.rate), Some(0.4));
}

#[test]
fn test_background_readout_reports_video_request() {
    let background = CurrentBackground {
        room_id: Some("room5".to_string()),
        image: None,
        video: Some(VideoPlayback {
            source: "bg/cave.mp4".to_string(),
            looping: true,
            muted: true,
            rate: 0.6,
        }),
    };
    assert_eq!(
        background.describe(),
        "bg: room5 video 'bg/cave.mp4' rate=0.6 loop=true muted=true"
    );
}

#[test]
fn test_background_readout_before_any_room() {
    assert_eq!(CurrentBackground::default().describe(), "bg: - none");
}

// -----------------------------------------------------------------------------
// Room switch system tests
// -----------------------------------------------------------------------------

fn switch_world(registry: RoomRegistry) -> World {
    let mut world = World::new();
    world.insert_resource(registry);
    world.insert_resource(MovementTuning::default());
    world.insert_resource(EnemyTuning::standard());
    world.init_resource::<Messages<RoomEnteredEvent>>();
    world.spawn((
        Player,
        Body::new(Vec2::new(769.0, 402.0), Vec2::new(32.0, 48.0)),
    ));
    world
}

fn enemy_count(world: &mut World) -> usize {
    world
        .query_filtered::<&Body, With<Enemy>>()
        .iter(world)
        .count()
}

fn player_position(world: &mut World) -> Vec2 {
    world
        .query_filtered::<&Body, With<Player>>()
        .iter(world)
        .map(|body| body.position)
        .next()
        .unwrap_or(Vec2::NAN)
}

#[test]
fn test_switch_places_player_and_spawns_room_enemy() {
    let mut registry = registry_at(0);
    registry.request_switch(1, 20.0);
    let mut world = switch_world(registry);

    world.run_system_once(process_room_switch).unwrap();

    assert_eq!(world.resource::<RoomRegistry>().current_index, 1);
    assert!(world.resource::<RoomRegistry>().pending.is_none());
    // room2's lower-left floor is at 450
    assert_eq!(player_position(&mut world), Vec2::new(20.0, 392.0));
    assert_eq!(enemy_count(&mut world), 1);
    assert_eq!(world.resource::<Messages<RoomEnteredEvent>>().len(), 1);
}

#[test]
fn test_switch_replaces_previous_enemies() {
    let mut registry = registry_at(1);
    registry.request_switch(2, 20.0);
    let mut world = switch_world(registry);
    world
        .run_system_once(|mut commands: Commands| {
            let tuning = EnemyTuning::standard();
            spawn_enemy(&mut commands, Vec2::new(400.0, 300.0), &tuning);
        })
        .unwrap();
    assert_eq!(enemy_count(&mut world), 1);

    world.run_system_once(process_room_switch).unwrap();

    assert_eq!(world.resource::<RoomRegistry>().current_index, 2);
    assert_eq!(enemy_count(&mut world), 0);
}

#[test]
fn test_out_of_range_switch_is_ignored() {
    let mut registry = registry_at(3);
    registry.request_switch(4, 20.0);
    let mut world = switch_world(registry);

    world.run_system_once(process_room_switch).unwrap();

    assert_eq!(world.resource::<RoomRegistry>().current_index, 3);
    assert_eq!(player_position(&mut world), Vec2::new(769.0, 402.0));
    assert!(world.resource::<Messages<RoomEnteredEvent>>().is_empty());
}

#[test]
fn test_room_without_spawn_point_has_no_enemy() {
    let defs = vec![RoomDef {
        id: "solo".to_string(),
        background: BackgroundDef::image("bg.png"),
        shape: Some(TerrainShape::StaticLines(vec![flat(450.0)])),
        enemy_spawn: None,
    }];
    let mut registry = RoomRegistry::from_defs(&defs);
    registry.request_switch(0, 150.0);
    let mut world = switch_world(registry);

    world.run_system_once(process_room_switch).unwrap();

    assert_eq!(enemy_count(&mut world), 0);
    assert_eq!(player_position(&mut world), Vec2::new(150.0, 392.0));
}

#[test]
fn test_switch_drops_spells_in_flight() {
    let mut registry = registry_at(0);
    registry.request_switch(1, 20.0);
    let mut world = switch_world(registry);
    world.spawn((
        Spell::new(Facing::Right, 6.0),
        Body::new(Vec2::new(700.0, 394.0), Vec2::splat(64.0)),
    ));

    world.run_system_once(process_room_switch).unwrap();

    let spells = world.query::<&Spell>().iter(&world).count();
    assert_eq!(spells, 0);
    // room2's own enemy is spawned fresh
    assert_eq!(enemy_count(&mut world), 1);
}

// -----------------------------------------------------------------------------
// Room edge system tests
// -----------------------------------------------------------------------------

fn edge_world(index: usize, x: f32, vx: f32) -> World {
    let mut world = World::new();
    world.insert_resource(registry_at(index));
    world.insert_resource(CanvasConfig::default());
    world.insert_resource(MovementTuning::default());
    world.spawn((
        Player,
        Body::new(Vec2::new(x, 402.0), Vec2::new(32.0, 48.0)),
        Velocity(Vec2::new(vx, 0.0)),
    ));
    world
}

fn player_motion(world: &mut World) -> (Vec2, Vec2) {
    world
        .query_filtered::<(&Body, &Velocity), With<Player>>()
        .iter(world)
        .map(|(body, velocity)| (body.position, velocity.0))
        .next()
        .unwrap_or((Vec2::NAN, Vec2::NAN))
}

#[test]
fn test_last_room_wall_clamps_and_stops_player() {
    let mut world = edge_world(3, CANVAS_WIDTH - PLAYER_WIDTH + 1.0, 4.0);

    world.run_system_once(check_room_edges).unwrap();

    let (position, velocity) = player_motion(&mut world);
    assert_eq!(position.x, 768.0);
    assert_eq!(velocity.x, 0.0);
    let registry = world.resource::<RoomRegistry>();
    assert!(registry.pending.is_none());
    assert_eq!(registry.current_index, 3);
}

#[test]
fn test_first_room_wall_clamps_and_stops_player() {
    let mut world = edge_world(0, -2.0, -3.0);

    world.run_system_once(check_room_edges).unwrap();

    let (position, velocity) = player_motion(&mut world);
    assert_eq!(position.x, 0.0);
    assert_eq!(velocity.x, 0.0);
    assert!(world.resource::<RoomRegistry>().pending.is_none());
}

#[test]
fn test_crossing_right_edge_requests_next_room() {
    let mut world = edge_world(1, 770.0, 4.0);

    world.run_system_once(check_room_edges).unwrap();

    let (position, velocity) = player_motion(&mut world);
    assert_eq!(position.x, 770.0);
    assert_eq!(velocity.x, 4.0);
    assert_eq!(
        world.resource::<RoomRegistry>().pending,
        Some(RoomSwitch {
            index: 2,
            spawn_x: 20.0
        })
    );
}

#[test]
fn test_crossing_left_edge_requests_previous_room() {
    let mut world = edge_world(2, -1.0, -4.0);

    world.run_system_once(check_room_edges).unwrap();

    assert_eq!(
        world.resource::<RoomRegistry>().pending,
        Some(RoomSwitch {
            index: 1,
            spawn_x: 720.0
        })
    );
}

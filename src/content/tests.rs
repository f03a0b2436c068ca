//! Content domain: tests for RON parsing, built-in rooms and validation.

use super::data::{BackgroundKind, CanvasDef, DEFAULT_VIDEO_PLAYBACK_RATE, GameplayConfig};
use super::loader::{parse_data_file, parse_single_file};
use super::validation::RoomProblem;
use super::{BackgroundDef, Point, RoomDef, Segment, TerrainShape, builtin_rooms, validate_rooms};
use crate::combat::{ContactMode, EnemyCalibration};

fn room(id: &str, shape: Option<TerrainShape>) -> RoomDef {
    RoomDef {
        id: id.to_string(),
        background: BackgroundDef::image("bg.png"),
        shape,
        enemy_spawn: None,
    }
}

// -----------------------------------------------------------------------------
// RON parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_rooms_with_both_shape_variants() {
    let ron = r#"
        (
            schema_version: 1,
            items: [
                (
                    id: "lines",
                    background: (source: "a.png"),
                    shape: StaticLines([
                        (p1: (x: 0.0, y: 450.0), p2: (x: 800.0, y: 450.0)),
                    ]),
                    enemy_spawn: (x: 400.0, y: 300.0),
                ),
                (
                    id: "poly",
                    background: (source: "b.mp4", kind: Video, playback_rate: 0.6),
                    shape: Polyline([(x: 0.0, y: 450.0), (x: 100.0, y: 400.0)]),
                ),
            ],
        )
    "#;

    let rooms: Vec<RoomDef> = parse_data_file("rooms.ron", ron).unwrap();
    assert_eq!(rooms.len(), 2);

    assert_eq!(
        rooms[0].shape,
        Some(TerrainShape::StaticLines(vec![Segment::new(
            Point::new(0.0, 450.0),
            Point::new(800.0, 450.0)
        )]))
    );
    assert_eq!(rooms[0].enemy_spawn, Some(Point::new(400.0, 300.0)));
    assert_eq!(rooms[0].background.kind, BackgroundKind::Image);

    assert_eq!(
        rooms[1].shape,
        Some(TerrainShape::Polyline(vec![
            Point::new(0.0, 450.0),
            Point::new(100.0, 400.0)
        ]))
    );
    assert_eq!(rooms[1].background.kind, BackgroundKind::Video);
    assert_eq!(rooms[1].background.effective_playback_rate(), 0.6);
    assert!(rooms[1].enemy_spawn.is_none());
}

#[test]
fn test_parse_room_without_shape() {
    let ron = r#"(schema_version: 1, items: [(id: "void", background: (source: "v.png"))])"#;
    let rooms: Vec<RoomDef> = parse_data_file("rooms.ron", ron).unwrap();
    assert!(rooms[0].shape.is_none());
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_data_file::<RoomDef>("rooms.ron", "(not valid").unwrap_err();
    assert_eq!(err.file, "rooms.ron");
    assert!(err.to_string().starts_with("Failed to load rooms.ron"));
}

#[test]
fn test_gameplay_config_partial_file_keeps_defaults() {
    let ron = r#"(
        schema_version: 1,
        enemy_calibration: Compact,
        contact_mode: Knockback,
        movement: (gravity: 0.6),
    )"#;

    let config: GameplayConfig = parse_single_file("gameplay.ron", ron).unwrap();
    assert_eq!(config.enemy_calibration, EnemyCalibration::Compact);
    assert_eq!(config.contact_mode, ContactMode::Knockback);
    assert_eq!(config.movement.gravity, 0.6);
    assert_eq!(config.movement.friction, 0.8);
    assert_eq!(config.canvas, CanvasDef::default());
    assert_eq!(config.spell.invoke_duration, 60);
}

#[test]
fn test_shipped_data_files_parse() {
    let rooms: Vec<RoomDef> =
        parse_data_file("rooms.ron", include_str!("../../assets/data/rooms.ron")).unwrap();
    assert_eq!(rooms, builtin_rooms());

    let config: GameplayConfig =
        parse_single_file("gameplay.ron", include_str!("../../assets/data/gameplay.ron")).unwrap();
    assert_eq!(config.movement.jump_impulse, -12.0);
}

// -----------------------------------------------------------------------------
// Background tests
// -----------------------------------------------------------------------------

#[test]
fn test_video_default_playback_rate() {
    let bg = BackgroundDef::video("cave.mp4", None);
    assert_eq!(bg.effective_playback_rate(), DEFAULT_VIDEO_PLAYBACK_RATE);
    assert!(bg.is_video());
}

#[test]
fn test_mp4_source_counts_as_video() {
    let bg = BackgroundDef::image("cave.mp4");
    assert!(bg.is_video());
    assert!(!BackgroundDef::image("cave.png").is_video());
}

// -----------------------------------------------------------------------------
// Segment geometry tests
// -----------------------------------------------------------------------------

#[test]
fn test_y_at_endpoints_is_exact() {
    let segment = Segment::new(Point::new(220.0, 450.0), Point::new(420.0, 400.0));
    assert_eq!(segment.y_at(220.0), Some(450.0));
    assert_eq!(segment.y_at(420.0), Some(400.0));
}

#[test]
fn test_y_at_interpolates_reversed_segment() {
    let segment = Segment::new(Point::new(100.0, 200.0), Point::new(0.0, 100.0));
    assert_eq!(segment.y_at(50.0), Some(150.0));
    assert!(segment.spans(0.0));
    assert!(segment.spans(100.0));
    assert!(!segment.spans(100.5));
}

#[test]
fn test_vertical_segment_has_no_height() {
    let segment = Segment::new(Point::new(10.0, 0.0), Point::new(10.0, 100.0));
    assert!(segment.is_vertical());
    assert_eq!(segment.y_at(10.0), None);
}

// -----------------------------------------------------------------------------
// Built-in room tests
// -----------------------------------------------------------------------------

#[test]
fn test_builtin_rooms_order_and_spawn() {
    let rooms = builtin_rooms();
    let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["room1", "room2", "room3", "room5"]);

    let spawns: Vec<_> = rooms.iter().filter_map(|r| r.enemy_spawn).collect();
    assert_eq!(spawns, vec![Point::new(400.0, 300.0)]);
    assert!(rooms[1].enemy_spawn.is_some());
}

#[test]
fn test_builtin_rooms_are_valid() {
    let issues = validate_rooms(&builtin_rooms(), &CanvasDef::default());
    assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_validation_flags_missing_and_degenerate_shapes() {
    let rooms = vec![
        room("none", None),
        room("single", Some(TerrainShape::Polyline(vec![Point::new(0.0, 0.0)]))),
        room("empty", Some(TerrainShape::StaticLines(Vec::new()))),
    ];

    let problems: Vec<_> = validate_rooms(&rooms, &CanvasDef::default())
        .into_iter()
        .map(|issue| (issue.room_id, issue.problem))
        .collect();

    assert_eq!(
        problems,
        vec![
            ("none".to_string(), RoomProblem::NoTerrain),
            (
                "single".to_string(),
                RoomProblem::DegeneratePolyline { points: 1 }
            ),
            ("empty".to_string(), RoomProblem::NoTerrain),
        ]
    );
}

#[test]
fn test_validation_flags_vertical_and_non_finite_segments() {
    let rooms = vec![room(
        "walls",
        Some(TerrainShape::StaticLines(vec![
            Segment::new(Point::new(0.0, 450.0), Point::new(800.0, 450.0)),
            Segment::new(Point::new(300.0, 300.0), Point::new(300.0, 450.0)),
            Segment::new(Point::new(f32::NAN, 0.0), Point::new(10.0, 0.0)),
        ])),
    )];

    let problems: Vec<_> = validate_rooms(&rooms, &CanvasDef::default())
        .into_iter()
        .map(|issue| issue.problem)
        .collect();

    assert_eq!(
        problems,
        vec![
            RoomProblem::VerticalSegment { index: 1 },
            RoomProblem::NonFiniteSegment { index: 2 },
        ]
    );
}

#[test]
fn test_validation_flags_spawn_outside_canvas() {
    let mut outside = room(
        "far",
        Some(TerrainShape::Polyline(vec![
            Point::new(0.0, 450.0),
            Point::new(800.0, 450.0),
        ])),
    );
    outside.enemy_spawn = Some(Point::new(900.0, 100.0));

    let issues = validate_rooms(&[outside], &CanvasDef::default());
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].problem,
        RoomProblem::SpawnOutsideCanvas { x: 900.0, y: 100.0 }
    );
    assert!(issues[0].to_string().contains("far"));
}

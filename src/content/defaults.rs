//! Built-in rooms used when assets/data/rooms.ron is missing or invalid.
//! Mirrors the shipped data file.

use super::data::{BackgroundDef, Point, RoomDef, Segment, TerrainShape};

fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Segment {
    Segment::new(Point::new(x1, y1), Point::new(x2, y2))
}

pub fn builtin_rooms() -> Vec<RoomDef> {
    vec![
        RoomDef {
            id: "room1".to_string(),
            background: BackgroundDef::image("backgrounds/cave_background_1.png"),
            // Entrance: flat floor with a low mound in the middle
            shape: Some(TerrainShape::Polyline(vec![
                Point::new(0.0, 450.0),
                Point::new(280.0, 450.0),
                Point::new(400.0, 415.0),
                Point::new(520.0, 450.0),
                Point::new(800.0, 450.0),
            ])),
            enemy_spawn: None,
        },
        RoomDef {
            id: "room2".to_string(),
            background: BackgroundDef::image("backgrounds/cave_background_2.png"),
            // Islands, no bridges
            shape: Some(TerrainShape::StaticLines(vec![
                line(150.0, 320.0, 265.0, 320.0),
                line(534.0, 320.0, 668.0, 320.0),
                line(330.0, 385.0, 480.0, 385.0),
                line(0.0, 450.0, 275.0, 450.0),
                line(533.0, 450.0, 790.0, 450.0),
            ])),
            enemy_spawn: Some(Point::new(400.0, 300.0)),
        },
        RoomDef {
            id: "room3".to_string(),
            background: BackgroundDef::video(
                "backgrounds/cave_background_3_animated.mp4",
                Some("backgrounds/cave_background_3.png"),
            ),
            // Hanging bridge dipping between two ledges
            shape: Some(TerrainShape::Polyline(vec![
                Point::new(0.0, 450.0),
                Point::new(150.0, 450.0),
                Point::new(250.0, 440.0),
                Point::new(370.0, 340.0),
                Point::new(440.0, 340.0),
                Point::new(550.0, 440.0),
                Point::new(650.0, 440.0),
                Point::new(800.0, 450.0),
            ])),
            enemy_spawn: None,
        },
        RoomDef {
            id: "room5".to_string(),
            background: BackgroundDef::video(
                "backgrounds/cave_background_5_animated.mp4",
                Some("backgrounds/cave_background_5.png"),
            )
            .with_playback_rate(0.6),
            // Descending shelves toward the exit wall
            shape: Some(TerrainShape::StaticLines(vec![
                line(0.0, 450.0, 220.0, 450.0),
                line(220.0, 450.0, 420.0, 400.0),
                line(420.0, 400.0, 620.0, 400.0),
                line(620.0, 400.0, 800.0, 430.0),
            ])),
            enemy_spawn: None,
        },
    ]
}

//! Validation for room definitions.
//!
//! Problems found here are never fatal: the offending geometry degrades to
//! "no ground" at runtime. Validation only makes the degradation visible.

use super::data::*;

/// A validation problem with context about which room it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub room_id: String,
    pub problem: RoomProblem,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoomProblem {
    /// Room has no terrain shape at all
    NoTerrain,
    /// Polyline with fewer than two points
    DegeneratePolyline { points: usize },
    /// Zero-width segment, dropped as non-walkable
    VerticalSegment { index: usize },
    /// Coordinates that are NaN or infinite
    NonFiniteSegment { index: usize },
    /// Enemy spawn point outside the canvas
    SpawnOutsideCanvas { x: f32, y: f32 },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.problem {
            RoomProblem::NoTerrain => {
                write!(f, "room '{}' has no terrain, actors will free-fall", self.room_id)
            }
            RoomProblem::DegeneratePolyline { points } => write!(
                f,
                "room '{}' polyline has {} point(s), needs at least 2",
                self.room_id, points
            ),
            RoomProblem::VerticalSegment { index } => write!(
                f,
                "room '{}' segment {} is vertical and will be ignored",
                self.room_id, index
            ),
            RoomProblem::NonFiniteSegment { index } => write!(
                f,
                "room '{}' segment {} has non-finite coordinates and will be ignored",
                self.room_id, index
            ),
            RoomProblem::SpawnOutsideCanvas { x, y } => write!(
                f,
                "room '{}' enemy spawn ({}, {}) lies outside the canvas",
                self.room_id, x, y
            ),
        }
    }
}

fn check_segment(issues: &mut Vec<ValidationIssue>, room_id: &str, index: usize, segment: &Segment) {
    let problem = if !segment.is_finite() {
        RoomProblem::NonFiniteSegment { index }
    } else if segment.is_vertical() {
        RoomProblem::VerticalSegment { index }
    } else {
        return;
    };
    issues.push(ValidationIssue {
        room_id: room_id.to_string(),
        problem,
    });
}

/// Validate every room against the canvas bounds.
/// Returns a list of issues, empty if all rooms are well formed.
pub fn validate_rooms(rooms: &[RoomDef], canvas: &CanvasDef) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for room in rooms {
        match &room.shape {
            None => issues.push(ValidationIssue {
                room_id: room.id.clone(),
                problem: RoomProblem::NoTerrain,
            }),
            Some(TerrainShape::StaticLines(lines)) => {
                if lines.is_empty() {
                    issues.push(ValidationIssue {
                        room_id: room.id.clone(),
                        problem: RoomProblem::NoTerrain,
                    });
                }
                for (index, segment) in lines.iter().enumerate() {
                    check_segment(&mut issues, &room.id, index, segment);
                }
            }
            Some(TerrainShape::Polyline(points)) => {
                if points.len() < 2 {
                    issues.push(ValidationIssue {
                        room_id: room.id.clone(),
                        problem: RoomProblem::DegeneratePolyline {
                            points: points.len(),
                        },
                    });
                }
                for (index, pair) in points.windows(2).enumerate() {
                    check_segment(&mut issues, &room.id, index, &Segment::new(pair[0], pair[1]));
                }
            }
        }

        if let Some(spawn) = room.enemy_spawn {
            let inside = spawn.x >= 0.0
                && spawn.x <= canvas.width
                && spawn.y >= 0.0
                && spawn.y <= canvas.height;
            if !inside {
                issues.push(ValidationIssue {
                    room_id: room.id.clone(),
                    problem: RoomProblem::SpawnOutsideCanvas {
                        x: spawn.x,
                        y: spawn.y,
                    },
                });
            }
        }
    }

    issues
}

//! Rooms domain: terrain segment extraction.

use crate::content::{Segment, TerrainShape};

/// Flatten a room's raw shape into the ordered segments actors stand on.
///
/// Explicit lines are kept as given; a polyline of N points yields N-1
/// consecutive segments. No shape, or fewer than two points, means no
/// ground. Vertical and non-finite segments are dropped: they have no
/// walkable height.
pub fn extract_segments(shape: Option<&TerrainShape>) -> Vec<Segment> {
    let segments: Vec<Segment> = match shape {
        Some(TerrainShape::StaticLines(lines)) => lines.clone(),
        Some(TerrainShape::Polyline(points)) => points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect(),
        None => Vec::new(),
    };

    segments
        .into_iter()
        .filter(|segment| segment.is_finite() && !segment.is_vertical())
        .collect()
}

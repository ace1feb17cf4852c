use std::f64::consts::FRAC_PI_2;

use crate::math::Point2;

/// A path segment displaced perpendicular to its original heading.
#[derive(Debug, Clone, Copy)]
pub struct OffsetSegment {
    /// Heading of the offset displacement, in radians.
    pub heading: f64,
    /// The original segment this was derived from. Its second point acts as
    /// the arc center when an outer join is interpolated.
    pub original: (Point2, Point2),
    /// The displaced segment.
    pub offset: (Point2, Point2),
}

/// Translates `p` by `distance` along `heading`.
#[must_use]
pub fn translate_polar(p: &Point2, distance: f64, heading: f64) -> Point2 {
    Point2::new(p.x + distance * heading.cos(), p.y + distance * heading.sin())
}

/// Offsets each consecutive pair of distinct input points perpendicular to
/// its heading by the signed `distance`.
///
/// Positive distance displaces to the left of the walking direction,
/// negative to the right. Pairs of coincident points emit nothing; fewer
/// than two points yields an empty list, never an error.
#[must_use]
pub fn build(points: &[Point2], distance: f64) -> Vec<OffsetSegment> {
    let mut segments = Vec::with_capacity(points.len().saturating_sub(1));
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a == b {
            continue;
        }
        // Reversed-order atan2 pins which side a positive offset lands on.
        let heading = (a.y - b.y).atan2(a.x - b.x) - FRAC_PI_2;
        segments.push(OffsetSegment {
            heading,
            original: (a, b),
            offset: (
                translate_polar(&a, distance, heading),
                translate_polar(&b, distance, heading),
            ),
        });
    }
    segments
}

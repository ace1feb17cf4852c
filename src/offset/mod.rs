mod join;
mod raw_offset;
mod self_intersect;

pub use join::JoinStyle;
pub use raw_offset::OffsetSegment;

use crate::error::{OffsetError, Result};
use crate::math::{Point2, TOLERANCE};

/// Offsets a 2D polyline by a signed perpendicular distance.
///
/// # Algorithm
///
/// 1. **Offset**: displace each segment perpendicular to its heading
/// 2. **Join**: classify every shared vertex and interpolate a circular arc
///    on outer turns; inner turns stay open
/// 3. **Cut**: walk the assembled chain and remove the overlaps and loops
///    the inner turns left behind
///
/// # Sign Convention
///
/// - Positive distance: left offset (relative to walking direction)
/// - Negative distance: right offset
#[derive(Debug)]
pub struct PolylineOffset2D {
    points: Vec<Point2>,
    distance: f64,
    join_style: JoinStyle,
}

impl PolylineOffset2D {
    /// Creates a new polyline offset operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, distance: f64) -> Self {
        Self {
            points,
            distance,
            join_style: JoinStyle::default(),
        }
    }

    /// Selects the join style used at outer turns.
    #[must_use]
    pub fn with_join_style(mut self, style: JoinStyle) -> Self {
        self.join_style = style;
        self
    }

    /// Executes the offset operation.
    ///
    /// Degenerate inputs are handled silently: consecutive duplicate points
    /// are skipped, and fewer than two distinct points produce an empty
    /// result rather than an error.
    ///
    /// # Errors
    ///
    /// `OffsetError::NonFiniteCoordinate` if any input coordinate is NaN or
    /// infinite.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        for (index, p) in self.points.iter().enumerate() {
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(OffsetError::NonFiniteCoordinate { index });
            }
        }

        if self.distance.abs() < TOLERANCE {
            return Ok(self.points.clone());
        }

        let segments = raw_offset::build(&self.points, self.distance);
        let chain = assemble(&segments, self.distance, self.join_style);
        let chain = self_intersect::cut(chain);
        Ok(self_intersect::chain_points(&chain))
    }
}

/// Offsets `points` perpendicular to the path by the signed `distance`,
/// with round joins at outer turns.
///
/// Convenience wrapper around [`PolylineOffset2D`].
///
/// # Errors
///
/// `OffsetError::NonFiniteCoordinate` if any input coordinate is NaN or
/// infinite.
pub fn offset_polyline(points: &[Point2], distance: f64) -> Result<Vec<Point2>> {
    PolylineOffset2D::new(points.to_vec(), distance).execute()
}

/// Builds the full segment chain: every offset segment, interleaved with the
/// join chain for each shared vertex.
///
/// Join points are linked by unit segments and closed onto the next offset
/// segment's start; exact duplicates collapse so arc samples that coincide
/// with offset endpoints never produce zero-length segments. Inner turns
/// contribute nothing and deliberately leave a gap for the cut pass.
#[allow(clippy::float_cmp)]
fn assemble(
    segments: &[OffsetSegment],
    distance: f64,
    style: JoinStyle,
) -> Vec<(Point2, Point2)> {
    let Some(first) = segments.first() else {
        return Vec::new();
    };

    let mut chain = Vec::with_capacity(segments.len() * 2);
    chain.push(first.offset);

    for pair in segments.windows(2) {
        let (s1, s2) = (&pair[0], &pair[1]);
        let joint = join::connecting_points(s1, s2, distance, style);

        if !joint.is_empty() {
            let mut cursor = s1.offset.1;
            for p in joint {
                if p != cursor {
                    chain.push((cursor, p));
                    cursor = p;
                }
            }
            if cursor != s2.offset.0 {
                chain.push((cursor, s2.offset.0));
            }
        }

        chain.push(s2.offset);
    }

    chain
}

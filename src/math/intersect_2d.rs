use super::line_2d::{line_equation, LineEquation};
use super::Point2;

/// Intersection of the two infinite lines through `(l1a, l1b)` and `(l2a, l2b)`.
///
/// Returns `None` when either point pair is degenerate, both lines are
/// vertical, or the slopes are equal (parallel or coincident) — there is no
/// unique intersection in any of those cases.
#[must_use]
#[allow(clippy::float_cmp)] // parallel slopes are compared exactly
pub fn line_intersection(
    l1a: &Point2,
    l1b: &Point2,
    l2a: &Point2,
    l2b: &Point2,
) -> Option<Point2> {
    match (line_equation(l1a, l1b), line_equation(l2a, l2b)) {
        (LineEquation::Degenerate, _)
        | (_, LineEquation::Degenerate)
        | (LineEquation::Vertical { .. }, LineEquation::Vertical { .. }) => None,
        (LineEquation::Vertical { x }, LineEquation::Sloped { slope, intercept })
        | (LineEquation::Sloped { slope, intercept }, LineEquation::Vertical { x }) => {
            Some(Point2::new(x, slope * x + intercept))
        }
        (
            LineEquation::Sloped {
                slope: a1,
                intercept: b1,
            },
            LineEquation::Sloped {
                slope: a2,
                intercept: b2,
            },
        ) => {
            if a1 == a2 {
                return None;
            }
            let x = (b2 - b1) / (a1 - a2);
            Some(Point2::new(x, a1 * x + b1))
        }
    }
}

/// Twice the signed area of the triangle `p1 p2 p3`.
///
/// Positive when `p3` lies to the left of the directed line `p1 → p2`.
#[must_use]
pub fn signed_area_2(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x)
}

/// Proper crossing test for two finite segments.
///
/// True only when each segment's endpoints lie strictly on opposite sides of
/// the other segment's supporting line. Endpoint touches and collinear
/// overlaps do not count as crossings.
#[must_use]
pub fn segments_cross(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    signed_area_2(a0, a1, b0) * signed_area_2(a0, a1, b1) < 0.0
        && signed_area_2(b0, b1, a0) * signed_area_2(b0, b1, a1) < 0.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn crossing_diagonals() {
        let p = line_intersection(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 2.0),
            &Point2::new(0.0, 2.0),
            &Point2::new(2.0, 0.0),
        )
        .unwrap();
        assert!((p.x - 1.0).abs() < TOL, "x={}", p.x);
        assert!((p.y - 1.0).abs() < TOL, "y={}", p.y);
    }

    #[test]
    fn parallel_lines_return_none() {
        assert!(line_intersection(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 5.0),
            &Point2::new(0.0, 1.0),
            &Point2::new(10.0, 6.0),
        )
        .is_none());
    }

    #[test]
    fn two_vertical_lines_return_none() {
        assert!(line_intersection(
            &Point2::new(1.0, 0.0),
            &Point2::new(1.0, 5.0),
            &Point2::new(4.0, 0.0),
            &Point2::new(4.0, 5.0),
        )
        .is_none());
        // Coincident verticals have no unique intersection either.
        assert!(line_intersection(
            &Point2::new(1.0, 0.0),
            &Point2::new(1.0, 5.0),
            &Point2::new(1.0, -3.0),
            &Point2::new(1.0, 9.0),
        )
        .is_none());
    }

    #[test]
    fn vertical_and_sloped() {
        // x = 4 against y = x/2.
        let p = line_intersection(
            &Point2::new(4.0, -1.0),
            &Point2::new(4.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 1.0),
        )
        .unwrap();
        assert!((p.x - 4.0).abs() < TOL, "x={}", p.x);
        assert!((p.y - 2.0).abs() < TOL, "y={}", p.y);
    }

    #[test]
    fn degenerate_pair_returns_none() {
        let p = Point2::new(1.0, 1.0);
        assert!(line_intersection(&p, &p, &Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0)).is_none());
    }

    #[test]
    fn signed_area_orientation() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        assert!(signed_area_2(&a, &b, &Point2::new(0.0, 1.0)) > 0.0, "left");
        assert!(signed_area_2(&a, &b, &Point2::new(0.0, -1.0)) < 0.0, "right");
        assert!(signed_area_2(&a, &b, &Point2::new(2.0, 0.0)).abs() < TOL, "collinear");
    }

    #[test]
    fn segments_cross_proper_crossing() {
        assert!(segments_cross(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 2.0),
            &Point2::new(0.0, 2.0),
            &Point2::new(2.0, 0.0),
        ));
    }

    #[test]
    fn segments_cross_rejects_endpoint_touch() {
        // Shared endpoint at (1, 1): not a proper crossing.
        assert!(!segments_cross(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 1.0),
            &Point2::new(1.0, 1.0),
            &Point2::new(2.0, 0.0),
        ));
    }

    #[test]
    fn segments_cross_rejects_line_crossing_outside_segments() {
        // Supporting lines cross at (1, 1) but the second segment stops short.
        assert!(!segments_cross(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 2.0),
            &Point2::new(0.0, 2.0),
            &Point2::new(0.5, 1.5),
        ));
    }

    #[test]
    fn segments_cross_rejects_collinear_overlap() {
        assert!(!segments_cross(
            &Point2::new(0.0, 0.0),
            &Point2::new(4.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Point2::new(6.0, 0.0),
        ));
    }
}

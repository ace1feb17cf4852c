use super::Point2;

/// Slope-intercept representation of the infinite line through two points.
///
/// Vertical lines cannot be written as `y = slope·x + intercept`, so they
/// get a distinct arm instead of a division by a zero run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEquation {
    /// `y = slope * x + intercept`.
    Sloped { slope: f64, intercept: f64 },
    /// Vertical line at `x`.
    Vertical { x: f64 },
    /// Both points coincide; no unique line exists.
    Degenerate,
}

/// Computes the equation of the infinite line through `p1` and `p2`.
///
/// Callers must treat [`LineEquation::Degenerate`] as "skip this segment",
/// never as a line.
#[must_use]
#[allow(clippy::float_cmp)] // coincidence and verticality checks are exact
pub fn line_equation(p1: &Point2, p2: &Point2) -> LineEquation {
    if p1 == p2 {
        return LineEquation::Degenerate;
    }
    if p1.x == p2.x {
        return LineEquation::Vertical { x: p1.x };
    }
    let slope = (p2.y - p1.y) / (p2.x - p1.x);
    LineEquation::Sloped {
        slope,
        intercept: p1.y - slope * p1.x,
    }
}

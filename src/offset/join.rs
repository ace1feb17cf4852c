use std::f64::consts::{FRAC_PI_8, TAU};

use crate::math::{Point2, TOLERANCE};

use super::raw_offset::{translate_polar, OffsetSegment};

/// Angular step between sampled arc points (22.5°).
const ARC_STEP: f64 = FRAC_PI_8;

/// How two adjacent offset segments are connected at their shared vertex.
///
/// Only round joins exist today; the enum is the seam where miter and bevel
/// variants would slot in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum JoinStyle {
    /// Circular arc centered on the original shared vertex.
    #[default]
    Round,
}

/// Returns the points connecting `s1.offset` to `s2.offset` at their shared
/// original vertex, ordered from `s1`'s offset end toward `s2`'s offset
/// start.
///
/// Empty output means no join geometry is needed: either the segments run
/// straight through the vertex (the offset endpoints already coincide up to
/// rounding), or the turn is an inner one whose overlap the cut pass
/// resolves downstream.
#[must_use]
pub fn connecting_points(
    s1: &OffsetSegment,
    s2: &OffsetSegment,
    distance: f64,
    style: JoinStyle,
) -> Vec<Point2> {
    match style {
        JoinStyle::Round => round_join(s1, s2, distance),
    }
}

fn round_join(s1: &OffsetSegment, s2: &OffsetSegment, distance: f64) -> Vec<Point2> {
    let d1 = s1.offset.1 - s1.offset.0;
    let d2 = s2.offset.1 - s2.offset.0;
    let turn = (d1.x * d2.y - d1.y * d2.x).atan2(d1.dot(&d2));

    // Collinear segments can compute headings a few ulps apart, so a
    // sub-tolerance turn is a straight run, not a corner. Without this a
    // ulp-outer misclassification wraps the arc walk a full revolution.
    if turn.abs() < TOLERANCE {
        return Vec::new();
    }

    // Inner turn: the offset segments overlap; trimming happens downstream.
    if turn * distance > 0.0 {
        return Vec::new();
    }

    // Outer turn: arc of radius |distance| around the original shared
    // vertex. The walk always proceeds counter-clockwise; for right-side
    // offsets it runs from s2's heading to s1's and is reversed so the
    // output still runs s1 → s2.
    let center = s1.original.1;
    let (start, raw_end) = if distance > 0.0 {
        (s2.heading, s1.heading)
    } else {
        (s1.heading, s2.heading)
    };
    let end = if raw_end < start {
        raw_end + TAU
    } else {
        raw_end
    };

    let mut points = Vec::new();
    let mut alpha = start;
    while alpha < end {
        points.push(translate_polar(&center, distance, alpha));
        alpha += ARC_STEP;
    }
    if distance > 0.0 {
        points.reverse();
    }
    points
}

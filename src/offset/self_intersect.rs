use crate::math::intersect_2d::{line_intersection, segments_cross};
use crate::math::{Point2, TOLERANCE};

/// Removes the overlaps and loops that inner-turn joins leave in a segment
/// chain.
///
/// Sequential scan with one-sided backtracking: whenever two consecutive
/// segments do not share an endpoint (within `TOLERANCE`; sub-tolerance gaps
/// from rounding are snapped closed), the first earlier segment properly
/// crossing the later one is clipped to the crossing point, everything
/// strictly between them is discarded, and the scan resumes at the clipped
/// segment. When no crossing exists all the way back to the start, the later
/// segment is an unreachable sliver and is dropped.
///
/// Never introduces new geometry: endpoints are only moved onto intersection
/// points or snapped onto their neighbor, and segments are only removed.
/// Terminates because every step either advances the cursor or shrinks the
/// list.
#[must_use]
pub fn cut(mut segments: Vec<(Point2, Point2)>) -> Vec<(Point2, Point2)> {
    let mut i = 0;
    while i + 1 < segments.len() {
        if (segments[i + 1].0 - segments[i].1).norm() < TOLERANCE {
            segments[i + 1].0 = segments[i].1;
            i += 1;
            continue;
        }

        let mut clip = None;
        for j in (0..=i).rev() {
            let (a, b) = (&segments[j], &segments[i + 1]);
            if segments_cross(&a.0, &a.1, &b.0, &b.1) {
                if let Some(p) = line_intersection(&a.0, &a.1, &b.0, &b.1) {
                    clip = Some((j, p));
                    break;
                }
            }
        }

        match clip {
            Some((j, p)) => {
                segments[j].1 = p;
                segments[i + 1].0 = p;
                // Segments strictly between j and i+1 sit inside the
                // cut-away loop.
                segments.drain(j + 1..i + 1);
                i = j;
            }
            None => {
                // Drop the sliver and retry at the same cursor.
                segments.remove(i + 1);
            }
        }
    }
    segments
}

/// Flattens a segment chain into its ordered point sequence: the first
/// segment's start followed by every segment's end.
#[must_use]
pub fn chain_points(segments: &[(Point2, Point2)]) -> Vec<Point2> {
    let mut points = Vec::with_capacity(segments.len() + 1);
    if let Some(first) = segments.first() {
        points.push(first.0);
    }
    points.extend(segments.iter().map(|s| s.1));
    points
}

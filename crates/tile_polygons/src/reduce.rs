//! Collinear edge reduction for closed boundaries.
//!
//! A boundary is a cyclic point sequence with an implicit closing segment.
//! Consecutive collinear segments are merged into one edge in a single fold
//! over the segments; the run that straddles the arbitrary start point is
//! then merged once at the end.

use bevy::math::Vec2;

use crate::edge::{Edge, is_collinear_within};

/// Reduces a closed boundary to its minimal edge sequence using the exact
/// cross product collinearity test.
///
/// The result has no two cyclically adjacent collinear edges and no
/// zero-length edges: a run that doubles back onto its own start is
/// dropped, so a boundary lying on a single line reduces to nothing.
/// Boundaries that collapse to one or two edges are returned as-is; callers
/// decide whether to keep them.
pub fn reduce_boundary(points: &[Vec2]) -> Vec<Edge> {
  reduce_boundary_with_tolerance(points, 0.0)
}

/// Like [`reduce_boundary`], but directions whose angle has a sine within
/// `tolerance` count as collinear.
pub fn reduce_boundary_with_tolerance(points: &[Vec2], tolerance: f32) -> Vec<Edge> {
  let collinear = |a: &Edge, b: &Edge| is_collinear_within(a.direction(), b.direction(), tolerance);

  let mut segments = boundary_segments(points);
  let Some(first) = segments.next() else {
    return Vec::new();
  };

  let (mut edges, current) = segments.fold(
    (Vec::with_capacity(points.len()), first),
    |(mut edges, current), segment| {
      if collinear(&current, &segment) {
        (edges, current.extended_to(segment.end))
      } else {
        edges.push(current);
        (edges, segment)
      }
    },
  );
  edges.push(current);
  edges.retain(|e| e.start != e.end);

  // The scan start may split one straight run into the first and last edge.
  if edges.len() >= 2 {
    let head = edges[0];
    let tail = edges[edges.len() - 1];
    if collinear(&tail, &head) {
      edges[0] = Edge::new(tail.start, head.end);
      edges.pop();
    }
  }

  edges
}

/// Segments between consecutive points, including the closing segment.
/// Zero-length segments from repeated points are skipped.
fn boundary_segments(points: &[Vec2]) -> impl Iterator<Item = Edge> + '_ {
  points
    .iter()
    .zip(points.iter().cycle().skip(1))
    .map(|(&a, &b)| Edge::new(a, b))
    .filter(|e| e.start != e.end)
}

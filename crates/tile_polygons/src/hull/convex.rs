//! Andrew's monotone chain convex hull.

use bevy::math::Vec2;

use super::orient;

/// Returns the convex hull of `points` wound clockwise (Y+ down), with
/// duplicate and collinear boundary points removed.
///
/// Fewer than 3 distinct points are returned sorted and deduplicated.
pub fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
  let mut sorted = points.to_vec();
  sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
  sorted.dedup();

  if sorted.len() < 3 {
    return sorted;
  }

  let mut hull: Vec<Vec2> = Vec::with_capacity(sorted.len() + 1);

  // Lower chain
  for &p in &sorted {
    while hull.len() >= 2 && orient(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
      hull.pop();
    }
    hull.push(p);
  }

  // Upper chain
  let lower_len = hull.len() + 1;
  for &p in sorted.iter().rev().skip(1) {
    while hull.len() >= lower_len && orient(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
    {
      hull.pop();
    }
    hull.push(p);
  }

  // Last point repeats the first.
  hull.pop();
  hull
}

//! Edge-digging concave hull.
//!
//! Starts from the convex hull and repeatedly replaces any edge longer than
//! the concavity with two edges through the nearest unused point that sits
//! over the edge on its interior side. Every dig consumes one point, so the
//! loop runs at most once per input point.

use bevy::math::Vec2;

use super::{convex_hull, orient, point_in_polygon};

/// Returns a concave hull of `points`, wound clockwise (Y+ down).
///
/// `concavity` is the longest edge left undug, in the units of `points`.
/// An infinite concavity yields the convex hull.
pub fn concave_hull(points: &[Vec2], concavity: f32) -> Vec<Vec2> {
  let mut hull = convex_hull(points);
  if hull.len() < 3 || concavity.is_infinite() {
    return hull;
  }

  let mut inner: Vec<Vec2> = points.to_vec();
  inner.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
  inner.dedup();
  inner.retain(|p| !hull.contains(p));

  let max_len_sq = concavity.max(0.0).powi(2);
  let mut i = 0;
  while i < hull.len() {
    let a = hull[i];
    let b = hull[(i + 1) % hull.len()];

    if (b - a).length_squared() > max_len_sq
      && let Some(k) = dig_candidate(&hull, i, &inner)
    {
      let p = inner.swap_remove(k);
      hull.insert(i + 1, p);
      // Re-examine the new edge a -> p before moving on.
      continue;
    }
    i += 1;
  }

  hull
}

/// Picks the point to dig edge `i` toward, as an index into `inner`.
///
/// Candidates project strictly inside the edge and lie on it or inside the
/// current boundary, and the two replacement edges must not touch the rest
/// of the boundary. Ties on distance are broken by position along the edge.
fn dig_candidate(hull: &[Vec2], i: usize, inner: &[Vec2]) -> Option<usize> {
  let a = hull[i];
  let b = hull[(i + 1) % hull.len()];
  let ab = b - a;
  let len_sq = ab.length_squared();

  let mut candidates: Vec<(f32, f32, usize)> = inner
    .iter()
    .enumerate()
    .filter_map(|(k, &p)| {
      let t = (p - a).dot(ab) / len_sq;
      let side = orient(a, b, p);
      (t > 0.0 && t < 1.0 && side >= 0.0).then(|| (side * side / len_sq, t, k))
    })
    .collect();
  candidates.sort_by(|x, y| x.0.total_cmp(&y.0).then(x.1.total_cmp(&y.1)));

  candidates.into_iter().find_map(|(dist_sq, _, k)| {
    let p = inner[k];
    // Points cut off by earlier digs sit outside the boundary.
    let usable = (dist_sq == 0.0 || point_in_polygon(p, hull)) && !crosses_boundary(hull, i, p);
    usable.then_some(k)
  })
}

/// Returns true if `a -> p` or `p -> b` touches any boundary edge other than
/// at the shared endpoints `a` and `b`.
fn crosses_boundary(hull: &[Vec2], i: usize, p: Vec2) -> bool {
  let n = hull.len();
  let a = hull[i];
  let b = hull[(i + 1) % n];

  (0..n).filter(|&j| j != i).any(|j| {
    let c = hull[j];
    let d = hull[(j + 1) % n];
    segment_hits(a, p, c, d) || segment_hits(p, b, c, d)
  })
}

/// Whether segment `s -> e` meets segment `c -> d` anywhere other than a
/// single shared endpoint.
fn segment_hits(s: Vec2, e: Vec2, c: Vec2, d: Vec2) -> bool {
  let shared = [s, e]
    .into_iter()
    .find(|&q| q == c || q == d);

  if let Some(q) = shared {
    // Only a collinear overlap counts beyond the shared vertex.
    let own_other = if q == s { e } else { s };
    let edge_other = if q == c { d } else { c };
    return on_segment(own_other, c, d) || on_segment(edge_other, s, e);
  }

  let o1 = orient(s, e, c);
  let o2 = orient(s, e, d);
  let o3 = orient(c, d, s);
  let o4 = orient(c, d, e);

  if o1 * o2 < 0.0 && o3 * o4 < 0.0 {
    return true;
  }

  (o1 == 0.0 && on_segment(c, s, e))
    || (o2 == 0.0 && on_segment(d, s, e))
    || (o3 == 0.0 && on_segment(s, c, d))
    || (o4 == 0.0 && on_segment(e, c, d))
}

/// Whether `p` lies on the closed segment `a -> b`.
fn on_segment(p: Vec2, a: Vec2, b: Vec2) -> bool {
  orient(a, b, p) == 0.0
    && p.x >= a.x.min(b.x)
    && p.x <= a.x.max(b.x)
    && p.y >= a.y.min(b.y)
    && p.y <= a.y.max(b.y)
}

//! Boundary providers that turn a point cloud into an ordered polygon.
//!
//! The polygonizer treats hull construction as a pluggable step. Any
//! provider must return a simple polygon wound clockwise in Y+ down space
//! (positive shoelace area); the edge normals computed later rely on that
//! winding and do not verify it.

mod concave;
mod convex;

use bevy::math::Vec2;
pub use concave::concave_hull;
pub use convex::convex_hull;

/// Computes an ordered, closed boundary around a set of points.
pub trait HullProvider {
  /// Returns the boundary as a cyclic point sequence with an implicit
  /// closing segment. Inputs with fewer than 3 distinct points may be
  /// returned unchanged.
  fn hull(&self, points: &[Vec2], concavity: f32) -> Vec<Vec2>;
}

impl<F> HullProvider for F
where
  F: Fn(&[Vec2], f32) -> Vec<Vec2>,
{
  fn hull(&self, points: &[Vec2], concavity: f32) -> Vec<Vec2> {
    self(points, concavity)
  }
}

/// Convex hull provider. Ignores concavity.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConvexHull;

impl HullProvider for ConvexHull {
  fn hull(&self, points: &[Vec2], _concavity: f32) -> Vec<Vec2> {
    convex_hull(points)
  }
}

/// Concave hull provider that digs convex hull edges longer than the
/// concavity toward nearby interior points.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConcaveHull;

impl HullProvider for ConcaveHull {
  fn hull(&self, points: &[Vec2], concavity: f32) -> Vec<Vec2> {
    concave_hull(points, concavity)
  }
}

/// Signed area by the shoelace formula. Positive for clockwise boundaries
/// in Y+ down space.
pub fn signed_area(points: &[Vec2]) -> f32 {
  let doubled: f32 = points
    .iter()
    .zip(points.iter().cycle().skip(1))
    .map(|(a, b)| a.perp_dot(*b))
    .sum();
  doubled * 0.5
}

/// Even-odd point containment test by horizontal ray casting.
///
/// Points exactly on the boundary may land on either side.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
  let mut inside = false;
  let Some(&last) = polygon.last() else {
    return false;
  };

  let mut vj = last;
  for &vi in polygon {
    // Does the ray from point going right cross this edge?
    if ((vi.y > point.y) != (vj.y > point.y))
      && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
    {
      inside = !inside;
    }
    vj = vi;
  }

  inside
}

/// Orientation of `p` relative to the directed line `a -> b`.
/// Positive when `p` is on the interior side of a clockwise boundary.
#[inline]
pub(crate) fn orient(a: Vec2, b: Vec2, p: Vec2) -> f32 {
  (b - a).perp_dot(p - a)
}

//! Straight polygon edges and collinearity tests.

use bevy::math::Vec2;

/// A straight edge from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
  pub start: Vec2,
  pub end: Vec2,
}

impl Edge {
  pub const fn new(start: Vec2, end: Vec2) -> Self {
    Self { start, end }
  }

  /// Vector from start to end.
  #[inline]
  pub fn direction(&self) -> Vec2 {
    self.end - self.start
  }

  #[inline]
  pub fn length(&self) -> f32 {
    self.direction().length()
  }

  /// Same start, new end point.
  #[inline]
  pub fn extended_to(self, end: Vec2) -> Self {
    Self {
      start: self.start,
      end,
    }
  }

  /// Uniformly maps both endpoints.
  pub fn map(self, f: impl Fn(Vec2) -> Vec2) -> Self {
    Self {
      start: f(self.start),
      end: f(self.end),
    }
  }
}

/// Exact collinearity: the 2D cross product of the directions is zero.
#[inline]
pub fn is_collinear(a: Vec2, b: Vec2) -> bool {
  a.perp_dot(b) == 0.0
}

/// Collinearity with a relative tolerance on the sine of the angle between
/// `a` and `b`. A tolerance of zero is the exact test.
#[inline]
pub fn is_collinear_within(a: Vec2, b: Vec2, tolerance: f32) -> bool {
  if tolerance <= 0.0 {
    return is_collinear(a, b);
  }
  a.perp_dot(b).abs() <= tolerance * a.length() * b.length()
}

//! Output polygons with per-edge owner ids and outward normals.

use bevy::math::Vec2;

use crate::edge::Edge;
use crate::hull::signed_area;

/// Identifies a polygon within one polygonizer run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonId(pub u32);

/// An edge tagged with its owning polygon and its outward unit normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrappedEdge {
  pub edge: Edge,
  pub polygon: PolygonId,
  pub normal: Vec2,
}

/// Outward normal of an edge on a clockwise (Y+ down) polygon.
///
/// The direction rotated a quarter turn toward the exterior, normalized.
/// Zero-length edges get a zero normal.
#[inline]
pub fn outward_normal(edge: &Edge) -> Vec2 {
  let d = edge.direction();
  Vec2::new(d.y, -d.x).normalize_or_zero()
}

/// Attaches `polygon` and a cached outward normal to each edge, preserving
/// order.
pub fn wrap(edges: &[Edge], polygon: PolygonId) -> Vec<WrappedEdge> {
  edges
    .iter()
    .map(|edge| WrappedEdge {
      edge: *edge,
      polygon,
      normal: outward_normal(edge),
    })
    .collect()
}

/// A closed polygon as a cyclic sequence of edges, each ending where the
/// next begins.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
  pub id: PolygonId,
  pub edges: Vec<WrappedEdge>,
}

impl Polygon {
  pub fn new(id: PolygonId, edges: &[Edge]) -> Self {
    Self {
      id,
      edges: wrap(edges, id),
    }
  }

  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  /// Start point of every edge, in order.
  pub fn vertices(&self) -> Vec<Vec2> {
    self.edges.iter().map(|e| e.edge.start).collect()
  }

  pub fn signed_area(&self) -> f32 {
    signed_area(&self.vertices())
  }

  /// True if wound clockwise in Y+ down space, the winding the normals
  /// assume.
  pub fn is_clockwise(&self) -> bool {
    self.signed_area() > 0.0
  }

  /// Axis-aligned bounds as (min, max), or `None` for an empty polygon.
  pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
    let first = self.edges.first()?.edge.start;
    Some(self.edges.iter().fold((first, first), |(min, max), e| {
      (min.min(e.edge.start), max.max(e.edge.start))
    }))
  }
}

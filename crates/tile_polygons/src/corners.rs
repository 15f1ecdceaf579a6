//! Corner point extraction for clusters.

use std::collections::HashSet;

use bevy::math::Vec2;

use crate::cluster::Cluster;
use crate::coords::CellPos;

/// Returns the distinct corner points of `cluster` that can lie on its
/// outline.
///
/// A corner whose four surrounding cells all belong to the cluster is
/// strictly interior and is left out, so a solid N x N block yields its 4N
/// perimeter points instead of (N + 1)^2 lattice points.
///
/// Points are in tile units, sorted by y then x so hull input is
/// deterministic regardless of cluster discovery order.
pub fn cluster_corners(cluster: &Cluster) -> Vec<Vec2> {
  let cells: HashSet<CellPos> = cluster.cells().iter().copied().collect();
  let mut seen: HashSet<CellPos> = HashSet::with_capacity(cluster.len() * 2 + 2);
  let mut corners = Vec::new();

  for cell in cluster.cells() {
    for corner in cell.corners() {
      if seen.insert(corner) && !is_interior(corner, &cells) {
        corners.push(corner);
      }
    }
  }

  corners.sort_unstable_by_key(|c| (c.y, c.x));
  corners.into_iter().map(CellPos::to_vec2).collect()
}

fn is_interior(corner: CellPos, cells: &HashSet<CellPos>) -> bool {
  corner
    .cells_around_corner()
    .is_some_and(|around| around.iter().all(|c| cells.contains(c)))
}

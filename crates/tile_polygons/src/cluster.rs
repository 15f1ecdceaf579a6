//! Connected component labeling over tile grids.
//!
//! Cells are grouped using 4-connectivity (no diagonals). The grid is scanned
//! row-major and each unassigned matching cell seeds a new cluster that is
//! grown with an explicit work stack, so region size never touches the call
//! stack. An assignment index keyed by cell gives O(1) membership checks.

use log::trace;

use crate::coords::CellPos;
use crate::tile::TileGrid;

/// A set of matching cells that are mutually reachable through 4-adjacent
/// matching cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cluster {
  cells: Vec<CellPos>,
}

impl Cluster {
  /// Cells in discovery order. The first cell is the scan-order seed.
  pub fn cells(&self) -> &[CellPos] {
    &self.cells
  }

  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// Inclusive bounding box as (min, max) cell, or `None` if empty.
  pub fn bounds(&self) -> Option<(CellPos, CellPos)> {
    let first = *self.cells.first()?;
    let (mut min, mut max) = (first, first);
    for c in &self.cells[1..] {
      min.x = min.x.min(c.x);
      min.y = min.y.min(c.y);
      max.x = max.x.max(c.x);
      max.y = max.y.max(c.y);
    }
    Some((min, max))
  }
}

/// Clusters together with the per-cell assignment index.
#[derive(Clone, Debug, Default)]
pub struct ClusterLabels {
  width: u32,
  height: u32,
  labels: Vec<Option<u32>>,
  clusters: Vec<Cluster>,
}

impl ClusterLabels {
  /// Cluster id of the cell at `pos`, or `None` if it does not match or is
  /// out of range.
  pub fn label_at(&self, pos: CellPos) -> Option<u32> {
    if pos.x >= self.width || pos.y >= self.height {
      return None;
    }
    self.labels[(pos.y as usize) * (self.width as usize) + (pos.x as usize)]
  }

  /// Clusters in discovery order; index == label.
  pub fn clusters(&self) -> &[Cluster] {
    &self.clusters
  }

  pub fn into_clusters(self) -> Vec<Cluster> {
    self.clusters
  }
}

/// Labels every matching cell with the id of its cluster.
///
/// `predicate` is evaluated exactly once per non-empty cell.
pub fn label_clusters<G, F>(grid: &G, predicate: F) -> ClusterLabels
where
  G: TileGrid + ?Sized,
  F: Fn(&G::Tile) -> bool,
{
  let width = grid.width();
  let height = grid.height();
  let w = width as usize;
  let size = w * height as usize;

  let mut matches = Vec::with_capacity(size);
  for y in 0..height {
    for x in 0..width {
      matches.push(grid.get(x, y).is_some_and(&predicate));
    }
  }

  let mut labels: Vec<Option<u32>> = vec![None; size];
  let mut clusters = Vec::new();
  let mut stack = Vec::new();

  for seed in 0..size {
    if !matches[seed] || labels[seed].is_some() {
      continue;
    }

    let id = clusters.len() as u32;
    let mut cells = Vec::new();
    labels[seed] = Some(id);
    stack.push(seed);

    while let Some(idx) = stack.pop() {
      let pos = CellPos::new((idx % w) as u32, (idx / w) as u32);
      cells.push(pos);

      for n in pos.neighbors(width, height) {
        let ni = (n.y as usize) * w + (n.x as usize);
        // Labeling on push keeps a cell from entering the stack twice.
        if matches[ni] && labels[ni].is_none() {
          labels[ni] = Some(id);
          stack.push(ni);
        }
      }
    }

    trace!("cluster {} seeded at {:?}: {} cells", id, cells[0], cells.len());
    clusters.push(Cluster { cells });
  }

  ClusterLabels {
    width,
    height,
    labels,
    clusters,
  }
}

/// Finds the 4-connected clusters of cells whose tile satisfies `predicate`.
///
/// Clusters are returned in discovery order (row-major position of their
/// first cell). Empty grids or grids with no match yield no clusters.
pub fn find_clusters<G, F>(grid: &G, predicate: F) -> Vec<Cluster>
where
  G: TileGrid + ?Sized,
  F: Fn(&G::Tile) -> bool,
{
  label_clusters(grid, predicate).into_clusters()
}

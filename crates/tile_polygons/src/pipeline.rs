//! Grid to polygon pipeline.
//!
//! For each layer: match tiles, label 4-connected clusters, take each
//! cluster's corner points, build a boundary with the hull provider, reduce
//! it to minimal edges, scale to world units and wrap the edges with their
//! polygon id and outward normals.
//!
//! A run owns all of its intermediate state, so independent layers can be
//! processed in parallel with [`Polygonizer::polygonize_layers`].

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::cluster::{Cluster, find_clusters};
use crate::config::{ConfigError, DegeneratePolicy, PolygonizeConfig};
use crate::corners::cluster_corners;
use crate::edge::Edge;
use crate::hull::{ConcaveHull, HullProvider};
use crate::polygon::{Polygon, PolygonId};
use crate::reduce::reduce_boundary_with_tolerance;
use crate::tile::TileGrid;

/// Converts tile layers into minimal polygons.
#[derive(Clone, Debug, Default)]
pub struct Polygonizer<H = ConcaveHull> {
  config: PolygonizeConfig,
  hull: H,
}

impl Polygonizer<ConcaveHull> {
  /// Creates a polygonizer using the built-in concave hull.
  ///
  /// The config is validated first: a negative tile size would mirror the
  /// output and flip every normal inward.
  pub fn new(config: PolygonizeConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self {
      config,
      hull: ConcaveHull,
    })
  }
}

impl<H: HullProvider> Polygonizer<H> {
  /// Replaces the hull provider.
  pub fn with_hull<P: HullProvider>(self, hull: P) -> Polygonizer<P> {
    Polygonizer {
      config: self.config,
      hull,
    }
  }

  pub fn config(&self) -> &PolygonizeConfig {
    &self.config
  }

  /// Produces one polygon per cluster of matching cells, in cluster
  /// discovery order.
  ///
  /// Polygon ids count emitted polygons, so they stay consecutive when a
  /// degenerate cluster is dropped.
  pub fn polygonize<G: TileGrid + ?Sized>(&self, grid: &G) -> Vec<Polygon> {
    let matching = &self.config.matching;
    if matching.is_empty() {
      debug!("polygonize: no matching mode configured, nothing to do");
      return Vec::new();
    }

    let clusters = find_clusters(grid, |tile| matching.matches(tile));
    let scale = self.config.tile_size();

    let mut polygons = Vec::with_capacity(clusters.len());
    for (index, cluster) in clusters.iter().enumerate() {
      let Some(edges) = self.cluster_edges(index, cluster) else {
        continue;
      };
      let scaled: Vec<Edge> = edges.into_iter().map(|e| e.map(|p| p * scale)).collect();
      let id = PolygonId(polygons.len() as u32);
      polygons.push(Polygon::new(id, &scaled));
    }

    debug!(
      "polygonize: {}x{} grid, {} clusters, {} polygons",
      grid.width(),
      grid.height(),
      clusters.len(),
      polygons.len()
    );

    polygons
  }

  /// Polygonizes independent layers in parallel. Output order matches
  /// `grids`.
  pub fn polygonize_layers<G>(&self, grids: &[G]) -> Vec<Vec<Polygon>>
  where
    G: TileGrid + Sync,
    H: Sync,
  {
    grids.par_iter().map(|grid| self.polygonize(grid)).collect()
  }

  /// Minimal edges for one cluster in tile units, or `None` if it is
  /// skipped.
  fn cluster_edges(&self, index: usize, cluster: &Cluster) -> Option<Vec<Edge>> {
    let corners = cluster_corners(cluster);
    if corners.len() < 3 {
      trace!(
        "cluster {}: only {} distinct corners, skipping hull",
        index,
        corners.len()
      );
      return None;
    }

    let boundary = self.hull.hull(&corners, self.config.concavity);
    let edges = reduce_boundary_with_tolerance(&boundary, self.config.collinear_tolerance);
    trace!(
      "cluster {}: {} cells, {} corners, {} boundary points, {} edges",
      index,
      cluster.len(),
      corners.len(),
      boundary.len(),
      edges.len()
    );

    if edges.len() >= 3 {
      return Some(edges);
    }

    match self.config.degenerate {
      DegeneratePolicy::Keep if !edges.is_empty() => {
        debug!(
          "cluster {}: keeping degenerate polygon with {} edges",
          index,
          edges.len()
        );
        Some(edges)
      }
      _ => {
        warn!(
          "cluster {}: dropping degenerate polygon ({} cells reduce to {} edges)",
          index,
          cluster.len(),
          edges.len()
        );
        None
      }
    }
  }
}

/// Polygonizes `grid` with the built-in concave hull.
pub fn polygonize<G: TileGrid + ?Sized>(
  grid: &G,
  config: &PolygonizeConfig,
) -> Result<Vec<Polygon>, ConfigError> {
  Ok(Polygonizer::new(config.clone())?.polygonize(grid))
}

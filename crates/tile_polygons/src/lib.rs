//! Tile Polygons - minimal collision polygons from tile layers.
//!
//! Groups the cells of a tile layer that match a configurable rule into
//! 4-connected clusters and turns each cluster into one simple polygon with
//! the fewest straight edges, ready to be used as a collision or visibility
//! boundary.
//!
//! # Pipeline
//!
//! 1. [`find_clusters`] labels connected regions of matching cells
//! 2. [`cluster_corners`] collects each region's cell corners
//! 3. A [`HullProvider`] orders those corners into a closed boundary
//! 4. [`reduce_boundary`] merges collinear runs, including the run split by
//!    the boundary's start point
//! 5. [`wrap`] tags each edge with its polygon id and outward normal
//!
//! # Usage
//!
//! ```ignore
//! let layer = TileLayer::load("assets/layer.toml")?;
//! let config = PolygonizeConfig::default()
//!   .with_matching(MatchConfig::default().with_collides(true))
//!   .with_tile_size(16.0, 16.0);
//!
//! for polygon in Polygonizer::new(config)?.polygonize(&layer) {
//!   println!("{:?}: {} edges", polygon.id, polygon.edge_count());
//! }
//! ```

pub mod cluster;
pub mod config;
pub mod coords;
pub mod corners;
pub mod edge;
pub mod hull;
pub mod matching;
pub mod pipeline;
pub mod polygon;
pub mod reduce;
pub mod tile;

pub use cluster::{Cluster, ClusterLabels, find_clusters, label_clusters};
pub use config::{ConfigError, DegeneratePolicy, PolygonizeConfig};
pub use coords::CellPos;
pub use corners::cluster_corners;
pub use edge::{Edge, is_collinear, is_collinear_within};
pub use hull::{
  ConcaveHull, ConvexHull, HullProvider, concave_hull, convex_hull, point_in_polygon, signed_area,
};
pub use matching::MatchConfig;
pub use pipeline::{Polygonizer, polygonize};
pub use polygon::{Polygon, PolygonId, WrappedEdge, outward_normal, wrap};
pub use reduce::{reduce_boundary, reduce_boundary_with_tolerance};
pub use tile::{EMPTY_INDEX, LayerError, Tile, TileData, TileGrid, TileLayer};

//! Loads a tile layer and a polygonizer config and prints the resulting
//! polygons.
//!
//! ```sh
//! cargo run -p tile_polygons --example print_polygons -- [layer.toml] [config.toml]
//! ```

use std::error::Error;

use tile_polygons::{PolygonizeConfig, Polygonizer, TileGrid, TileLayer};

const DEFAULT_LAYER: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/layer.toml");
const DEFAULT_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/polygonize.toml");

fn main() -> Result<(), Box<dyn Error>> {
  let mut args = std::env::args().skip(1);
  let layer_path = args.next().unwrap_or_else(|| DEFAULT_LAYER.to_string());
  let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_string());

  let layer = TileLayer::load(&layer_path)?;
  let config = PolygonizeConfig::load(&config_path)?;

  println!(
    "{}: {}x{} tiles, tile size {}x{}",
    layer_path,
    layer.width(),
    layer.height(),
    config.tile_width,
    config.tile_height
  );

  let polygons = Polygonizer::new(config)?.polygonize(&layer);
  for polygon in &polygons {
    println!(
      "\npolygon {} ({} edges, area {})",
      polygon.id.0,
      polygon.edge_count(),
      polygon.signed_area()
    );
    for wrapped in &polygon.edges {
      println!(
        "  ({:>6.1}, {:>6.1}) -> ({:>6.1}, {:>6.1})  normal ({:>4.1}, {:>4.1})",
        wrapped.edge.start.x,
        wrapped.edge.start.y,
        wrapped.edge.end.x,
        wrapped.edge.end.y,
        wrapped.normal.x,
        wrapped.normal.y
      );
    }
  }

  println!("\n{} polygons", polygons.len());
  Ok(())
}

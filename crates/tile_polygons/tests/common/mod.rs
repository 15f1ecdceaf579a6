//! Shared helpers for integration tests.

#![allow(dead_code)]

use rand::prelude::*;
use tile_polygons::{Tile, TileLayer};

/// Index of the solid tile placed by the helpers.
pub const SOLID: i32 = 1;

/// Builds a layer from ASCII rows: `#` is a solid colliding tile, `~` is a
/// non-colliding tile with index 2, anything else is empty.
pub fn layer_from_rows(rows: &[&str]) -> TileLayer {
  let width = rows.first().map_or(0, |r| r.len()) as u32;
  let mut layer = TileLayer::new(width, rows.len() as u32);
  for (y, row) in rows.iter().enumerate() {
    for (x, ch) in row.chars().enumerate() {
      let tile = match ch {
        '#' => Some(Tile::new(SOLID).with_collides(true)),
        '~' => Some(Tile::new(2)),
        _ => None,
      };
      layer.set(x as u32, y as u32, tile);
    }
  }
  layer
}

/// Random layer where each cell is solid with probability `density`.
pub fn random_layer(seed: u64, width: u32, height: u32, density: f64) -> TileLayer {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut layer = TileLayer::new(width, height);
  for y in 0..height {
    for x in 0..width {
      if rng.gen_bool(density) {
        layer.set(x, y, Some(Tile::new(SOLID).with_collides(true)));
      }
    }
  }
  layer
}

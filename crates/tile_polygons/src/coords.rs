//! Grid coordinate types.
//!
//! Tile layers use a Y+ down coordinate system, matching how tile rows are
//! stored:
//! - **X+** is to the right
//! - **Y+** is downward (next row)
//! - **(0, 0)** is the top-left cell
//!
//! Cell `(x, y)` covers the unit square from corner `(x, y)` to corner
//! `(x + 1, y + 1)` in tile units.

use bevy::math::Vec2;

/// Position of a cell in a tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
  pub x: u32,
  pub y: u32,
}

impl CellPos {
  pub const fn new(x: u32, y: u32) -> Self {
    Self { x, y }
  }

  /// Returns the 4-connected neighbors that lie inside a `width` x `height`
  /// grid, in north, south, west, east order.
  pub fn neighbors(self, width: u32, height: u32) -> impl Iterator<Item = CellPos> {
    let CellPos { x, y } = self;
    let north = (y > 0).then(|| CellPos::new(x, y - 1));
    let south = (y + 1 < height).then(|| CellPos::new(x, y + 1));
    let west = (x > 0).then(|| CellPos::new(x - 1, y));
    let east = (x + 1 < width).then(|| CellPos::new(x + 1, y));
    [north, south, west, east].into_iter().flatten()
  }

  /// Lattice positions of the four corners of this cell, clockwise from
  /// top-left. Corner `(x, y)` is the top-left corner of cell `(x, y)`.
  pub fn corners(self) -> [CellPos; 4] {
    let CellPos { x, y } = self;
    [
      CellPos::new(x, y),
      CellPos::new(x + 1, y),
      CellPos::new(x + 1, y + 1),
      CellPos::new(x, y + 1),
    ]
  }

  /// Treating `self` as a corner, returns the four cells that meet at it, or
  /// `None` on the top or left grid border where some of them do not exist.
  pub fn cells_around_corner(self) -> Option<[CellPos; 4]> {
    let CellPos { x, y } = self;
    if x == 0 || y == 0 {
      return None;
    }
    Some([
      CellPos::new(x - 1, y - 1),
      CellPos::new(x, y - 1),
      CellPos::new(x, y),
      CellPos::new(x - 1, y),
    ])
  }

  /// Corner position in tile units.
  pub fn to_vec2(self) -> Vec2 {
    Vec2::new(self.x as f32, self.y as f32)
  }
}

//! Tile data and grid access.
//!
//! The polygonizer only reads tiles through the [`TileData`] and
//! [`TileGrid`] traits, so any tilemap representation can be plugged in.
//! [`TileLayer`] is a simple owned implementation that can also be loaded
//! from a TOML layer file.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use serde::Deserialize;

/// Index used in layer data for cells without a tile.
pub const EMPTY_INDEX: i32 = -1;

/// Read access to the attributes of a single tile.
pub trait TileData {
  /// Tileset index of this tile.
  fn index(&self) -> i32;

  /// Truthiness of a named boolean attribute. Missing attributes are false.
  fn property(&self, name: &str) -> bool;

  /// Generic collision flag.
  fn collides(&self) -> bool;
}

/// Read-only access to a rectangular grid of optional tiles.
///
/// Implementations must be side-effect free: a polygonizer run may read the
/// same cell more than once and expects the same answer each time.
pub trait TileGrid {
  type Tile: TileData;

  fn width(&self) -> u32;

  fn height(&self) -> u32;

  /// Returns the tile at (x, y), or `None` for empty or out-of-range cells.
  fn get(&self, x: u32, y: u32) -> Option<&Self::Tile>;
}

/// An owned tile with a boolean property table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tile {
  pub index: i32,
  pub collides: bool,
  pub properties: HashMap<String, bool>,
}

impl Tile {
  pub fn new(index: i32) -> Self {
    Self {
      index,
      ..Default::default()
    }
  }

  pub fn with_collides(mut self, collides: bool) -> Self {
    self.collides = collides;
    self
  }

  pub fn with_property(mut self, name: impl Into<String>, value: bool) -> Self {
    self.properties.insert(name.into(), value);
    self
  }
}

impl TileData for Tile {
  fn index(&self) -> i32 {
    self.index
  }

  fn property(&self, name: &str) -> bool {
    self.properties.get(name).copied().unwrap_or(false)
  }

  fn collides(&self) -> bool {
    self.collides
  }
}

/// A rectangular layer of optional tiles.
///
/// Data is stored in row-major order (y * width + x).
#[derive(Clone, Debug, Default)]
pub struct TileLayer {
  cells: Box<[Option<Tile>]>,
  width: u32,
  height: u32,
}

impl TileLayer {
  /// Creates an empty layer.
  pub fn new(width: u32, height: u32) -> Self {
    let len = (width as usize) * (height as usize);
    Self {
      cells: vec![None; len].into_boxed_slice(),
      width,
      height,
    }
  }

  /// Builds a layer from row-major tile indices.
  ///
  /// [`EMPTY_INDEX`] marks an empty cell. Each non-empty index is resolved
  /// against `tileset`; indices missing from the tileset become plain tiles
  /// with no collision flag and no properties.
  pub fn from_indices(
    width: u32,
    height: u32,
    data: &[i32],
    tileset: &[Tile],
  ) -> Result<Self, LayerError> {
    let expected = (width as usize) * (height as usize);
    if data.len() != expected {
      return Err(LayerError::DataLength {
        expected,
        actual: data.len(),
      });
    }

    let lookup: HashMap<i32, &Tile> = tileset.iter().map(|t| (t.index, t)).collect();
    let cells = data
      .iter()
      .map(|&index| {
        if index == EMPTY_INDEX {
          None
        } else {
          Some(
            lookup
              .get(&index)
              .map(|t| (*t).clone())
              .unwrap_or_else(|| Tile::new(index)),
          )
        }
      })
      .collect();

    Ok(Self {
      cells,
      width,
      height,
    })
  }

  /// Parses a layer from TOML text.
  pub fn from_toml_str(text: &str) -> Result<Self, LayerError> {
    let file: LayerFile = toml::from_str(text)?;
    let tileset: Vec<Tile> = file.tiles.into_iter().map(Tile::from).collect();
    Self::from_indices(file.width, file.height, &file.data, &tileset)
  }

  /// Reads and parses a TOML layer file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, LayerError> {
    let text = std::fs::read_to_string(path)?;
    Self::from_toml_str(&text)
  }

  #[inline]
  fn index_of(&self, x: u32, y: u32) -> Option<usize> {
    if x < self.width && y < self.height {
      Some((y as usize) * (self.width as usize) + (x as usize))
    } else {
      None
    }
  }

  /// Places a tile at (x, y). Returns false if out of bounds.
  pub fn set(&mut self, x: u32, y: u32, tile: Option<Tile>) -> bool {
    match self.index_of(x, y) {
      Some(i) => {
        self.cells[i] = tile;
        true
      }
      None => false,
    }
  }
}

impl TileGrid for TileLayer {
  type Tile = Tile;

  fn width(&self) -> u32 {
    self.width
  }

  fn height(&self) -> u32 {
    self.height
  }

  fn get(&self, x: u32, y: u32) -> Option<&Tile> {
    self.index_of(x, y).and_then(|i| self.cells[i].as_ref())
  }
}

/// On-disk layer layout.
#[derive(Deserialize)]
struct LayerFile {
  width: u32,
  height: u32,
  data: Vec<i32>,
  #[serde(default)]
  tiles: Vec<TileDef>,
}

/// Tileset entry in a layer file.
#[derive(Deserialize)]
struct TileDef {
  index: i32,
  #[serde(default)]
  collides: bool,
  #[serde(default)]
  properties: HashMap<String, bool>,
}

impl From<TileDef> for Tile {
  fn from(def: TileDef) -> Self {
    Self {
      index: def.index,
      collides: def.collides,
      properties: def.properties,
    }
  }
}

/// Error building or loading a tile layer.
#[derive(Debug)]
pub enum LayerError {
  Io(io::Error),
  Parse(toml::de::Error),
  DataLength { expected: usize, actual: usize },
}

impl From<io::Error> for LayerError {
  fn from(err: io::Error) -> Self {
    Self::Io(err)
  }
}

impl From<toml::de::Error> for LayerError {
  fn from(err: toml::de::Error) -> Self {
    Self::Parse(err)
  }
}

impl std::fmt::Display for LayerError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io(e) => write!(f, "I/O error: {}", e),
      Self::Parse(e) => write!(f, "layer parse error: {}", e),
      Self::DataLength { expected, actual } => {
        write!(
          f,
          "layer data length mismatch: expected {}, got {}",
          expected, actual
        )
      }
    }
  }
}

impl std::error::Error for LayerError {}

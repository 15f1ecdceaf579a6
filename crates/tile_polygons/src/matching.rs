//! Tile matching rules.
//!
//! A tile matches when it satisfies any configured mode. With no mode
//! configured nothing matches.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::tile::TileData;

/// Which tiles take part in clustering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
  /// Tileset indices that match.
  pub indices: BTreeSet<i32>,
  /// Name of a boolean tile property that marks matching tiles.
  pub property: Option<String>,
  /// Match tiles with the generic collision flag set.
  pub collides: bool,
}

impl MatchConfig {
  /// Matches tiles whose index is in `indices`.
  pub fn with_indices(mut self, indices: impl IntoIterator<Item = i32>) -> Self {
    self.indices.extend(indices);
    self
  }

  /// Matches tiles whose `name` property is true.
  pub fn with_property(mut self, name: impl Into<String>) -> Self {
    self.property = Some(name.into());
    self
  }

  /// Matches tiles with the collision flag set.
  pub fn with_collides(mut self, enabled: bool) -> Self {
    self.collides = enabled;
    self
  }

  /// Returns true if no matching mode is configured.
  pub fn is_empty(&self) -> bool {
    self.indices.is_empty() && self.property.is_none() && !self.collides
  }

  pub fn matches<T: TileData + ?Sized>(&self, tile: &T) -> bool {
    if self.collides && tile.collides() {
      return true;
    }
    if let Some(name) = &self.property
      && tile.property(name)
    {
      return true;
    }
    self.indices.contains(&tile.index())
  }
}

//! Polygonizer configuration.

use std::io;
use std::path::Path;

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::matching::MatchConfig;

/// What to do with a boundary that reduces to fewer than three edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
  /// Skip the polygon and log a warning.
  #[default]
  Drop,
  /// Emit the polygon with whatever edges remain.
  Keep,
}

/// Configuration for turning a tile layer into polygons.
///
/// Loaded from TOML; every field is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonizeConfig {
  /// Which tiles form clusters.
  pub matching: MatchConfig,

  /// Longest hull edge left undug, in tiles.
  /// Default: 1.0
  pub concavity: f32,

  /// World units per tile horizontally.
  /// Default: 1.0
  pub tile_width: f32,

  /// World units per tile vertically.
  /// Default: 1.0
  pub tile_height: f32,

  /// Sine tolerance for merging collinear edges; 0 is the exact test.
  /// Default: 0.0
  pub collinear_tolerance: f32,

  /// Handling of boundaries that collapse below three edges.
  /// Default: drop
  pub degenerate: DegeneratePolicy,
}

impl Default for PolygonizeConfig {
  fn default() -> Self {
    Self {
      matching: MatchConfig::default(),
      concavity: 1.0,
      tile_width: 1.0,
      tile_height: 1.0,
      collinear_tolerance: 0.0,
      degenerate: DegeneratePolicy::Drop,
    }
  }
}

impl PolygonizeConfig {
  /// Creates a config with the given matching rules.
  pub fn with_matching(mut self, matching: MatchConfig) -> Self {
    self.matching = matching;
    self
  }

  /// Creates a config with the given hull concavity.
  pub fn with_concavity(mut self, concavity: f32) -> Self {
    self.concavity = concavity;
    self
  }

  /// Creates a config with the given tile size in world units.
  pub fn with_tile_size(mut self, width: f32, height: f32) -> Self {
    self.tile_width = width;
    self.tile_height = height;
    self
  }

  /// Creates a config with the given collinearity tolerance.
  pub fn with_collinear_tolerance(mut self, tolerance: f32) -> Self {
    self.collinear_tolerance = tolerance;
    self
  }

  /// Creates a config with the given degenerate polygon policy.
  pub fn with_degenerate(mut self, policy: DegeneratePolicy) -> Self {
    self.degenerate = policy;
    self
  }

  /// Tile size as a scale vector.
  pub fn tile_size(&self) -> Vec2 {
    Vec2::new(self.tile_width, self.tile_height)
  }

  /// Checks value ranges.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if !(self.tile_width > 0.0 && self.tile_height > 0.0) {
      return Err(ConfigError::Invalid(format!(
        "tile size must be positive, got {}x{}",
        self.tile_width, self.tile_height
      )));
    }
    if !(self.concavity > 0.0) {
      return Err(ConfigError::Invalid(format!(
        "concavity must be positive, got {}",
        self.concavity
      )));
    }
    if !(self.collinear_tolerance >= 0.0) {
      return Err(ConfigError::Invalid(format!(
        "collinear tolerance must not be negative, got {}",
        self.collinear_tolerance
      )));
    }
    Ok(())
  }

  /// Parses and validates a config from TOML text.
  pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
  }

  /// Reads, parses and validates a TOML config file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    Self::from_toml_str(&text)
  }
}

/// Error loading a polygonizer config.
#[derive(Debug)]
pub enum ConfigError {
  Io(io::Error),
  Parse(toml::de::Error),
  Invalid(String),
}

impl From<io::Error> for ConfigError {
  fn from(err: io::Error) -> Self {
    Self::Io(err)
  }
}

impl From<toml::de::Error> for ConfigError {
  fn from(err: toml::de::Error) -> Self {
    Self::Parse(err)
  }
}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io(e) => write!(f, "I/O error: {}", e),
      Self::Parse(e) => write!(f, "config parse error: {}", e),
      Self::Invalid(msg) => write!(f, "invalid config: {}", msg),
    }
  }
}

impl std::error::Error for ConfigError {}

//! End-to-end polygonization tests.

mod common;

use std::collections::HashSet;
use std::io::Write;

use bevy::math::Vec2;
use common::{layer_from_rows, random_layer};
use tile_polygons::{
  DegeneratePolicy, MatchConfig, Polygon, PolygonId, PolygonizeConfig, Polygonizer, TileLayer,
  polygonize,
};

fn collides() -> PolygonizeConfig {
  PolygonizeConfig::default().with_matching(MatchConfig::default().with_collides(true))
}

fn assert_well_formed(polygon: &Polygon) {
  let n = polygon.edges.len();
  assert!(n >= 3, "{:?} has {} edges", polygon.id, n);

  let sum: Vec2 = polygon.edges.iter().map(|e| e.edge.direction()).sum();
  assert_eq!(sum, Vec2::ZERO, "{:?} does not close", polygon.id);

  for i in 0..n {
    let a = &polygon.edges[i];
    let b = &polygon.edges[(i + 1) % n];
    assert_eq!(a.edge.end, b.edge.start, "{:?} edge {} is not chained", polygon.id, i);
    assert_ne!(
      a.edge.direction().perp_dot(b.edge.direction()),
      0.0,
      "{:?} edges {} and {} are collinear",
      polygon.id,
      i,
      (i + 1) % n
    );
    assert_eq!(a.polygon, polygon.id);
  }

  assert!(polygon.is_clockwise(), "{:?} is not clockwise", polygon.id);
}

#[test]
fn single_cell_becomes_unit_square() {
  let layer = layer_from_rows(&["...", ".#.", "..."]);
  let polygons = polygonize(&layer, &collides()).unwrap();

  assert_eq!(polygons.len(), 1);
  let polygon = &polygons[0];
  assert_well_formed(polygon);
  assert_eq!(polygon.edge_count(), 4);
  assert_eq!(polygon.bounds(), Some((Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0))));
  assert_eq!(polygon.signed_area(), 1.0);
}

#[test]
fn l_shape_has_six_edges() {
  for rows in [
    ["#.", "##"],
    ["##", "#."],
    ["##", ".#"],
    [".#", "##"],
  ] {
    let layer = layer_from_rows(&rows);
    let polygons = polygonize(&layer, &collides()).unwrap();
    assert_eq!(polygons.len(), 1);
    assert_well_formed(&polygons[0]);
    assert_eq!(polygons[0].edge_count(), 6, "{:?}", rows);
    assert_eq!(polygons[0].signed_area(), 3.0);
  }
}

#[test]
fn rectangles_have_four_edges() {
  let layer = layer_from_rows(&[
    "......", //
    ".####.",
    ".####.",
    ".####.",
    "......",
  ]);
  let polygons = polygonize(&layer, &collides()).unwrap();
  assert_eq!(polygons.len(), 1);
  assert_well_formed(&polygons[0]);
  assert_eq!(polygons[0].edge_count(), 4);
  assert_eq!(
    polygons[0].bounds(),
    Some((Vec2::new(1.0, 1.0), Vec2::new(5.0, 4.0)))
  );
}

#[test]
fn large_solid_block_is_one_square() {
  let size = 300;
  let row = "#".repeat(size);
  let rows: Vec<&str> = (0..size).map(|_| row.as_str()).collect();
  let layer = layer_from_rows(&rows);

  let polygons = polygonize(&layer, &collides()).unwrap();
  assert_eq!(polygons.len(), 1);
  assert_well_formed(&polygons[0]);
  assert_eq!(polygons[0].edge_count(), 4);
  assert_eq!(polygons[0].signed_area(), (size * size) as f32);
}

#[test]
fn normals_point_away_from_interior() {
  let layer = layer_from_rows(&["###", "#..", "#.."]);
  let polygons = polygonize(&layer, &collides()).unwrap();
  let polygon = &polygons[0];
  assert_well_formed(polygon);

  for wrapped in &polygon.edges {
    let mid = (wrapped.edge.start + wrapped.edge.end) * 0.5;
    let probe = mid + wrapped.normal * 0.25;
    let cell = probe.floor();
    let inside = cell.x >= 0.0
      && cell.y >= 0.0
      && (cell.x == 0.0 || cell.y == 0.0)
      && cell.x < 3.0
      && cell.y < 3.0;
    assert!(!inside, "normal of {:?} points inward", wrapped.edge);
  }
}

#[test]
fn separated_clusters_share_no_edge() {
  let layer = layer_from_rows(&[
    "##..#", //
    "##..#",
    ".....",
    "###..",
  ]);
  let polygons = polygonize(&layer, &collides()).unwrap();
  assert_eq!(polygons.len(), 3);
  assert_eq!(
    polygons.iter().map(|p| p.id).collect::<Vec<_>>(),
    vec![PolygonId(0), PolygonId(1), PolygonId(2)]
  );

  let mut seen = HashSet::new();
  for polygon in &polygons {
    assert_well_formed(polygon);
    for wrapped in &polygon.edges {
      let (a, b) = (wrapped.edge.start.to_array(), wrapped.edge.end.to_array());
      let key = if a < b { (a, b) } else { (b, a) };
      let key = (key.0.map(f32::to_bits), key.1.map(f32::to_bits));
      assert!(seen.insert(key), "edge {:?} shared", wrapped.edge);
    }
  }
}

#[test]
fn diagonal_neighbors_are_separate_polygons() {
  let layer = layer_from_rows(&["#.", ".#"]);
  let polygons = polygonize(&layer, &collides()).unwrap();
  assert_eq!(polygons.len(), 2);
  for polygon in &polygons {
    assert_well_formed(polygon);
    assert_eq!(polygon.edge_count(), 4);
  }
}

#[test]
fn random_layers_produce_well_formed_polygons() {
  for seed in 0..6 {
    let layer = random_layer(seed, 24, 24, 0.5);
    for polygon in polygonize(&layer, &collides()).unwrap() {
      assert_well_formed(&polygon);
    }
  }
}

#[test]
fn matching_modes_select_tiles() {
  let layer = layer_from_rows(&["#~#"]);

  let by_index = PolygonizeConfig::default().with_matching(MatchConfig::default().with_indices([2]));
  let polygons = polygonize(&layer, &by_index).unwrap();
  assert_eq!(polygons.len(), 1);
  assert_eq!(
    polygons[0].bounds(),
    Some((Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0)))
  );

  let both = PolygonizeConfig::default().with_matching(
    MatchConfig::default()
      .with_indices([2])
      .with_collides(true),
  );
  let polygons = polygonize(&layer, &both).unwrap();
  assert_eq!(polygons.len(), 1);
  assert_eq!(polygons[0].edge_count(), 4);
  assert_eq!(polygons[0].signed_area(), 3.0);
}

#[test]
fn empty_inputs_yield_no_polygons() {
  assert!(polygonize(&TileLayer::new(0, 0), &collides()).unwrap().is_empty());
  assert!(polygonize(&layer_from_rows(&["...", "..."]), &collides()).unwrap().is_empty());
  assert!(polygonize(&layer_from_rows(&["##"]), &PolygonizeConfig::default()).unwrap().is_empty());
}

#[test]
fn layers_run_in_parallel() {
  let layers: Vec<TileLayer> = (0..8).map(|seed| random_layer(seed, 20, 20, 0.4)).collect();
  let polygonizer = Polygonizer::new(collides().with_degenerate(DegeneratePolicy::Drop)).unwrap();

  let parallel = polygonizer.polygonize_layers(&layers);
  assert_eq!(parallel.len(), layers.len());
  for (layer, polygons) in layers.iter().zip(&parallel) {
    assert_eq!(&polygonizer.polygonize(layer), polygons);
  }
}

#[test]
fn loads_layer_and_config_from_files() {
  let mut layer_file = tempfile::NamedTempFile::new().unwrap();
  write!(
    layer_file,
    r#"
width = 4
height = 3
data = [
  -1, -1, -1, -1,
  -1,  5,  5, -1,
  -1,  5, -1, -1,
]

[[tiles]]
index = 5
properties = {{ wall = true }}
"#
  )
  .unwrap();

  let mut config_file = tempfile::NamedTempFile::new().unwrap();
  write!(
    config_file,
    r#"
tile_width = 32.0
tile_height = 32.0

[matching]
property = "wall"
"#
  )
  .unwrap();

  let layer = TileLayer::load(layer_file.path()).unwrap();
  let config = PolygonizeConfig::load(config_file.path()).unwrap();
  let polygons = polygonize(&layer, &config).unwrap();

  assert_eq!(polygons.len(), 1);
  assert_well_formed(&polygons[0]);
  assert_eq!(polygons[0].edge_count(), 6);
  assert_eq!(
    polygons[0].bounds(),
    Some((Vec2::splat(32.0), Vec2::new(96.0, 96.0)))
  );
}

#[test]
fn missing_config_file_is_io_error() {
  let dir = tempfile::tempdir().unwrap();
  let err = PolygonizeConfig::load(dir.path().join("missing.toml")).unwrap_err();
  assert!(matches!(err, tile_polygons::ConfigError::Io(_)));
}

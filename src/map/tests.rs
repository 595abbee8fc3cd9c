//! Map domain: tests for layer parsing and level data helpers.

use bevy::prelude::Vec2;
use std::path::Path;

use super::{ColliderRole, MapLoadError, load_map, map_to_world, parse_map};

const SAMPLE: &str = r#"{
    "height": 20,
    "width": 60,
    "layers": [
        { "name": "background", "type": "tilelayer", "data": [1, 2, 3] },
        {
            "name": "colliders",
            "type": "objectgroup",
            "objects": [
                { "id": 1, "name": "", "x": 0, "y": 160, "width": 320, "height": 16 },
                { "id": 2, "name": "ledge", "x": 400, "y": 120, "width": 64, "height": 8 },
                { "id": 3, "name": "exit", "x": 900, "y": 140, "width": 16, "height": 20 }
            ]
        },
        {
            "name": "spawnpoints",
            "type": "objectgroup",
            "objects": [
                { "name": "player", "x": 32, "y": 144 },
                { "name": "flame", "x": 200, "y": 144 },
                { "name": "guy", "x": 420, "y": 100 },
                { "name": "flame", "x": 600, "y": 144 },
                { "name": "bird", "x": 800, "y": 60 }
            ]
        }
    ]
}"#;

// -----------------------------------------------------------------------------
// Collider layer
// -----------------------------------------------------------------------------

#[test]
fn test_non_exit_colliders_are_static_platforms() {
    let map = parse_map(SAMPLE, "sample").unwrap();

    let platforms: Vec<_> = map.colliders.iter().filter(|c| c.name != "exit").collect();
    assert_eq!(platforms.len(), 2);
    for collider in platforms {
        assert_eq!(collider.role, ColliderRole::Platform);
        assert!(collider.is_static);
    }
}

#[test]
fn test_exit_collider_is_non_static_trigger() {
    let map = parse_map(SAMPLE, "sample").unwrap();

    let exit = map.colliders.iter().find(|c| c.name == "exit").unwrap();
    assert_eq!(exit.role, ColliderRole::Exit);
    assert!(!exit.is_static);
    assert_eq!(exit.position, Vec2::new(900.0, 140.0));
    assert_eq!(exit.size, Vec2::new(16.0, 20.0));
}

#[test]
fn test_collider_world_rect_is_centered_and_scaled() {
    let map = parse_map(SAMPLE, "sample").unwrap();
    let floor = &map.colliders[0];

    let (center, size) = floor.world_rect(4.0);
    assert_eq!(center, Vec2::new(640.0, -672.0));
    assert_eq!(size, Vec2::new(1280.0, 64.0));
}

// -----------------------------------------------------------------------------
// Spawn layer
// -----------------------------------------------------------------------------

#[test]
fn test_spawn_points_accumulate_in_input_order() {
    let map = parse_map(SAMPLE, "sample").unwrap();

    assert_eq!(
        map.spawns("flame"),
        &[Vec2::new(200.0, 144.0), Vec2::new(600.0, 144.0)]
    );
    assert_eq!(map.spawns("guy"), &[Vec2::new(420.0, 100.0)]);
    assert_eq!(map.spawns("bird").len(), 1);
    assert!(map.spawns("dragon").is_empty());
}

#[test]
fn test_player_spawn_is_first_player_point() {
    let source = r#"{ "layers": [ { "name": "spawnpoints", "objects": [
        { "name": "player", "x": 10, "y": 20 },
        { "name": "player", "x": 99, "y": 99 }
    ] } ] }"#;
    let map = parse_map(source, "two-players").unwrap();

    assert_eq!(map.player_spawn(), Some(Vec2::new(10.0, 20.0)));
}

#[test]
fn test_missing_player_spawn() {
    let source = r#"{ "layers": [ { "name": "colliders", "objects": [] } ] }"#;
    let map = parse_map(source, "empty").unwrap();

    assert_eq!(map.player_spawn(), None);
    assert!(map.spawn_points.is_empty());
}

// -----------------------------------------------------------------------------
// Document handling
// -----------------------------------------------------------------------------

#[test]
fn test_unknown_layers_are_skipped() {
    let source = r#"{ "layers": [
        { "name": "decor", "objects": [ { "name": "exit", "x": 0, "y": 0, "width": 1, "height": 1 } ] },
        { "name": "background", "data": [0, 0] }
    ] }"#;
    let map = parse_map(source, "decor-only").unwrap();

    assert!(map.colliders.is_empty());
    assert!(map.spawn_points.is_empty());
}

#[test]
fn test_loading_twice_is_identical() {
    let first = parse_map(SAMPLE, "sample").unwrap();
    let second = parse_map(SAMPLE, "sample").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_document_is_parse_error() {
    let err = parse_map("{ \"layers\": [ { \"objects\": [] } ] }", "broken").unwrap_err();
    assert!(matches!(err, MapLoadError::Parse { ref path, .. } if path == "broken"));

    let err = parse_map("not json", "garbage").unwrap_err();
    assert!(matches!(err, MapLoadError::Parse { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_map(Path::new("assets/maps/does-not-exist.json")).unwrap_err();
    assert!(matches!(err, MapLoadError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.json"));
}

#[test]
fn test_map_to_world_flips_y_and_scales() {
    assert_eq!(map_to_world(Vec2::new(10.0, 20.0), 4.0), Vec2::new(40.0, -80.0));
    assert_eq!(map_to_world(Vec2::ZERO, 4.0), Vec2::ZERO);
}

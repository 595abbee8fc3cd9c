//! Config domain: tests for RON parsing and defaults.

use super::{GameConfig, parse_game_config};
use crate::input::HoldPolicy;

#[test]
fn test_empty_config_uses_defaults() {
    let config = parse_game_config("()", "inline").unwrap();
    let defaults = GameConfig::default();

    assert_eq!(config.seed, None);
    assert_eq!(config.player.max_health, defaults.player.max_health);
    assert_eq!(config.enemies.flyer_speeds, defaults.enemies.flyer_speeds);
    assert_eq!(config.levels.levels.len(), defaults.levels.levels.len());
}

#[test]
fn test_default_tuning_matches_game_rules() {
    let config = GameConfig::default();

    assert_eq!(config.player.max_health, 3);
    assert_eq!(config.player.jump_charges, 2);
    assert_eq!(config.player.projectile_speed, 800.0);
    assert_eq!(config.player.fall_threshold, 2000.0);
    assert_eq!(config.enemies.inhale_pull_speed, 800.0);
    assert_eq!(config.enemies.hopper_idle_secs, 1.0);
    assert_eq!(config.enemies.patrol_idle_secs, 1.0);
    assert_eq!(config.enemies.patrol_walk_secs, 2.0);
    assert_eq!(config.enemies.flyer_spawn_interval, 10.0);
    assert_eq!(config.camera.follow_limit, 432.0);
    assert_eq!(config.input.hold_policy, HoldPolicy::Flat);
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let source = r#"(
        seed: 42,
        input: (hold_policy: RefCounted),
        player: (max_health: 5),
    )"#;
    let config = parse_game_config(source, "inline").unwrap();

    assert_eq!(config.seed, Some(42));
    assert_eq!(config.input.hold_policy, HoldPolicy::RefCounted);
    assert_eq!(config.player.max_health, 5);
    assert_eq!(config.player.projectile_speed, 800.0);
}

#[test]
fn test_level_catalog_parses() {
    let source = r#"(
        levels: (
            levels: [
                (name: "one", map_path: "assets/maps/one.json", scale: 2.0),
                (name: "two", map_path: "assets/maps/two.json"),
            ],
        ),
    )"#;
    let config = parse_game_config(source, "inline").unwrap();

    assert_eq!(config.levels.levels.len(), 2);
    assert_eq!(config.levels.levels[0].scale, 2.0);
    assert_eq!(config.levels.levels[1].name, "two");
    assert_eq!(config.levels.levels[1].scale, 4.0);
}

#[test]
fn test_malformed_config_reports_file() {
    let err = parse_game_config("(player: (max_health: \"lots\"))", "game.ron").unwrap_err();
    assert_eq!(err.file, "game.ron");
    assert!(err.to_string().starts_with("Failed to load game.ron"));
}

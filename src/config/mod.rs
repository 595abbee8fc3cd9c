//! Config domain: RON-backed game configuration and tuning resources.

mod loader;
#[cfg(test)]
mod tests;

pub use loader::{CONFIG_PATH, ConfigLoadError, load_game_config, parse_game_config};

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::enemies::EnemyTuning;
use crate::input::InputConfig;
use crate::level::{CameraTuning, LevelCatalog};
use crate::movement::PhysicsTuning;
use crate::player::PlayerTuning;

/// Everything read from `assets/data/game.ron`. Every section falls back to
/// its defaults field by field, so a partial file is valid.
#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for level randomness; `None` draws one from entropy.
    pub seed: Option<u64>,
    pub input: InputConfig,
    pub physics: PhysicsTuning,
    pub player: PlayerTuning,
    pub enemies: EnemyTuning,
    pub camera: CameraTuning,
    pub levels: LevelCatalog,
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = load_game_config(Path::new(CONFIG_PATH));

        app.insert_resource(Gravity(Vec2::NEG_Y * config.physics.gravity))
            .insert_resource(config.input.clone())
            .insert_resource(config.physics.clone())
            .insert_resource(config.player.clone())
            .insert_resource(config.enemies.clone())
            .insert_resource(config.camera.clone())
            .insert_resource(config.levels.clone())
            .insert_resource(config);
    }
}

//! Loader for the RON game configuration at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::GameConfig;

pub const CONFIG_PATH: &str = "assets/data/game.ron";

/// Error type for configuration loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a configuration document. `file` only labels errors.
pub fn parse_game_config(contents: &str, file: &str) -> Result<GameConfig, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load the game configuration, falling back to built-in defaults.
///
/// A missing file is expected during development and only warns; a file that
/// exists but does not parse is reported as an error.
pub fn load_game_config(path: &Path) -> GameConfig {
    let file_name = path.display().to_string();

    if !path.exists() {
        warn!("Config not found at {}, using defaults", file_name);
        return GameConfig::default();
    }

    let parsed = fs::read_to_string(path)
        .map_err(|e| ConfigLoadError {
            file: file_name.clone(),
            message: format!("IO error: {}", e),
        })
        .and_then(|contents| parse_game_config(&contents, &file_name));

    match parsed {
        Ok(config) => {
            info!(
                "Loaded config from {}: {} level(s), seed={:?}",
                file_name,
                config.levels.levels.len(),
                config.seed
            );
            config
        }
        Err(e) => {
            error!("{}; using defaults", e);
            GameConfig::default()
        }
    }
}

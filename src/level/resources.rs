//! Level domain: level catalog, session and per-level resources.

use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::map::LevelMap;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelDef {
    pub name: String,
    pub map_path: String,
    /// Map units to world units
    pub scale: f32,
}

impl Default for LevelDef {
    fn default() -> Self {
        Self {
            name: String::new(),
            map_path: String::new(),
            scale: 4.0,
        }
    }
}

/// Ordered list of levels played in sequence.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelCatalog {
    pub levels: Vec<LevelDef>,
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self {
            levels: vec![
                LevelDef {
                    name: "Green Hills".to_string(),
                    map_path: "assets/maps/level1.json".to_string(),
                    scale: 4.0,
                },
                LevelDef {
                    name: "Cloud Steps".to_string(),
                    map_path: "assets/maps/level2.json".to_string(),
                    scale: 4.0,
                },
            ],
        }
    }
}

impl LevelCatalog {
    pub fn get(&self, index: usize) -> Option<&LevelDef> {
        self.levels.get(index)
    }

    /// Level after `index`, wrapping to the first after the last.
    pub fn next_index(&self, index: usize) -> usize {
        if self.levels.is_empty() {
            return 0;
        }
        (index + 1) % self.levels.len()
    }
}

/// The level being played and its loaded map.
#[derive(Resource, Debug, Default)]
pub struct LevelSession {
    pub index: usize,
    pub map: Option<LevelMap>,
    pub last_error: Option<String>,
}

/// World-space facts about the running level, written when it spawns.
#[derive(Resource, Debug, Clone, Copy)]
pub struct LevelBounds {
    pub scale: f32,
    /// Leftmost world x of the level geometry
    pub left_edge: f32,
    /// Camera height, fixed for the level
    pub camera_y: f32,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self {
            scale: 1.0,
            left_edge: 0.0,
            camera_y: 0.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Added to the player's x so the player sits left of centre
    pub offset_x: f32,
    /// Camera height above the player spawn point
    pub offset_y: f32,
    /// Map-space distance from the left edge past which the camera stops
    pub follow_limit: f32,
    /// Half the visible width in world units
    pub view_half_width: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            offset_x: 200.0,
            offset_y: 150.0,
            follow_limit: 432.0,
            view_half_width: 640.0,
        }
    }
}

/// Seeded RNG for level randomness. Reseeded per level from a base seed so a
/// configured seed reproduces every level's flyer waves.
#[derive(Resource, Debug)]
pub struct LevelRng {
    base_seed: u64,
    rng: ChaCha8Rng,
}

impl LevelRng {
    pub fn new(seed: Option<u64>) -> Self {
        let base_seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            base_seed,
            rng: ChaCha8Rng::seed_from_u64(base_seed),
        }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    pub fn reseed(&mut self, level_index: usize) {
        self.rng = ChaCha8Rng::seed_from_u64(self.base_seed.wrapping_add(level_index as u64));
    }

    /// Uniform pick from `speeds`; `None` if the list is empty.
    pub fn pick_flyer_speed(&mut self, speeds: &[f32]) -> Option<f32> {
        speeds.choose(&mut self.rng).copied()
    }
}

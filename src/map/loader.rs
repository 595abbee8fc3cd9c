//! Map domain: parsing map documents into `LevelMap`.

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use super::data::{ColliderRole, LevelMap, MapCollider, MapDocument, MapLayer};

const COLLIDERS_LAYER: &str = "colliders";
const SPAWNPOINTS_LAYER: &str = "spawnpoints";
/// Collider name that marks the level exit trigger
const EXIT_NAME: &str = "exit";

/// Error type for map loading failures. Any of these aborts level entry.
#[derive(Debug, Clone, PartialEq)]
pub enum MapLoadError {
    Io { path: String, message: String },
    Parse { path: String, message: String },
    MissingSpawn { path: String, group: String },
}

impl std::fmt::Display for MapLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapLoadError::Io { path, message } => {
                write!(f, "Failed to read map {}: {}", path, message)
            }
            MapLoadError::Parse { path, message } => {
                write!(f, "Failed to parse map {}: {}", path, message)
            }
            MapLoadError::MissingSpawn { path, group } => {
                write!(f, "Map {} has no '{}' spawn point", path, group)
            }
        }
    }
}

impl std::error::Error for MapLoadError {}

/// Read and parse a map file.
pub fn load_map(path: &Path) -> Result<LevelMap, MapLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| MapLoadError::Io {
        path: file_name.clone(),
        message: e.to_string(),
    })?;

    parse_map(&contents, &file_name)
}

/// Parse a map document. `source` only labels errors and warnings.
pub fn parse_map(contents: &str, source: &str) -> Result<LevelMap, MapLoadError> {
    let document: MapDocument =
        serde_json::from_str(contents).map_err(|e| MapLoadError::Parse {
            path: source.to_string(),
            message: e.to_string(),
        })?;

    let mut map = LevelMap::default();

    for layer in &document.layers {
        match layer.name.as_str() {
            COLLIDERS_LAYER => read_colliders(layer, &mut map),
            SPAWNPOINTS_LAYER => {
                for object in &layer.objects {
                    map.spawn_points
                        .push(&object.name, Vec2::new(object.x, object.y));
                }
            }
            other => warn!("[MAP] {}: ignoring unknown layer '{}'", source, other),
        }
    }

    debug!(
        "[MAP] {}: {} collider(s), {} spawn group(s)",
        source,
        map.colliders.len(),
        map.spawn_points.len()
    );

    Ok(map)
}

fn read_colliders(layer: &MapLayer, map: &mut LevelMap) {
    for object in &layer.objects {
        let is_exit = object.name == EXIT_NAME;
        map.colliders.push(MapCollider {
            name: object.name.clone(),
            position: Vec2::new(object.x, object.y),
            size: Vec2::new(object.width, object.height),
            role: if is_exit {
                ColliderRole::Exit
            } else {
                ColliderRole::Platform
            },
            is_static: !is_exit,
        });
    }
}

//! Map domain: tile-layer level data into colliders and spawn points.
//!
//! Level files follow Tiled's JSON export: a list of named layers, each
//! holding rectangle objects in map space (origin top-left, y down).

mod data;
mod loader;
#[cfg(test)]
mod tests;

pub use data::{ColliderRole, LevelMap, MapCollider, SpawnPoints, map_to_world};
pub use loader::{MapLoadError, load_map, parse_map};

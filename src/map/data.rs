//! Map domain: raw map document and the level data derived from it.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

/// Raw map document.
#[derive(Debug, Deserialize)]
pub(crate) struct MapDocument {
    pub layers: Vec<MapLayer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MapLayer {
    pub name: String,
    /// Tile layers carry `data` instead of objects
    #[serde(default)]
    pub objects: Vec<MapObject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MapObject {
    #[serde(default)]
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

/// Role of a level collider
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderRole {
    /// Solid, static terrain
    Platform,
    /// Non-solid trigger leading to the next level
    Exit,
}

/// A rectangle of level geometry, in map space.
#[derive(Debug, Clone, PartialEq)]
pub struct MapCollider {
    pub name: String,
    /// Top-left corner
    pub position: Vec2,
    pub size: Vec2,
    pub role: ColliderRole,
    pub is_static: bool,
}

impl MapCollider {
    /// World-space centre and size of this collider at the given level scale.
    pub fn world_rect(&self, scale: f32) -> (Vec2, Vec2) {
        let center = map_to_world(self.position + self.size * 0.5, scale);
        (center, self.size * scale)
    }
}

/// Named spawn groups, each an ordered list of map-space points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnPoints {
    groups: HashMap<String, Vec<Vec2>>,
}

impl SpawnPoints {
    pub fn push(&mut self, group: &str, point: Vec2) {
        self.groups.entry(group.to_string()).or_default().push(point);
    }

    /// Points for a group in authoring order; empty if the group is absent.
    pub fn get(&self, group: &str) -> &[Vec2] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Everything a level needs from its map file. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelMap {
    pub colliders: Vec<MapCollider>,
    pub spawn_points: SpawnPoints,
}

impl LevelMap {
    pub fn spawns(&self, group: &str) -> &[Vec2] {
        self.spawn_points.get(group)
    }

    /// The level start: first point of the `player` group.
    pub fn player_spawn(&self) -> Option<Vec2> {
        self.spawns("player").first().copied()
    }
}

/// Map space (y down) to world space (y up), scaled.
pub fn map_to_world(point: Vec2, scale: f32) -> Vec2 {
    Vec2::new(point.x * scale, -point.y * scale)
}

//! Movement domain: physics tuning.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Downward acceleration in world units per second squared
    pub gravity: f32,
    /// Length of the ground probe ray below an entity's feet
    pub ground_probe_distance: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 2400.0,
            ground_probe_distance: 4.0,
        }
    }
}

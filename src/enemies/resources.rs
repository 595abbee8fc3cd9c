//! Enemies domain: tuning.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Seconds a hopper waits on the ground between jumps
    pub hopper_idle_secs: f32,
    pub hopper_jump_velocity: f32,
    pub patrol_idle_secs: f32,
    /// Seconds spent walking in each direction
    pub patrol_walk_secs: f32,
    pub patrol_speed: f32,
    /// Flight speeds a new flyer picks from uniformly
    pub flyer_speeds: Vec<f32>,
    /// Seconds between flyer spawns at each flyer spawn point
    pub flyer_spawn_interval: f32,
    /// Distance past the view edge before a flyer is removed
    pub flyer_view_margin: f32,
    /// Horizontal speed of an enemy caught in the inhale zone
    pub inhale_pull_speed: f32,
    pub body_size: [f32; 2],
    pub flyer_size: [f32; 2],
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            hopper_idle_secs: 1.0,
            hopper_jump_velocity: 900.0,
            patrol_idle_secs: 1.0,
            patrol_walk_secs: 2.0,
            patrol_speed: 160.0,
            flyer_speeds: vec![100.0, 200.0, 300.0],
            flyer_spawn_interval: 10.0,
            flyer_view_margin: 200.0,
            inhale_pull_speed: 800.0,
            body_size: [48.0, 48.0],
            flyer_size: [48.0, 36.0],
        }
    }
}

impl EnemyTuning {
    pub fn body_size(&self) -> Vec2 {
        Vec2::from_array(self.body_size)
    }

    pub fn flyer_size(&self) -> Vec2 {
        Vec2::from_array(self.flyer_size)
    }
}

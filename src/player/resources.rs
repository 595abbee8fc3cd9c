//! Player domain: tuning.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_health: u32,
    pub move_speed: f32,
    pub jump_velocity: f32,
    /// Jumps before landing, ground jump included
    pub jump_charges: u32,
    pub projectile_speed: f32,
    /// Map-space depth below which the player has fallen out of the level
    pub fall_threshold: f32,
    /// Delay before the spit animation returns to idle
    pub spit_recover_secs: f32,
    /// Duration of each half of a damage flash
    pub flash_phase_secs: f32,
    pub body_size: [f32; 2],
    pub inhale_zone_size: [f32; 2],
    /// Zone centre relative to the player while facing right
    pub inhale_zone_offset: [f32; 2],
    pub projectile_size: f32,
    pub projectile_view_margin: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: 3,
            move_speed: 300.0,
            jump_velocity: 800.0,
            jump_charges: 2,
            projectile_speed: 800.0,
            fall_threshold: 2000.0,
            spit_recover_secs: 1.0,
            flash_phase_secs: 0.05,
            body_size: [48.0, 48.0],
            inhale_zone_size: [96.0, 48.0],
            inhale_zone_offset: [72.0, 0.0],
            projectile_size: 32.0,
            projectile_view_margin: 100.0,
        }
    }
}

impl PlayerTuning {
    pub fn body_size(&self) -> Vec2 {
        Vec2::from_array(self.body_size)
    }

    pub fn inhale_zone_size(&self) -> Vec2 {
        Vec2::from_array(self.inhale_zone_size)
    }

    pub fn inhale_zone_offset(&self) -> Vec2 {
        Vec2::from_array(self.inhale_zone_offset)
    }
}

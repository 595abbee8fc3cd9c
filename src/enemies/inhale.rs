//! Enemies domain: the inhale pull.

use crate::movement::Facing;

/// Horizontal velocity applied to an inhalable enemy: towards the player,
/// which is against the direction the player faces.
pub fn inhale_pull_velocity(player_facing: Facing, pull_speed: f32) -> f32 {
    player_facing.opposite().sign() * pull_speed
}

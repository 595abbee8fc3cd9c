//! Player domain: movement and lifecycle rules independent of the ECS.

use bevy::prelude::*;

use crate::input::{Action, ActionState};
use crate::movement::Facing;

/// Horizontal direction and facing from held actions. Left is read before
/// right, so holding both cancels out and leaves the player facing right.
pub fn horizontal_intent(actions: &ActionState, facing: Facing) -> (f32, Facing) {
    let mut direction = 0.0;
    let mut facing = facing;

    if actions.is_held(Action::MoveLeft) {
        direction -= 1.0;
        facing = Facing::Left;
    }
    if actions.is_held(Action::MoveRight) {
        direction += 1.0;
        facing = Facing::Right;
    }

    (direction, facing)
}

pub fn projectile_velocity(facing: Facing, speed: f32) -> Vec2 {
    Vec2::new(facing.sign() * speed, 0.0)
}

/// The threshold is in map units (y grows downward there), so it is scaled
/// and flipped before comparing with a world y.
pub fn has_fallen_out(world_y: f32, scale: f32, threshold: f32) -> bool {
    world_y < -threshold * scale
}

//! Movement domain: components and physics layers shared by all entities.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Static level terrain
    Platform,
    /// Level exit trigger
    Exit,
    /// Player character
    Player,
    /// Enemy characters; enemies never list themselves, so they pass
    /// through each other
    Enemy,
    /// Player's inhale zone sensor
    InhaleZone,
    /// Spat projectiles
    Projectile,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Whether the entity stands on a platform, refreshed every frame by a
/// downward ray from its feet.
#[derive(Component, Debug, Default)]
pub struct Grounded(pub bool);

/// Positional child: placed at `owner + offset` every update, mirrored on x
/// when the owner faces left. Despawned once the owner is gone.
#[derive(Component, Debug, Clone, Copy)]
pub struct Attached {
    pub owner: Entity,
    /// Offset while the owner faces right
    pub offset: Vec2,
}

impl Attached {
    pub fn offset_for(&self, facing: Facing) -> Vec2 {
        Vec2::new(self.offset.x * facing.sign(), self.offset.y)
    }
}

/// Despawn once the entity has travelled past the visible area, plus a
/// margin, in the direction it is moving.
#[derive(Component, Debug, Clone, Copy)]
pub struct DespawnOutsideView {
    pub margin: f32,
}

/// True when an entity moving with `velocity_x` has left the view centred on
/// `view_center_x` on the side it is heading towards.
pub fn has_left_view(
    x: f32,
    velocity_x: f32,
    view_center_x: f32,
    view_half_width: f32,
    margin: f32,
) -> bool {
    let reach = view_half_width + margin;
    if velocity_x < 0.0 {
        x < view_center_x - reach
    } else if velocity_x > 0.0 {
        x > view_center_x + reach
    } else {
        false
    }
}

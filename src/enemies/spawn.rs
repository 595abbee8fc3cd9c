//! Enemies domain: spawning helpers for each enemy kind.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::enemies::brain::{HopperBrain, PatrolBrain};
use crate::enemies::components::{Enemy, EnemyKind, Flyer, Inhalable};
use crate::enemies::resources::EnemyTuning;
use crate::level::LevelEntity;
use crate::movement::{DespawnOutsideView, Facing, GameLayer, Grounded};

/// Components shared by every enemy
#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub kind: EnemyKind,
    pub inhalable: Inhalable,
    pub facing: Facing,
    pub level_entity: LevelEntity,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_events: CollisionEventsEnabled,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub locked_axes: LockedAxes,
    pub gravity_scale: GravityScale,
}

impl EnemyBundle {
    pub fn new(kind: EnemyKind, position: Vec2, size: Vec2) -> Self {
        // Flyers hold their altitude; everything still lands on terrain
        let (locked_axes, gravity_scale) = match kind {
            EnemyKind::Bird => (
                LockedAxes::ROTATION_LOCKED.lock_translation_y(),
                GravityScale(0.0),
            ),
            EnemyKind::Flame | EnemyKind::Guy => (LockedAxes::ROTATION_LOCKED, GravityScale(1.0)),
        };

        Self {
            enemy: Enemy,
            kind,
            inhalable: Inhalable::default(),
            facing: if kind == EnemyKind::Bird {
                Facing::Left
            } else {
                Facing::Right
            },
            level_entity: LevelEntity,
            sprite: Sprite {
                color: kind.color(),
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 1.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(size.x, size.y),
            collision_events: CollisionEventsEnabled,
            collision_layers: CollisionLayers::new(
                GameLayer::Enemy,
                [
                    GameLayer::Platform,
                    GameLayer::Player,
                    GameLayer::InhaleZone,
                    GameLayer::Projectile,
                ],
            ),
            velocity: LinearVelocity::default(),
            locked_axes,
            gravity_scale,
        }
    }
}

pub fn spawn_flame(commands: &mut Commands, position: Vec2, tuning: &EnemyTuning) -> Entity {
    commands
        .spawn((
            EnemyBundle::new(EnemyKind::Flame, position, tuning.body_size()),
            HopperBrain::new(tuning.hopper_idle_secs),
            Grounded::default(),
        ))
        .id()
}

pub fn spawn_guy(commands: &mut Commands, position: Vec2, tuning: &EnemyTuning) -> Entity {
    commands
        .spawn((
            EnemyBundle::new(EnemyKind::Guy, position, tuning.body_size()),
            PatrolBrain::new(tuning.patrol_idle_secs, tuning.patrol_walk_secs),
        ))
        .id()
}

pub fn spawn_bird(
    commands: &mut Commands,
    position: Vec2,
    speed: f32,
    tuning: &EnemyTuning,
) -> Entity {
    commands
        .spawn((
            EnemyBundle::new(EnemyKind::Bird, position, tuning.flyer_size()),
            Flyer { speed },
            DespawnOutsideView {
                margin: tuning.flyer_view_margin,
            },
        ))
        .id()
}

//! Player domain: spawning the player, its attachments and projectiles.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::LevelEntity;
use crate::movement::{Attached, DespawnOutsideView, Facing, GameLayer, Grounded};
use crate::player::components::{
    DamageFlash, InhaleEffect, InhaleZone, JumpCharges, Player, PlayerAnimation, PlayerState,
    Projectile,
};
use crate::player::resources::PlayerTuning;
use crate::player::rules::projectile_velocity;

/// Spawn the player with its inhale zone and inhale effect. Returns the
/// player entity.
pub fn spawn_player(commands: &mut Commands, position: Vec2, tuning: &PlayerTuning) -> Entity {
    let size = tuning.body_size();

    let player = commands
        .spawn((
            // Identity & state
            (
                Player,
                PlayerState::new(tuning.max_health),
                Facing::Right,
                Grounded::default(),
                JumpCharges::new(tuning.jump_charges),
                DamageFlash::new(tuning.flash_phase_secs),
                PlayerAnimation::Idle,
                LevelEntity,
            ),
            // Rendering
            (
                Sprite {
                    color: PlayerAnimation::Idle.color(),
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_xyz(position.x, position.y, 2.0),
            ),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(size.x, size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Platform, GameLayer::Exit, GameLayer::Enemy],
                ),
            ),
        ))
        .id();

    let zone_size = tuning.inhale_zone_size();
    let attachment = Attached {
        owner: player,
        offset: tuning.inhale_zone_offset(),
    };
    let start = position + attachment.offset_for(Facing::Right);

    commands.spawn((
        InhaleZone,
        attachment,
        LevelEntity,
        Transform::from_xyz(start.x, start.y, 2.0),
        RigidBody::Kinematic,
        Collider::rectangle(zone_size.x, zone_size.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::InhaleZone, [GameLayer::Enemy]),
    ));

    commands.spawn((
        InhaleEffect,
        attachment,
        LevelEntity,
        Sprite {
            color: Color::srgba(1.0, 1.0, 1.0, 0.35),
            custom_size: Some(zone_size),
            ..default()
        },
        Transform::from_xyz(start.x, start.y, 3.0),
        Visibility::Hidden,
    ));

    info!("Spawned player at ({:.0}, {:.0})", position.x, position.y);
    player
}

pub fn spawn_projectile(
    commands: &mut Commands,
    position: Vec2,
    facing: Facing,
    tuning: &PlayerTuning,
) -> Entity {
    let radius = tuning.projectile_size * 0.5;

    commands
        .spawn((
            Projectile,
            facing,
            LevelEntity,
            Sprite {
                color: Color::srgb(1.0, 0.9, 0.4),
                custom_size: Some(Vec2::splat(tuning.projectile_size)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 2.0),
            DespawnOutsideView {
                margin: tuning.projectile_view_margin,
            },
            (
                RigidBody::Dynamic,
                Collider::circle(radius),
                Sensor,
                Mass(1.0),
                GravityScale(0.0),
                LinearVelocity(projectile_velocity(facing, tuning.projectile_speed)),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Projectile,
                    [GameLayer::Enemy, GameLayer::Platform],
                ),
            ),
        ))
        .id()
}

//! Level domain: building a level from its loaded map.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::enemies::{EnemyKind, EnemyTuning, spawn_flame, spawn_guy};
use crate::level::components::{FlyerSpawner, LevelCollider, LevelEntity};
use crate::level::resources::{CameraTuning, LevelBounds};
use crate::map::{ColliderRole, LevelMap, map_to_world};
use crate::movement::GameLayer;
use crate::player::{PlayerTuning, spawn_player};

const PLATFORM_COLOR: Color = Color::srgb(0.35, 0.4, 0.35);
const EXIT_COLOR: Color = Color::srgba(0.95, 0.85, 0.3, 0.6);

/// Spawn platforms and exits. Platforms are solid static bodies; exits are
/// static sensors that only report player contact.
pub fn spawn_geometry(commands: &mut Commands, map: &LevelMap, scale: f32) {
    let platform_layers = CollisionLayers::new(
        GameLayer::Platform,
        [
            GameLayer::Player,
            GameLayer::Enemy,
            GameLayer::Projectile,
        ],
    );
    let exit_layers = CollisionLayers::new(GameLayer::Exit, [GameLayer::Player]);

    for collider in &map.colliders {
        let (center, size) = collider.world_rect(scale);
        let color = match collider.role {
            ColliderRole::Platform => PLATFORM_COLOR,
            ColliderRole::Exit => EXIT_COLOR,
        };

        let mut entity = commands.spawn((
            LevelCollider,
            LevelEntity,
            collider.role,
            Name::new(collider.name.clone()),
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));

        if collider.is_static {
            entity.insert(platform_layers);
        } else {
            entity.insert((Sensor, CollisionEventsEnabled, exit_layers));
        }
    }
}

/// Lift a spawn point so the body's feet rest on it.
fn standing_at(point: Vec2, scale: f32, height: f32) -> Vec2 {
    map_to_world(point, scale) + Vec2::new(0.0, height * 0.5)
}

/// Spawn the player, ground enemies and flyer spawners. Returns the bounds
/// the rest of the level runs with, or `None` without a player spawn.
pub fn spawn_actors(
    commands: &mut Commands,
    map: &LevelMap,
    scale: f32,
    player_tuning: &PlayerTuning,
    enemy_tuning: &EnemyTuning,
    camera_tuning: &CameraTuning,
) -> Option<LevelBounds> {
    let player_point = map.player_spawn()?;
    let player_position = standing_at(player_point, scale, player_tuning.body_size[1]);
    spawn_player(commands, player_position, player_tuning);

    let body_height = enemy_tuning.body_size[1];
    for point in map.spawns(EnemyKind::Flame.spawn_group()) {
        spawn_flame(commands, standing_at(*point, scale, body_height), enemy_tuning);
    }
    for point in map.spawns(EnemyKind::Guy.spawn_group()) {
        spawn_guy(commands, standing_at(*point, scale, body_height), enemy_tuning);
    }
    for point in map.spawns(EnemyKind::Bird.spawn_group()) {
        commands.spawn((
            FlyerSpawner::new(map_to_world(*point, scale), enemy_tuning.flyer_spawn_interval),
            LevelEntity,
        ));
    }

    let left_edge = map
        .colliders
        .iter()
        .map(|collider| collider.position.x * scale)
        .reduce(f32::min)
        .unwrap_or(0.0);

    Some(LevelBounds {
        scale,
        left_edge,
        camera_y: player_position.y + camera_tuning.offset_y,
    })
}

//! Level domain: load, spawn, teardown, flow and camera systems.

use std::path::Path;

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{ExitReachedEvent, GameState, RestartLevelEvent};
use crate::enemies::{EnemyTuning, spawn_bird};
use crate::input::ActionState;
use crate::level::camera::camera_follow_x;
use crate::level::components::{FlyerSpawner, LevelEntity};
use crate::level::resources::{
    CameraTuning, LevelBounds, LevelCatalog, LevelDef, LevelRng, LevelSession,
};
use crate::level::spawn::{spawn_actors, spawn_geometry};
use crate::map::{LevelMap, MapLoadError, load_map};
use crate::movement::{DespawnOutsideView, has_left_view};
use crate::player::{Player, PlayerTuning};

/// Load a level's map and check it can be started.
pub fn load_level_map(def: &LevelDef) -> Result<LevelMap, MapLoadError> {
    let map = load_map(Path::new(&def.map_path))?;
    if map.player_spawn().is_none() {
        return Err(MapLoadError::MissingSpawn {
            path: def.map_path.clone(),
            group: "player".to_string(),
        });
    }
    Ok(map)
}

/// Single load attempt for the current level. Held input is dropped so keys
/// held across a restart do not leak into the new level.
pub(crate) fn load_current_level(
    catalog: Res<LevelCatalog>,
    mut session: ResMut<LevelSession>,
    mut actions: ResMut<ActionState>,
    mut rng: ResMut<LevelRng>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    actions.reset();
    session.map = None;

    let Some(def) = catalog.get(session.index) else {
        let message = format!("No level at index {}", session.index);
        error!("[LEVEL] {}", message);
        session.last_error = Some(message);
        next_state.set(GameState::LoadFailed);
        return;
    };

    match load_level_map(def) {
        Ok(map) => {
            info!(
                "[LEVEL] Loaded '{}' ({} colliders, {} spawn groups)",
                def.name,
                map.colliders.len(),
                map.spawn_points.len()
            );
            rng.reseed(session.index);
            session.map = Some(map);
            session.last_error = None;
            next_state.set(GameState::Playing);
        }
        Err(err) => {
            error!("[LEVEL] {}", err);
            session.last_error = Some(err.to_string());
            next_state.set(GameState::LoadFailed);
        }
    }
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    session: Res<LevelSession>,
    catalog: Res<LevelCatalog>,
    player_tuning: Res<PlayerTuning>,
    enemy_tuning: Res<EnemyTuning>,
    camera_tuning: Res<CameraTuning>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let (Some(map), Some(def)) = (session.map.as_ref(), catalog.get(session.index)) else {
        error!("[LEVEL] Entered Playing without a loaded level");
        next_state.set(GameState::Loading);
        return;
    };

    spawn_geometry(&mut commands, map, def.scale);
    let Some(bounds) = spawn_actors(
        &mut commands,
        map,
        def.scale,
        &player_tuning,
        &enemy_tuning,
        &camera_tuning,
    ) else {
        error!("[LEVEL] '{}' has no player spawn", def.name);
        return;
    };

    if let Ok(mut camera) = camera_query.single_mut() {
        let start_x = map.player_spawn().unwrap_or_default().x * def.scale;
        camera.translation.x = start_x + camera_tuning.offset_x;
        camera.translation.y = bounds.camera_y;
    }

    commands.insert_resource(bounds);
    info!("[LEVEL] Started '{}'", def.name);
}

pub(crate) fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    let mut count = 0;
    for entity in &query {
        commands.entity(entity).despawn();
        count += 1;
    }
    debug!("[LEVEL] Despawned {} level entities", count);
}

/// Restart wins over exit when both arrive in the same frame.
pub(crate) fn handle_level_events(
    mut restarts: MessageReader<RestartLevelEvent>,
    mut exits: MessageReader<ExitReachedEvent>,
    catalog: Res<LevelCatalog>,
    mut session: ResMut<LevelSession>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let restart = restarts.read().last().map(|event| event.reason);
    let exited = exits.read().count() > 0;

    if let Some(reason) = restart {
        info!("[LEVEL] Restarting level {} ({:?})", session.index, reason);
        next_state.set(GameState::Loading);
    } else if exited {
        let next = catalog.next_index(session.index);
        info!("[LEVEL] Exit reached, advancing to level {}", next);
        session.index = next;
        next_state.set(GameState::Loading);
    }
}

pub(crate) fn tick_flyer_spawners(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<EnemyTuning>,
    mut rng: ResMut<LevelRng>,
    mut query: Query<&mut FlyerSpawner>,
) {
    let dt = time.delta_secs();

    for mut spawner in &mut query {
        for _ in 0..spawner.tick(dt) {
            let Some(speed) = rng.pick_flyer_speed(&tuning.flyer_speeds) else {
                warn!("No flyer speeds configured, skipping flyer spawn");
                continue;
            };
            spawn_bird(&mut commands, spawner.position, speed, &tuning);
            debug!("Spawned flyer at speed {}", speed);
        }
    }
}

pub(crate) fn follow_camera(
    bounds: Res<LevelBounds>,
    tuning: Res<CameraTuning>,
    player_query: Query<&Transform, With<Player>>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };

    camera.translation.x = camera_follow_x(
        player.translation.x,
        camera.translation.x,
        bounds.left_edge,
        tuning.follow_limit * bounds.scale,
        tuning.offset_x,
    );
    camera.translation.y = bounds.camera_y;
}

pub(crate) fn despawn_outside_view(
    mut commands: Commands,
    tuning: Res<CameraTuning>,
    camera_query: Query<&Transform, With<Camera2d>>,
    query: Query<(Entity, &Transform, &LinearVelocity, &DespawnOutsideView)>,
) {
    let Ok(camera) = camera_query.single() else {
        return;
    };

    for (entity, transform, velocity, despawn) in &query {
        if has_left_view(
            transform.translation.x,
            velocity.x,
            camera.translation.x,
            tuning.view_half_width,
            despawn.margin,
        ) {
            trace!("{:?} left the view", entity);
            commands.entity(entity).despawn();
        }
    }
}

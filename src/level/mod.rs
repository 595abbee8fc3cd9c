//! Level domain: level catalog, load flow, spawning, camera follow and teardown.

mod camera;
mod components;
mod resources;
mod spawn;
mod systems;
mod ui;

pub use camera::camera_follow_x;
pub use components::{FlyerSpawner, LevelCollider, LevelEntity, LoadErrorUI};
pub use resources::{CameraTuning, LevelBounds, LevelCatalog, LevelDef, LevelRng, LevelSession};
pub use spawn::{spawn_actors, spawn_geometry};
pub use systems::load_level_map;

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::core::{GameSet, GameState};
use crate::level::systems::{
    cleanup_level, despawn_outside_view, follow_camera, handle_level_events,
    load_current_level, spawn_level, tick_flyer_spawners,
};
use crate::level::ui::spawn_load_error_ui;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        let seed = app
            .world()
            .get_resource::<GameConfig>()
            .and_then(|config| config.seed);
        let rng = LevelRng::new(seed);
        info!("[LEVEL] Level seed {}", rng.base_seed());

        app.init_resource::<LevelCatalog>()
            .init_resource::<CameraTuning>()
            .init_resource::<LevelSession>()
            .init_resource::<LevelBounds>()
            .insert_resource(rng)
            .add_systems(OnEnter(GameState::Loading), load_current_level)
            .add_systems(OnEnter(GameState::Playing), spawn_level)
            .add_systems(OnExit(GameState::Playing), cleanup_level)
            .add_systems(OnEnter(GameState::LoadFailed), spawn_load_error_ui)
            .add_systems(Update, tick_flyer_spawners.in_set(GameSet::Enemies))
            .add_systems(
                Update,
                (follow_camera, despawn_outside_view)
                    .chain()
                    .in_set(GameSet::Presentation),
            )
            .add_systems(Update, handle_level_events.in_set(GameSet::Flow));
    }
}

//! Enemies domain: hopper, patroller and flyer behaviour plus the inhale pull.

mod brain;
mod components;
mod inhale;
mod resources;
mod spawn;
mod systems;

pub use brain::{HopperAction, HopperBrain, HopperState, PatrolBrain, PatrolState};
pub use components::{Enemy, EnemyKind, Flyer, Inhalable};
pub use inhale::inhale_pull_velocity;
pub use resources::EnemyTuning;
pub use spawn::{spawn_bird, spawn_flame, spawn_guy};
pub(crate) use systems::resolve_projectile_hits;

use bevy::prelude::*;

use crate::core::GameSet;
use crate::enemies::systems::{
    move_flyers, pull_inhalable_enemies, track_inhalable, update_hoppers, update_patrollers,
};

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .add_systems(
                Update,
                (
                    (update_hoppers, update_patrollers, move_flyers),
                    pull_inhalable_enemies,
                )
                    .chain()
                    .in_set(GameSet::Enemies),
            )
            // Player contact resolution is ordered after these
            .add_systems(
                Update,
                (track_inhalable, resolve_projectile_hits)
                    .chain()
                    .in_set(GameSet::Contacts),
            );
    }
}

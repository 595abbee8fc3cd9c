//! Core domain: game state, frame ordering, level-flow events and deferred tasks.

mod contacts;
mod deferred;
mod events;
mod state;
mod systems;
#[cfg(test)]
mod tests;

pub use contacts::ordered_pair;
pub use deferred::DeferredTasks;
pub use events::{ExitReachedEvent, RestartLevelEvent, RestartReason};
pub use state::{GameSet, GameState};

use bevy::prelude::*;

use crate::core::systems::setup_camera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_message::<RestartLevelEvent>()
            .add_message::<ExitReachedEvent>()
            .configure_sets(Update, GameSet::Input.before(GameSet::Sense))
            .configure_sets(
                Update,
                (
                    GameSet::Sense,
                    GameSet::Player,
                    GameSet::Enemies,
                    GameSet::Contacts,
                    GameSet::Presentation,
                    GameSet::Flow,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, setup_camera);
    }
}

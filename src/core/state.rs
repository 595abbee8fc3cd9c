//! Core domain: game state definitions and per-frame system ordering.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Fetching and validating the current level's map
    #[default]
    Loading,
    Playing,
    /// Map data could not be loaded; the level is never entered
    LoadFailed,
}

/// Fixed order of one update: input is read first, then every entity acts,
/// then collisions are resolved, then derived state is presented.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Raw keyboard messages into action intents. Runs in every state.
    Input,
    /// Ground probes
    Sense,
    Player,
    Enemies,
    /// Collision start/end handling
    Contacts,
    /// Attachments, flashes, deferred tasks, camera
    Presentation,
    /// Restart and level advance
    Flow,
}

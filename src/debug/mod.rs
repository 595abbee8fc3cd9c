//! Dev tools: an F1 info overlay and level hotkeys.

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameSet;
use crate::debug::systems::{handle_level_hotkeys, toggle_debug_info, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_debug_info, update_debug_info_overlay).chain())
            .add_systems(Update, handle_level_hotkeys.in_set(GameSet::Player));
    }
}

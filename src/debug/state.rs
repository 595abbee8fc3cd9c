//! Debug domain: overlay state.

use bevy::prelude::*;

/// Resource tracking dev-tools state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the player/level info overlay is shown
    pub show_info: bool,
}

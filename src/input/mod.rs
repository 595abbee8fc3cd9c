//! Input domain: key-to-action tracking decoupled from key repeat.

mod action;
mod events;
mod systems;

pub use action::{Action, ActionState, HoldPolicy, InputConfig, is_jump_key};
pub use events::JumpPressed;

use bevy::prelude::*;

use crate::core::GameSet;
use crate::input::systems::track_action_keys;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        let policy = app
            .world()
            .get_resource::<InputConfig>()
            .map(|config| config.hold_policy)
            .unwrap_or_default();

        app.insert_resource(ActionState::with_policy(policy))
            .add_message::<JumpPressed>()
            .add_systems(Update, track_action_keys.in_set(GameSet::Input));
    }
}

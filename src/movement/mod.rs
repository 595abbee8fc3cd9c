//! Movement domain: physics layers, facing, ground probes and attachments.

mod components;
mod resources;
mod systems;

pub use components::{Attached, DespawnOutsideView, Facing, GameLayer, Grounded, has_left_view};
pub use resources::PhysicsTuning;

use bevy::prelude::*;

use crate::core::GameSet;
use crate::movement::systems::{detect_ground, sync_attachments, sync_sprite_facing};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhysicsTuning>()
            .add_systems(Update, detect_ground.in_set(GameSet::Sense))
            .add_systems(
                Update,
                (sync_attachments, sync_sprite_facing).in_set(GameSet::Presentation),
            );
    }
}

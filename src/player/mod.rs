//! Player domain: movement, double jump, inhale and spit, damage and death.

mod components;
mod resources;
mod rules;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    ContactOutcome, DamageFlash, InhaleChange, InhaleEffect, InhaleZone, JumpCharges, Player,
    PlayerAnimation, PlayerState, Projectile, flash_alpha,
};
pub use resources::PlayerTuning;
pub use rules::{has_fallen_out, horizontal_intent, projectile_velocity};
pub use spawn::{spawn_player, spawn_projectile};

use bevy::prelude::*;

use crate::core::{DeferredTasks, GameSet};
use crate::enemies::resolve_projectile_hits;
use crate::player::systems::{
    apply_player_movement, apply_player_tint, check_fall_out, handle_jump,
    refill_jump_charges, resolve_player_contacts, run_deferred_animations, sync_inhale_effect,
    tick_damage_flash, update_inhale,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<DeferredTasks<PlayerAnimation>>()
            .add_systems(
                Update,
                (
                    refill_jump_charges,
                    handle_jump,
                    apply_player_movement,
                    update_inhale,
                )
                    .chain()
                    .in_set(GameSet::Player),
            )
            // The sync point after projectile hits applies their despawns
            // before any player contact is read
            .add_systems(
                Update,
                (resolve_player_contacts, check_fall_out)
                    .chain()
                    .after(resolve_projectile_hits)
                    .in_set(GameSet::Contacts),
            )
            .add_systems(
                Update,
                (
                    run_deferred_animations,
                    tick_damage_flash,
                    apply_player_tint,
                    sync_inhale_effect,
                )
                    .chain()
                    .in_set(GameSet::Presentation),
            );
    }
}

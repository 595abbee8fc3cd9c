//! Enemies domain: per-frame behaviour and enemy-side contacts.

use std::collections::HashSet;

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::ordered_pair;
use crate::enemies::brain::{HopperAction, HopperBrain, PatrolBrain};
use crate::enemies::components::{Enemy, Flyer, Inhalable};
use crate::enemies::inhale::inhale_pull_velocity;
use crate::enemies::resources::EnemyTuning;
use crate::map::ColliderRole;
use crate::movement::{Facing, Grounded};
use crate::player::{InhaleZone, Player, PlayerState, Projectile};

pub(crate) fn update_hoppers(
    time: Res<Time>,
    tuning: Res<EnemyTuning>,
    mut query: Query<(Entity, &mut HopperBrain, &Grounded, &mut LinearVelocity), With<Enemy>>,
) {
    let dt = time.delta_secs();

    for (entity, mut brain, grounded, mut velocity) in &mut query {
        // Hoppers never walk; only the inhale pull moves them sideways
        velocity.x = 0.0;

        if let Some(HopperAction::Jump) = brain.tick(dt, grounded.0) {
            velocity.y = tuning.hopper_jump_velocity;
            trace!("{:?} hops", entity);
        }
    }
}

pub(crate) fn update_patrollers(
    time: Res<Time>,
    tuning: Res<EnemyTuning>,
    mut query: Query<(&mut PatrolBrain, &mut Facing, &mut LinearVelocity), With<Enemy>>,
) {
    let dt = time.delta_secs();

    for (mut brain, mut facing, mut velocity) in &mut query {
        if brain.tick(dt).is_some()
            && let Some(next) = brain.facing()
        {
            *facing = next;
        }
        velocity.x = brain.velocity_x(tuning.patrol_speed);
    }
}

pub(crate) fn move_flyers(mut query: Query<(&Flyer, &mut LinearVelocity)>) {
    for (flyer, mut velocity) in &mut query {
        velocity.x = -flyer.speed;
        velocity.y = 0.0;
    }
}

/// While the player inhales, every enemy inside the zone is dragged towards
/// the player. Runs after the brains so it overrides their horizontal motion.
pub(crate) fn pull_inhalable_enemies(
    tuning: Res<EnemyTuning>,
    player_query: Query<(&PlayerState, &Facing), With<Player>>,
    mut enemy_query: Query<(&Inhalable, &mut LinearVelocity), With<Enemy>>,
) {
    let Ok((state, facing)) = player_query.single() else {
        return;
    };
    if !state.is_inhaling {
        return;
    }

    let pull = inhale_pull_velocity(*facing, tuning.inhale_pull_speed);
    for (inhalable, mut velocity) in &mut enemy_query {
        if inhalable.0 {
            velocity.x = pull;
        }
    }
}

pub(crate) fn track_inhalable(
    mut collision_starts: MessageReader<CollisionStart>,
    mut collision_ends: MessageReader<CollisionEnd>,
    zones: Query<(), With<InhaleZone>>,
    mut enemies: Query<&mut Inhalable, With<Enemy>>,
) {
    for event in collision_starts.read() {
        let Some((_, enemy)) = ordered_pair(
            event.collider1,
            event.collider2,
            |e| zones.contains(e),
            |e| enemies.contains(e),
        ) else {
            continue;
        };
        if let Ok(mut inhalable) = enemies.get_mut(enemy) {
            inhalable.0 = true;
        }
    }

    for event in collision_ends.read() {
        let Some((_, enemy)) = ordered_pair(
            event.collider1,
            event.collider2,
            |e| zones.contains(e),
            |e| enemies.contains(e),
        ) else {
            continue;
        };
        if let Ok(mut inhalable) = enemies.get_mut(enemy) {
            inhalable.0 = false;
        }
    }
}

/// A projectile destroys the first enemy it touches along with itself, and
/// breaks on terrain.
pub(crate) fn resolve_projectile_hits(
    mut commands: Commands,
    mut collision_starts: MessageReader<CollisionStart>,
    projectiles: Query<(), With<Projectile>>,
    enemies: Query<(), With<Enemy>>,
    terrain: Query<&ColliderRole>,
) {
    let mut destroyed = HashSet::new();

    for event in collision_starts.read() {
        if let Some((projectile, enemy)) = ordered_pair(
            event.collider1,
            event.collider2,
            |e| projectiles.contains(e),
            |e| enemies.contains(e),
        ) {
            if destroyed.contains(&projectile) || destroyed.contains(&enemy) {
                continue;
            }
            debug!("Projectile {:?} destroyed enemy {:?}", projectile, enemy);
            commands.entity(enemy).despawn();
            commands.entity(projectile).despawn();
            destroyed.insert(enemy);
            destroyed.insert(projectile);
            continue;
        }

        let hit_platform = ordered_pair(
            event.collider1,
            event.collider2,
            |e| projectiles.contains(e),
            |e| terrain.get(e).is_ok_and(|role| *role == ColliderRole::Platform),
        );
        if let Some((projectile, _)) = hit_platform
            && destroyed.insert(projectile)
        {
            commands.entity(projectile).despawn();
        }
    }
}

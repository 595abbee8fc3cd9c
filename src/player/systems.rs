//! Player domain: per-frame intent, inhale, contacts and presentation.

use std::collections::HashSet;

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{
    DeferredTasks, ExitReachedEvent, RestartLevelEvent, RestartReason, ordered_pair,
};
use crate::enemies::{Enemy, Inhalable};
use crate::input::{Action, ActionState, JumpPressed};
use crate::level::LevelBounds;
use crate::map::ColliderRole;
use crate::movement::{Attached, Facing, Grounded};
use crate::player::components::{
    ContactOutcome, DamageFlash, InhaleChange, InhaleEffect, JumpCharges, Player,
    PlayerAnimation, PlayerState,
};
use crate::player::resources::PlayerTuning;
use crate::player::rules::{has_fallen_out, horizontal_intent};
use crate::player::spawn::spawn_projectile;

pub(crate) fn refill_jump_charges(
    mut query: Query<(&Grounded, &LinearVelocity, &mut JumpCharges), With<Player>>,
) {
    for (grounded, velocity, mut charges) in &mut query {
        // Still rising off the ground on the jump frame
        if grounded.0 && velocity.y <= 1.0 {
            charges.refill();
        }
    }
}

pub(crate) fn handle_jump(
    mut jumps: MessageReader<JumpPressed>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&mut JumpCharges, &mut LinearVelocity), With<Player>>,
) {
    for _ in jumps.read() {
        for (mut charges, mut velocity) in &mut query {
            if charges.try_consume() {
                velocity.y = tuning.jump_velocity;
                debug!("Jump, {} charges left", charges.remaining);
            }
        }
    }
}

pub(crate) fn apply_player_movement(
    actions: Res<ActionState>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&mut Facing, &mut LinearVelocity), With<Player>>,
) {
    for (mut facing, mut velocity) in &mut query {
        let (direction, next_facing) = horizontal_intent(&actions, *facing);
        velocity.x = direction * tuning.move_speed;
        if *facing != next_facing {
            *facing = next_facing;
        }
    }
}

pub(crate) fn update_inhale(
    mut commands: Commands,
    actions: Res<ActionState>,
    tuning: Res<PlayerTuning>,
    mut deferred: ResMut<DeferredTasks<PlayerAnimation>>,
    mut query: Query<
        (Entity, &Transform, &Facing, &mut PlayerState, &mut PlayerAnimation),
        With<Player>,
    >,
) {
    let held = actions.is_held(Action::Inhale);

    for (entity, transform, facing, mut state, mut animation) in &mut query {
        match state.update_inhale(held) {
            Some(InhaleChange::Started) => *animation = PlayerAnimation::Inhaling,
            Some(InhaleChange::Stopped) => *animation = PlayerAnimation::Idle,
            Some(InhaleChange::Spit) => {
                let mouth = transform.translation.truncate()
                    + Vec2::new(facing.sign() * tuning.body_size[0], 0.0);
                spawn_projectile(&mut commands, mouth, *facing, &tuning);
                *animation = PlayerAnimation::Inhaling;
                deferred.schedule(entity, tuning.spit_recover_secs, PlayerAnimation::Idle);
                debug!("Spat projectile facing {:?}", facing);
            }
            None => {}
        }
    }
}

pub(crate) fn resolve_player_contacts(
    mut commands: Commands,
    mut collision_starts: MessageReader<CollisionStart>,
    mut player_query: Query<
        (Entity, &mut PlayerState, &mut DamageFlash, &mut PlayerAnimation),
        With<Player>,
    >,
    enemies: Query<&Inhalable, With<Enemy>>,
    roles: Query<&ColliderRole>,
    mut restarts: MessageWriter<RestartLevelEvent>,
    mut exits: MessageWriter<ExitReachedEvent>,
) {
    let Ok((player, mut state, mut flash, mut animation)) = player_query.single_mut() else {
        collision_starts.clear();
        return;
    };

    let mut consumed = HashSet::new();
    let mut exit_reached = false;

    for event in collision_starts.read() {
        let is_player = |e: Entity| e == player;

        if let Some((_, enemy)) =
            ordered_pair(event.collider1, event.collider2, is_player, |e| {
                enemies.contains(e)
            })
        {
            if consumed.contains(&enemy) {
                continue;
            }
            let inhalable = enemies.get(enemy).is_ok_and(|i| i.0);

            match state.on_enemy_contact(inhalable) {
                ContactOutcome::Consumed => {
                    debug!("Consumed enemy {:?}", enemy);
                    commands.entity(enemy).despawn();
                    consumed.insert(enemy);
                    *animation = PlayerAnimation::Full;
                }
                ContactOutcome::Hurt { remaining } => {
                    flash.start();
                    info!("Player hit, health {}", remaining);
                }
                ContactOutcome::Died => {
                    info!("Player died");
                    commands.entity(player).despawn();
                    restarts.write(RestartLevelEvent {
                        reason: RestartReason::Died,
                    });
                    return;
                }
            }
            continue;
        }

        let touched_exit = ordered_pair(event.collider1, event.collider2, is_player, |e| {
            roles.get(e).is_ok_and(|role| *role == ColliderRole::Exit)
        });
        if touched_exit.is_some() && !exit_reached {
            exit_reached = true;
            exits.write(ExitReachedEvent);
        }
    }
}

pub(crate) fn check_fall_out(
    mut commands: Commands,
    bounds: Res<LevelBounds>,
    tuning: Res<PlayerTuning>,
    query: Query<(Entity, &Transform), With<Player>>,
    mut restarts: MessageWriter<RestartLevelEvent>,
) {
    for (entity, transform) in &query {
        if has_fallen_out(transform.translation.y, bounds.scale, tuning.fall_threshold) {
            info!("Player fell out of the level");
            commands.entity(entity).despawn();
            restarts.write(RestartLevelEvent {
                reason: RestartReason::FellOut,
            });
        }
    }
}

pub(crate) fn run_deferred_animations(
    time: Res<Time>,
    mut deferred: ResMut<DeferredTasks<PlayerAnimation>>,
    mut query: Query<&mut PlayerAnimation>,
) {
    for task in deferred.tick(time.delta_secs()) {
        match query.get_mut(task.target) {
            Ok(mut animation) => *animation = task.action,
            Err(_) => debug!("Deferred animation target {:?} is gone", task.target),
        }
    }
}

pub(crate) fn tick_damage_flash(time: Res<Time>, mut query: Query<&mut DamageFlash>) {
    let dt = time.delta_secs();
    for mut flash in &mut query {
        if flash.is_flashing() {
            flash.tick(dt);
        }
    }
}

pub(crate) fn apply_player_tint(
    mut query: Query<(&PlayerAnimation, &DamageFlash, &mut Sprite), With<Player>>,
) {
    for (animation, flash, mut sprite) in &mut query {
        sprite.color = animation.color().with_alpha(flash.alpha());
    }
}

pub(crate) fn sync_inhale_effect(
    players: Query<&PlayerState, With<Player>>,
    mut effects: Query<(&Attached, &mut Visibility), With<InhaleEffect>>,
) {
    for (attached, mut visibility) in &mut effects {
        let inhaling = players.get(attached.owner).is_ok_and(|state| state.is_inhaling);
        let next = if inhaling {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if *visibility != next {
            *visibility = next;
        }
    }
}

//! Player domain: tests for inhale, contacts, jumps, flashes and movement rules.

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::ecs::schedule::ExecutorKind;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::{resolve_player_contacts, update_inhale};
use super::{
    ContactOutcome, DamageFlash, InhaleChange, JumpCharges, Player, PlayerAnimation,
    PlayerState, PlayerTuning, Projectile, flash_alpha, has_fallen_out, horizontal_intent,
    projectile_velocity,
};
use crate::core::{DeferredTasks, ExitReachedEvent, RestartLevelEvent};
use crate::enemies::{Enemy, Inhalable, resolve_projectile_hits};
use crate::input::{ActionState, HoldPolicy};
use crate::map::ColliderRole;
use crate::movement::Facing;

fn contact_world() -> World {
    let mut world = World::new();
    world.init_resource::<Messages<CollisionStart>>();
    world.init_resource::<Messages<RestartLevelEvent>>();
    world.init_resource::<Messages<ExitReachedEvent>>();
    world
}

fn touch(world: &mut World, a: Entity, b: Entity) {
    world.write_message(CollisionStart {
        collider1: a,
        collider2: b,
        body1: Some(a),
        body2: Some(b),
    });
}

fn spawn_test_player(world: &mut World, state: PlayerState) -> Entity {
    world
        .spawn((Player, state, DamageFlash::new(0.05), PlayerAnimation::Idle))
        .id()
}

fn inhaling_player() -> PlayerState {
    let mut state = PlayerState::new(3);
    state.update_inhale(true);
    state
}

fn spit_world(facing: Facing) -> World {
    let mut world = World::new();
    world.init_resource::<ActionState>();
    world.init_resource::<PlayerTuning>();
    world.init_resource::<DeferredTasks<PlayerAnimation>>();

    let mut state = PlayerState::new(3);
    state.is_full = true;
    state.inhale_held = true;
    world.spawn((
        Player,
        Transform::default(),
        facing,
        state,
        PlayerAnimation::Full,
    ));
    world
}

fn projectile_speeds(world: &mut World) -> Vec<f32> {
    let mut query = world.query_filtered::<&LinearVelocity, With<Projectile>>();
    query.iter(world).map(|velocity| velocity.x).collect()
}

#[test]
fn test_holding_inhale_starts_inhaling_once() {
    let mut state = PlayerState::new(3);

    assert_eq!(state.update_inhale(true), Some(InhaleChange::Started));
    assert!(state.is_inhaling);
    assert_eq!(state.update_inhale(true), None);
    assert!(state.is_inhaling);
}

#[test]
fn test_releasing_while_empty_stops_inhaling() {
    let mut state = PlayerState::new(3);
    state.update_inhale(true);

    assert_eq!(state.update_inhale(false), Some(InhaleChange::Stopped));
    assert!(!state.is_inhaling);
    assert_eq!(state.update_inhale(false), None);
}

#[test]
fn test_inhale_then_consume() {
    let mut state = PlayerState::new(3);
    state.update_inhale(true);

    assert_eq!(state.on_enemy_contact(true), ContactOutcome::Consumed);
    assert!(state.is_full);
    assert!(!state.is_inhaling);
    assert_eq!(state.health, 3);

    // Still holding while full does not restart inhaling
    assert_eq!(state.update_inhale(true), None);
    assert!(!state.is_inhaling);
}

#[test]
fn test_release_while_full_spits_once() {
    let mut state = PlayerState::new(3);
    state.update_inhale(true);
    state.on_enemy_contact(true);

    assert_eq!(state.update_inhale(false), Some(InhaleChange::Spit));
    assert!(!state.is_full);
    assert_eq!(state.update_inhale(false), None);
}

#[test]
fn test_contact_with_non_inhalable_enemy_hurts_while_inhaling() {
    let mut state = PlayerState::new(3);
    state.update_inhale(true);

    assert_eq!(state.on_enemy_contact(false), ContactOutcome::Hurt { remaining: 2 });
    assert!(!state.is_full);
}

#[test]
fn test_inhalable_enemy_hurts_when_not_inhaling() {
    let mut state = PlayerState::new(3);
    assert_eq!(state.on_enemy_contact(true), ContactOutcome::Hurt { remaining: 2 });
}

#[test]
fn test_three_hits_kill() {
    let mut state = PlayerState::new(3);

    assert_eq!(state.on_enemy_contact(false), ContactOutcome::Hurt { remaining: 2 });
    assert_eq!(state.on_enemy_contact(false), ContactOutcome::Hurt { remaining: 1 });
    assert_eq!(state.on_enemy_contact(false), ContactOutcome::Died);
    assert_eq!(state.health, 0);
}

#[test]
fn test_projectile_velocity_follows_facing() {
    assert_eq!(projectile_velocity(Facing::Right, 800.0), Vec2::new(800.0, 0.0));
    assert_eq!(projectile_velocity(Facing::Left, 800.0), Vec2::new(-800.0, 0.0));
}

#[test]
fn test_fall_out_threshold_scales_with_level() {
    assert!(!has_fallen_out(-7999.0, 4.0, 2000.0));
    assert!(has_fallen_out(-8001.0, 4.0, 2000.0));
    assert!(has_fallen_out(-2001.0, 1.0, 2000.0));
    assert!(!has_fallen_out(-2001.0, 2.0, 2000.0));
}

#[test]
fn test_jump_charges_allow_double_jump() {
    let mut charges = JumpCharges::new(2);

    assert!(charges.try_consume());
    assert!(charges.try_consume());
    assert!(!charges.try_consume());
    assert_eq!(charges.remaining, 0);

    charges.refill();
    assert_eq!(charges.remaining, 2);
}

#[test]
fn test_flash_alpha_curve() {
    assert_eq!(flash_alpha(0.0, 0.05), 1.0);
    assert!((flash_alpha(0.025, 0.05) - 0.5).abs() < 1e-5);
    assert!(flash_alpha(0.05, 0.05).abs() < 1e-5);
    assert!((flash_alpha(0.075, 0.05) - 0.5).abs() < 1e-5);
    assert_eq!(flash_alpha(0.1, 0.05), 1.0);
}

#[test]
fn test_overlapping_flashes_stack() {
    let mut flash = DamageFlash::new(0.05);
    flash.start();
    flash.tick(0.05);
    flash.start();

    assert_eq!(flash.active(), 2);
    // First sequence at its darkest, second just starting
    assert!(flash.alpha() < 1e-5);

    flash.tick(0.06);
    assert_eq!(flash.active(), 1);
    assert!(flash.is_flashing());

    flash.tick(0.05);
    assert!(!flash.is_flashing());
    assert_eq!(flash.alpha(), 1.0);
}

#[test]
fn test_horizontal_intent_reads_left_then_right() {
    let mut actions = ActionState::with_policy(HoldPolicy::Flat);

    actions.key_down(KeyCode::ArrowLeft);
    assert_eq!(horizontal_intent(&actions, Facing::Right), (-1.0, Facing::Left));

    actions.key_down(KeyCode::KeyD);
    assert_eq!(horizontal_intent(&actions, Facing::Left), (0.0, Facing::Right));

    actions.key_up(KeyCode::ArrowLeft);
    assert_eq!(horizontal_intent(&actions, Facing::Left), (1.0, Facing::Right));
}

#[test]
fn test_no_input_keeps_facing() {
    let actions = ActionState::with_policy(HoldPolicy::Flat);
    assert_eq!(horizontal_intent(&actions, Facing::Left), (0.0, Facing::Left));
}

#[test]
fn test_consuming_an_enemy_despawns_it() {
    let mut world = contact_world();
    let player = spawn_test_player(&mut world, inhaling_player());
    let enemy = world.spawn((Enemy, Inhalable(true))).id();
    touch(&mut world, enemy, player);

    world.run_system_once(resolve_player_contacts).unwrap();

    assert!(world.get_entity(enemy).is_err());
    let state = world.get::<PlayerState>(player).unwrap();
    assert!(state.is_full);
    assert_eq!(state.health, 3);
    assert_eq!(world.get::<PlayerAnimation>(player), Some(&PlayerAnimation::Full));
}

#[test]
fn test_enemy_outside_zone_hurts_and_survives() {
    let mut world = contact_world();
    let player = spawn_test_player(&mut world, inhaling_player());
    let enemy = world.spawn((Enemy, Inhalable(false))).id();
    touch(&mut world, player, enemy);

    world.run_system_once(resolve_player_contacts).unwrap();

    assert!(world.get_entity(enemy).is_ok());
    assert_eq!(world.get::<PlayerState>(player).unwrap().health, 2);
    assert!(world.get::<DamageFlash>(player).unwrap().is_flashing());
}

#[test]
fn test_death_despawns_player_and_requests_restart() {
    let mut world = contact_world();
    let player = spawn_test_player(&mut world, PlayerState::new(1));
    let first = world.spawn((Enemy, Inhalable(false))).id();
    let second = world.spawn((Enemy, Inhalable(false))).id();
    touch(&mut world, player, first);
    touch(&mut world, second, player);

    world.run_system_once(resolve_player_contacts).unwrap();

    assert!(world.get_entity(player).is_err());
    assert_eq!(world.resource::<Messages<RestartLevelEvent>>().len(), 1);
}

#[test]
fn test_exit_is_reported_once_per_frame() {
    let mut world = contact_world();
    let player = spawn_test_player(&mut world, PlayerState::new(3));
    let exit = world.spawn(ColliderRole::Exit).id();
    let ground = world.spawn(ColliderRole::Platform).id();
    touch(&mut world, player, exit);
    touch(&mut world, ground, player);
    touch(&mut world, exit, player);

    world.run_system_once(resolve_player_contacts).unwrap();

    assert_eq!(world.resource::<Messages<ExitReachedEvent>>().len(), 1);
    assert!(world.resource::<Messages<RestartLevelEvent>>().is_empty());
}

#[test]
fn test_spit_spawns_exactly_one_projectile() {
    let mut world = spit_world(Facing::Right);

    world.run_system_once(update_inhale).unwrap();
    assert_eq!(projectile_speeds(&mut world), vec![800.0]);
    assert_eq!(world.resource::<DeferredTasks<PlayerAnimation>>().len(), 1);

    // Released and no longer full: nothing more to spit
    world.run_system_once(update_inhale).unwrap();
    assert_eq!(projectile_speeds(&mut world), vec![800.0]);
}

#[test]
fn test_spit_flies_the_way_the_player_faces() {
    let mut world = spit_world(Facing::Left);
    world.run_system_once(update_inhale).unwrap();
    assert_eq!(projectile_speeds(&mut world), vec![-800.0]);
}

#[test]
fn test_enemy_shot_in_contact_frame_does_not_hurt_player() {
    let mut world = contact_world();
    let player = spawn_test_player(&mut world, PlayerState::new(3));
    let enemy = world.spawn((Enemy, Inhalable(false))).id();
    let projectile = world.spawn(Projectile).id();
    touch(&mut world, projectile, enemy);
    touch(&mut world, enemy, player);

    // Same ordering as the app: player contacts run after projectile hits
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems((
        resolve_projectile_hits,
        resolve_player_contacts.after(resolve_projectile_hits),
    ));
    schedule.run(&mut world);

    assert!(world.get_entity(enemy).is_err());
    assert!(world.get_entity(projectile).is_err());
    let state = world.get::<PlayerState>(player).unwrap();
    assert_eq!(state.health, 3);
    assert!(!world.get::<DamageFlash>(player).unwrap().is_flashing());
}

//! Core domain: tests for deferred task timing.

use bevy::prelude::World;

use super::{DeferredTasks, ordered_pair};

#[test]
fn test_deferred_task_waits_for_delay() {
    let mut world = World::new();
    let target = world.spawn_empty().id();

    let mut tasks = DeferredTasks::<u8>::default();
    tasks.schedule(target, 1.0, 7);

    assert!(tasks.tick(0.5).is_empty());
    assert_eq!(tasks.len(), 1);

    let due = tasks.tick(0.5);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].target, target);
    assert_eq!(due[0].action, 7);
    assert!(tasks.is_empty());
}

#[test]
fn test_deferred_tasks_fire_in_schedule_order() {
    let mut world = World::new();
    let a = world.spawn_empty().id();
    let b = world.spawn_empty().id();

    let mut tasks = DeferredTasks::<&'static str>::default();
    tasks.schedule(a, 0.2, "first");
    tasks.schedule(b, 0.1, "second");
    tasks.schedule(a, 5.0, "later");

    let due = tasks.tick(0.25);
    let actions: Vec<_> = due.iter().map(|t| t.action).collect();
    assert_eq!(actions, vec!["first", "second"]);
    assert_eq!(tasks.len(), 1);
}

#[test]
fn test_deferred_task_target_is_generation_checked() {
    let mut world = World::new();
    let target = world.spawn_empty().id();

    let mut tasks = DeferredTasks::<u8>::default();
    tasks.schedule(target, 1.0, 1);

    world.despawn(target);
    let replacement = world.spawn_empty().id();

    let due = tasks.tick(1.0);
    assert_eq!(due.len(), 1);
    assert_ne!(due[0].target, replacement);
    assert!(world.get_entity(due[0].target).is_err());
}

#[test]
fn test_ordered_pair_matches_either_order() {
    let mut world = World::new();
    let zone = world.spawn_empty().id();
    let enemy = world.spawn_empty().id();
    let other = world.spawn_empty().id();

    let is_zone = |e| e == zone;
    let is_enemy = |e| e == enemy;

    assert_eq!(ordered_pair(zone, enemy, is_zone, is_enemy), Some((zone, enemy)));
    assert_eq!(ordered_pair(enemy, zone, is_zone, is_enemy), Some((zone, enemy)));
    assert_eq!(ordered_pair(zone, other, is_zone, is_enemy), None);
}

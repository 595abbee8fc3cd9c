//! Level domain: markers and spawners owned by a running level.

use bevy::prelude::*;

/// Everything spawned for a level carries this and is despawned on teardown.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct LevelEntity;

/// Static geometry built from the map's collider layer
#[derive(Component, Debug)]
pub struct LevelCollider;

/// Repeating flyer spawn at one `bird` spawn point. The first flyer appears
/// after one full interval.
#[derive(Component, Debug, Clone)]
pub struct FlyerSpawner {
    pub position: Vec2,
    pub interval: f32,
    pub elapsed: f32,
}

impl FlyerSpawner {
    pub fn new(position: Vec2, interval: f32) -> Self {
        Self {
            position,
            interval: interval.max(0.1),
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` and return how many flyers are due.
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.elapsed += dt;
        let mut due = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            due += 1;
        }
        due
    }
}

/// Root of the blocking load-error screen
#[derive(Component, Debug)]
pub struct LoadErrorUI;

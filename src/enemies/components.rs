//! Enemies domain: markers and per-kind components.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Enemy;

/// The three enemy archetypes, each tied to a spawn-point group in the map.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Stationary hopper
    Flame,
    /// Ground patroller
    Guy,
    /// Horizontal flyer
    Bird,
}

impl EnemyKind {
    /// Name of the spawn-point group this kind is placed from
    pub fn spawn_group(self) -> &'static str {
        match self {
            EnemyKind::Flame => "flame",
            EnemyKind::Guy => "guy",
            EnemyKind::Bird => "bird",
        }
    }

    pub fn color(self) -> Color {
        match self {
            EnemyKind::Flame => Color::srgb(0.95, 0.45, 0.1),
            EnemyKind::Guy => Color::srgb(0.55, 0.35, 0.75),
            EnemyKind::Bird => Color::srgb(0.3, 0.7, 0.9),
        }
    }
}

/// True while the enemy overlaps the player's inhale zone.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Inhalable(pub bool);

/// Constant leftward flight speed, picked at spawn time.
#[derive(Component, Debug, Clone, Copy)]
pub struct Flyer {
    pub speed: f32,
}

//! Player domain: components for the player and its attachments.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Result of feeding the inhale intent into `PlayerState::update_inhale`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InhaleChange {
    Started,
    Stopped,
    /// Released while full: exactly one projectile leaves the mouth
    Spit,
}

/// Result of the player touching an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Consumed,
    Hurt { remaining: u32 },
    Died,
}

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub health: u32,
    pub is_inhaling: bool,
    pub is_full: bool,
    /// Inhale intent seen last frame, for release detection
    pub inhale_held: bool,
}

impl PlayerState {
    pub fn new(health: u32) -> Self {
        Self {
            health,
            is_inhaling: false,
            is_full: false,
            inhale_held: false,
        }
    }

    /// Apply this frame's inhale intent.
    pub fn update_inhale(&mut self, held: bool) -> Option<InhaleChange> {
        let was_held = self.inhale_held;
        self.inhale_held = held;

        if held {
            if !self.is_full && !self.is_inhaling {
                self.is_inhaling = true;
                return Some(InhaleChange::Started);
            }
            return None;
        }

        if !was_held {
            return None;
        }

        self.is_inhaling = false;
        if self.is_full {
            self.is_full = false;
            Some(InhaleChange::Spit)
        } else {
            Some(InhaleChange::Stopped)
        }
    }

    /// Touching an enemy either swallows it (inhaling and the enemy is in the
    /// zone) or costs one health.
    pub fn on_enemy_contact(&mut self, enemy_inhalable: bool) -> ContactOutcome {
        if self.is_inhaling && enemy_inhalable {
            self.is_full = true;
            self.is_inhaling = false;
            return ContactOutcome::Consumed;
        }

        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            ContactOutcome::Died
        } else {
            ContactOutcome::Hurt {
                remaining: self.health,
            }
        }
    }
}

/// Jumps available before touching the ground again
#[derive(Component, Debug, Clone, Copy)]
pub struct JumpCharges {
    pub remaining: u32,
    pub max: u32,
}

impl JumpCharges {
    pub fn new(max: u32) -> Self {
        Self { remaining: max, max }
    }

    pub fn try_consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn refill(&mut self) {
        self.remaining = self.max;
    }
}

/// Opacity of one flash at `elapsed`: fades 1 → 0 over `phase`, then 0 → 1
/// over another `phase`.
pub fn flash_alpha(elapsed: f32, phase: f32) -> f32 {
    if phase <= 0.0 || elapsed >= phase * 2.0 {
        1.0
    } else if elapsed < phase {
        1.0 - elapsed / phase
    } else {
        (elapsed - phase) / phase
    }
}

/// Damage flashes in progress. Hits are not guarded by an active flash, so
/// each one adds its own sequence; the lowest alpha wins.
#[derive(Component, Debug, Clone)]
pub struct DamageFlash {
    pub phase_secs: f32,
    sequences: Vec<f32>,
}

impl DamageFlash {
    pub fn new(phase_secs: f32) -> Self {
        Self {
            phase_secs,
            sequences: Vec::new(),
        }
    }

    pub fn start(&mut self) {
        self.sequences.push(0.0);
    }

    pub fn tick(&mut self, dt: f32) {
        let end = self.phase_secs * 2.0;
        for elapsed in &mut self.sequences {
            *elapsed += dt;
        }
        self.sequences.retain(|elapsed| *elapsed < end);
    }

    pub fn is_flashing(&self) -> bool {
        !self.sequences.is_empty()
    }

    pub fn active(&self) -> usize {
        self.sequences.len()
    }

    pub fn alpha(&self) -> f32 {
        self.sequences
            .iter()
            .map(|elapsed| flash_alpha(*elapsed, self.phase_secs))
            .fold(1.0, f32::min)
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerAnimation {
    #[default]
    Idle,
    Inhaling,
    Full,
}

impl PlayerAnimation {
    pub fn color(self) -> Color {
        match self {
            PlayerAnimation::Idle => Color::srgb(1.0, 0.6, 0.75),
            PlayerAnimation::Inhaling => Color::srgb(1.0, 0.45, 0.6),
            PlayerAnimation::Full => Color::srgb(0.9, 0.35, 0.5),
        }
    }
}

/// Sensor in front of the player that marks enemies as inhalable
#[derive(Component, Debug)]
pub struct InhaleZone;

/// Visual shown while inhaling
#[derive(Component, Debug)]
pub struct InhaleEffect;

#[derive(Component, Debug)]
pub struct Projectile;

//! Enemies domain: timed state machines for hoppers and patrollers.
//!
//! Both brains are plain data advanced by `tick`, so the timing rules are
//! testable without a running app.

use bevy::prelude::*;

use crate::movement::Facing;

/// Shortest dwell a state may have; keeps a zero-length config from
/// spinning the transition loop forever.
const MIN_DWELL_SECS: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HopperState {
    #[default]
    Idle,
    Jump,
}

/// Side effect the caller applies when a hopper leaves `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopperAction {
    Jump,
}

/// Waits on the ground, jumps, and waits again once it has landed.
#[derive(Component, Debug, Clone)]
pub struct HopperBrain {
    state: HopperState,
    idle_secs: f32,
    elapsed: f32,
    left_ground: bool,
}

impl HopperBrain {
    pub fn new(idle_secs: f32) -> Self {
        Self {
            state: HopperState::Idle,
            idle_secs: idle_secs.max(MIN_DWELL_SECS),
            elapsed: 0.0,
            left_ground: false,
        }
    }

    pub fn state(&self) -> HopperState {
        self.state
    }

    /// Advance by `dt`. A jump only ends after the body has actually been
    /// airborne, so the frame of the jump impulse does not count as landing.
    pub fn tick(&mut self, dt: f32, grounded: bool) -> Option<HopperAction> {
        match self.state {
            HopperState::Idle => {
                self.elapsed += dt;
                if self.elapsed >= self.idle_secs {
                    self.state = HopperState::Jump;
                    self.elapsed = 0.0;
                    self.left_ground = false;
                    return Some(HopperAction::Jump);
                }
                None
            }
            HopperState::Jump => {
                if !grounded {
                    self.left_ground = true;
                } else if self.left_ground {
                    self.state = HopperState::Idle;
                    self.elapsed = 0.0;
                }
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatrolState {
    #[default]
    Idle,
    Left,
    Right,
}

impl PatrolState {
    fn next(self) -> Self {
        match self {
            PatrolState::Idle => PatrolState::Left,
            PatrolState::Left => PatrolState::Right,
            PatrolState::Right => PatrolState::Left,
        }
    }
}

/// Idles once, then walks left and right forever.
#[derive(Component, Debug, Clone)]
pub struct PatrolBrain {
    state: PatrolState,
    idle_secs: f32,
    walk_secs: f32,
    elapsed: f32,
}

impl PatrolBrain {
    pub fn new(idle_secs: f32, walk_secs: f32) -> Self {
        Self {
            state: PatrolState::Idle,
            idle_secs: idle_secs.max(MIN_DWELL_SECS),
            walk_secs: walk_secs.max(MIN_DWELL_SECS),
            elapsed: 0.0,
        }
    }

    pub fn state(&self) -> PatrolState {
        self.state
    }

    fn dwell(&self) -> f32 {
        match self.state {
            PatrolState::Idle => self.idle_secs,
            PatrolState::Left | PatrolState::Right => self.walk_secs,
        }
    }

    /// Advance by `dt`, carrying overshoot into the next state. Returns the
    /// new state if at least one transition happened.
    pub fn tick(&mut self, dt: f32) -> Option<PatrolState> {
        self.elapsed += dt;
        let mut changed = None;
        while self.elapsed >= self.dwell() {
            self.elapsed -= self.dwell();
            self.state = self.state.next();
            changed = Some(self.state);
        }
        changed
    }

    pub fn velocity_x(&self, speed: f32) -> f32 {
        match self.state {
            PatrolState::Idle => 0.0,
            PatrolState::Left => -speed,
            PatrolState::Right => speed,
        }
    }

    /// Facing implied by the current state; idle keeps whatever it had.
    pub fn facing(&self) -> Option<Facing> {
        match self.state {
            PatrolState::Idle => None,
            PatrolState::Left => Some(Facing::Left),
            PatrolState::Right => Some(Facing::Right),
        }
    }
}

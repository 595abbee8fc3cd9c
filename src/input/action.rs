//! Input domain: actions, key bindings and held-intent state.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// Game actions that persist while a bound key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Inhale,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::MoveLeft, Action::MoveRight, Action::Inhale];

    /// Binding table. Several physical keys may map to one action.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowLeft | KeyCode::KeyA => Some(Action::MoveLeft),
            KeyCode::ArrowRight | KeyCode::KeyD => Some(Action::MoveRight),
            KeyCode::KeyZ | KeyCode::Digit1 => Some(Action::Inhale),
            _ => None,
        }
    }
}

/// Jump is an impulse rather than a held intent.
pub fn is_jump_key(key: KeyCode) -> bool {
    matches!(key, KeyCode::KeyX | KeyCode::Space)
}

/// How releasing one of several keys bound to the same action is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum HoldPolicy {
    /// Any release clears the action, even if another bound key is still down.
    #[default]
    Flat,
    /// The action stays held until every bound key is released.
    RefCounted,
}

#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub hold_policy: HoldPolicy,
}

/// Which actions are currently held, updated only by key-down and key-up.
#[derive(Resource, Debug, Default)]
pub struct ActionState {
    policy: HoldPolicy,
    held: HashMap<Action, HashSet<KeyCode>>,
}

impl ActionState {
    pub fn with_policy(policy: HoldPolicy) -> Self {
        Self {
            policy,
            held: HashMap::new(),
        }
    }

    pub fn policy(&self) -> HoldPolicy {
        self.policy
    }

    pub fn key_down(&mut self, key: KeyCode) {
        let Some(action) = Action::from_key(key) else {
            return;
        };
        self.held.entry(action).or_default().insert(key);
    }

    pub fn key_up(&mut self, key: KeyCode) {
        let Some(action) = Action::from_key(key) else {
            return;
        };
        let Some(keys) = self.held.get_mut(&action) else {
            return;
        };
        match self.policy {
            HoldPolicy::Flat => keys.clear(),
            HoldPolicy::RefCounted => {
                keys.remove(&key);
            }
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.get(&action).is_some_and(|keys| !keys.is_empty())
    }

    /// Drop every held intent, keeping the policy.
    pub fn reset(&mut self) {
        self.held.clear();
    }
}

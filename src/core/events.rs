//! Core domain: events for level flow.

use bevy::ecs::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartReason {
    /// Health ran out
    Died,
    /// Dropped below the level's fall-out line
    FellOut,
}

/// Event fired when the current level must restart from its start state
#[derive(Debug)]
pub struct RestartLevelEvent {
    pub reason: RestartReason,
}

impl Message for RestartLevelEvent {}

/// Event fired when the player touches the level exit
#[derive(Debug)]
pub struct ExitReachedEvent;

impl Message for ExitReachedEvent {}

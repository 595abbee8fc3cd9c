//! Input domain: impulse events.

use bevy::ecs::message::Message;

/// A fresh (non-repeat) press of a jump key
#[derive(Debug)]
pub struct JumpPressed;

impl Message for JumpPressed {}

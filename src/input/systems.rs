//! Input domain: keyboard message sampling.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

use crate::input::{ActionState, JumpPressed, is_jump_key};

/// Fold raw key-down/key-up messages into `ActionState`. OS key repeat is
/// ignored so holding a key is a single down followed by a single up.
pub(crate) fn track_action_keys(
    mut keyboard: MessageReader<KeyboardInput>,
    mut actions: ResMut<ActionState>,
    mut jumps: MessageWriter<JumpPressed>,
) {
    for event in keyboard.read() {
        match event.state {
            ButtonState::Pressed => {
                if event.repeat {
                    continue;
                }
                if is_jump_key(event.key_code) {
                    jumps.write(JumpPressed);
                }
                actions.key_down(event.key_code);
            }
            ButtonState::Released => actions.key_up(event.key_code),
        }
    }
}

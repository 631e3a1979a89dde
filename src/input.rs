//! Translates Bevy window messages into [`InputEvent`]s.
//!
//! Collection runs in `PreUpdate` every frame and only queues events; the
//! fixed-step tick drains [`PendingInput`] so a frame with no fixed step
//! loses nothing.

use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowCloseRequested};

use crate::game::{InputEvent, Key};

/// Input waiting for the next tick, oldest first.
#[derive(Resource, Default, Debug)]
pub struct PendingInput(pub Vec<InputEvent>);

impl PendingInput {
    pub fn push(&mut self, event: InputEvent) {
        self.0.push(event);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.0.drain(..)
    }
}

/// Map a physical key to the keys the game distinguishes.
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyS => Key::S,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        _ => Key::Other,
    }
}

/// Queue close requests, key presses/releases and left clicks.
///
/// Auto-repeat key presses are dropped; a held key produces one `KeyDown`.
pub fn collect_input_system(
    mut close_requests: MessageReader<WindowCloseRequested>,
    mut keys: MessageReader<KeyboardInput>,
    mut mouse: MessageReader<MouseButtonInput>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pending: ResMut<PendingInput>,
) {
    if close_requests.read().count() > 0 {
        pending.push(InputEvent::Quit);
    }

    for key in keys.read() {
        let event = match (key.state, key.repeat) {
            (ButtonState::Pressed, false) => InputEvent::KeyDown(map_key(key.key_code)),
            (ButtonState::Released, _) => InputEvent::KeyUp(map_key(key.key_code)),
            (ButtonState::Pressed, true) => continue,
        };
        pending.push(event);
    }

    let cursor = windows.single().ok().and_then(|w| w.cursor_position());
    for click in mouse.read() {
        if click.button != MouseButton::Left || click.state != ButtonState::Pressed {
            continue;
        }
        if let Some(pos) = cursor {
            pending.push(InputEvent::MouseDown { x: pos.x, y: pos.y });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys_map_to_game_keys() {
        assert_eq!(map_key(KeyCode::KeyW), Key::W);
        assert_eq!(map_key(KeyCode::KeyS), Key::S);
        assert_eq!(map_key(KeyCode::ArrowUp), Key::Up);
        assert_eq!(map_key(KeyCode::ArrowDown), Key::Down);
        assert_eq!(map_key(KeyCode::Space), Key::Other);
    }

    #[test]
    fn pending_input_drains_in_arrival_order() {
        let mut pending = PendingInput::default();
        pending.push(InputEvent::KeyDown(Key::W));
        pending.push(InputEvent::KeyUp(Key::W));
        let drained: Vec<_> = pending.drain().collect();
        assert_eq!(
            drained,
            vec![InputEvent::KeyDown(Key::W), InputEvent::KeyUp(Key::W)]
        );
        assert!(pending.0.is_empty());
    }
}

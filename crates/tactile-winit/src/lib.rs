//! Winit input adapter for tactile
//!
//! Converts winit window events into the [`InputEvent`]s a tactile control
//! consumes. Hit testing is left to the host: the translated events are meant
//! for the control that currently sits under the cursor or holds focus.

use tactile::{InputEvent, Key, NamedKey};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::Key as WinitKey;

/// Extension trait translating a winit `WindowEvent` into control input
pub trait WinitInputExt {
    /// Control input carried by this event, in delivery order
    ///
    /// Most events map to nothing. A key press that produces text maps to a
    /// `KeyDown` followed by a `KeyPress`.
    fn to_input_events(&self) -> Vec<InputEvent>;

    /// Whether the window lost focus, taking input focus from every control
    fn is_focus_lost(&self) -> bool;
}

impl WinitInputExt for WindowEvent {
    fn to_input_events(&self) -> Vec<InputEvent> {
        match self {
            WindowEvent::CursorEntered { .. } => vec![InputEvent::PointerEnter],
            WindowEvent::CursorLeft { .. } => vec![InputEvent::PointerLeave],
            WindowEvent::MouseInput { state, button, .. } => {
                convert_mouse_input(*state, *button).into_iter().collect()
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let key = convert_key(&event.logical_key);
                match event.state {
                    ElementState::Pressed => {
                        let mut events = vec![InputEvent::KeyDown(key)];
                        if let Some(ref text) = event.text {
                            events.push(InputEvent::KeyPress(Key::character(text.as_str())));
                        }
                        events
                    }
                    ElementState::Released => vec![InputEvent::KeyUp(key)],
                }
            }
            _ => Vec::new(),
        }
    }

    fn is_focus_lost(&self) -> bool {
        matches!(self, WindowEvent::Focused(false))
    }
}

/// Convert a mouse button transition to a pointer press or release
///
/// Only the primary button presses controls.
pub fn convert_mouse_input(state: ElementState, button: MouseButton) -> Option<InputEvent> {
    match (button, state) {
        (MouseButton::Left, ElementState::Pressed) => Some(InputEvent::PointerDown),
        (MouseButton::Left, ElementState::Released) => Some(InputEvent::PointerUp),
        _ => None,
    }
}

/// Convert winit Key to tactile Key
pub fn convert_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(named) => convert_named_key(named)
            .map(Key::Named)
            .unwrap_or(Key::Unknown),
        WinitKey::Character(s) => Key::Character(s.to_string()),
        _ => Key::Unknown,
    }
}

/// Convert winit NamedKey to tactile NamedKey
///
/// Keys tactile has no name for map to `None`.
pub fn convert_named_key(key: &winit::keyboard::NamedKey) -> Option<NamedKey> {
    use winit::keyboard::NamedKey as WN;

    let named = match key {
        WN::Enter => NamedKey::Enter,
        WN::Space => NamedKey::Space,
        WN::Escape => NamedKey::Escape,
        WN::Tab => NamedKey::Tab,
        WN::Backspace => NamedKey::Backspace,
        WN::Delete => NamedKey::Delete,
        WN::ArrowLeft => NamedKey::ArrowLeft,
        WN::ArrowRight => NamedKey::ArrowRight,
        WN::ArrowUp => NamedKey::ArrowUp,
        WN::ArrowDown => NamedKey::ArrowDown,
        WN::Home => NamedKey::Home,
        WN::End => NamedKey::End,
        WN::Shift => NamedKey::Shift,
        WN::Control => NamedKey::Control,
        WN::Alt => NamedKey::Alt,
        WN::Super => NamedKey::Super,
        WN::F1 => NamedKey::F(1),
        WN::F2 => NamedKey::F(2),
        WN::F3 => NamedKey::F(3),
        WN::F4 => NamedKey::F(4),
        WN::F5 => NamedKey::F(5),
        WN::F6 => NamedKey::F(6),
        WN::F7 => NamedKey::F(7),
        WN::F8 => NamedKey::F(8),
        WN::F9 => NamedKey::F(9),
        WN::F10 => NamedKey::F(10),
        WN::F11 => NamedKey::F(11),
        WN::F12 => NamedKey::F(12),
        other => {
            log::trace!("unmapped named key {other:?}");
            return None;
        }
    };
    Some(named)
}

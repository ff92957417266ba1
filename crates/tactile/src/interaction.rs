//! Hover/press reducer shared by pressable controls
//!
//! Each function takes the control's [`ControlState`] and returns the
//! [`Effect`]s the control should dispatch, in order. Every transition
//! re-checks `enabled` before setting `hovered` or `pressed`, so a disabled
//! control can never end up hovered or pressed.
//!
//! Activation happens on the release edge only: one completed
//! press/release cycle yields exactly one [`Effect::Activate`], whether it was
//! driven by the pointer or by an activation key.

use crate::{ActivationKey, ControlState, InputEvent, Key};

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The control was triggered
    Activate,
    /// Forward a key-down to the external observer
    KeyDown(Key),
    /// Forward a key-up to the external observer
    KeyUp(Key),
    /// Forward a key-press to the external observer
    KeyPress(Key),
}

/// Apply one input event to the state
pub fn reduce(state: &mut ControlState, event: InputEvent) -> Vec<Effect> {
    let effects = match event {
        InputEvent::PointerEnter => {
            pointer_enter(state);
            Vec::new()
        }
        InputEvent::PointerLeave => {
            pointer_leave(state);
            Vec::new()
        }
        InputEvent::PointerDown => {
            pointer_down(state);
            Vec::new()
        }
        InputEvent::PointerUp => {
            if pointer_up(state) {
                vec![Effect::Activate]
            } else {
                Vec::new()
            }
        }
        InputEvent::KeyDown(key) => key_down(state, key),
        InputEvent::KeyUp(key) => key_up(state, key),
        InputEvent::KeyPress(key) => key_press(state, key),
    };

    state.debug_assert_invariants();
    effects
}

/// Apply one input event to a control that hovers but never presses
///
/// Pointer presses are ignored and activation keys take the pass-through
/// branch, so no [`Effect::Activate`] is ever produced.
pub fn reduce_hover_only(state: &mut ControlState, event: InputEvent) -> Vec<Effect> {
    let effects = match event {
        InputEvent::PointerEnter => {
            pointer_enter(state);
            Vec::new()
        }
        InputEvent::PointerLeave => {
            pointer_leave(state);
            Vec::new()
        }
        InputEvent::PointerDown | InputEvent::PointerUp => Vec::new(),
        InputEvent::KeyDown(key) if state.enabled => vec![Effect::KeyDown(key)],
        InputEvent::KeyUp(key) if state.enabled => vec![Effect::KeyUp(key)],
        InputEvent::KeyPress(key) => key_press(state, key),
        InputEvent::KeyDown(_) | InputEvent::KeyUp(_) => Vec::new(),
    };

    state.debug_assert_invariants();
    effects
}

/// Hover, unless disabled
pub fn pointer_enter(state: &mut ControlState) {
    if state.enabled {
        state.hovered = true;
    }
}

/// Leaving always clears hover
pub fn pointer_leave(state: &mut ControlState) {
    state.hovered = false;
}

/// Start a pointer press, unless disabled
pub fn pointer_down(state: &mut ControlState) {
    if state.enabled {
        log::trace!("pressed by pointer");
        state.pressed = true;
    }
}

/// Returns `true` when the release completes a press
pub fn pointer_up(state: &mut ControlState) -> bool {
    let activated = state.pressed && state.enabled;
    state.pressed = false;
    state.pressed_by_key = false;
    activated
}

/// Forward a key-down, pressing on the first activation key while focused
pub fn key_down(state: &mut ControlState, key: Key) -> Vec<Effect> {
    if !state.enabled {
        return Vec::new();
    }

    // A held key repeats key-down; only the first one presses.
    if ActivationKey::from_key(&key).is_some() && state.is_focused() && !state.pressed_by_key {
        log::trace!("pressed by key {key:?}");
        state.pressed = true;
        state.pressed_by_key = true;
    }

    vec![Effect::KeyDown(key)]
}

/// Forward a key-up, activating first if it ends a keyboard press
pub fn key_up(state: &mut ControlState, key: Key) -> Vec<Effect> {
    if !state.enabled {
        return Vec::new();
    }

    if state.pressed_by_key {
        state.pressed = false;
        state.pressed_by_key = false;
        vec![Effect::Activate, Effect::KeyUp(key)]
    } else {
        vec![Effect::KeyUp(key)]
    }
}

/// Forward a character-producing key press
pub fn key_press(state: &mut ControlState, key: Key) -> Vec<Effect> {
    if state.enabled {
        vec![Effect::KeyPress(key)]
    } else {
        Vec::new()
    }
}

/// Change the enabled flag
///
/// Disabling clears hover and any press in progress without activating.
/// Focus is left to the [`FocusCoordinator`](crate::FocusCoordinator), which
/// must run `on_disabled_changed` in the same step.
pub fn set_enabled(state: &mut ControlState, enabled: bool) {
    state.enabled = enabled;
    if !enabled {
        if state.pressed {
            log::trace!("press cancelled by disable");
        }
        state.hovered = false;
        state.pressed = false;
        state.pressed_by_key = false;
    }
}

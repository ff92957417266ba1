//! Shared control core
//!
//! `Control` bundles the state, focus coordination and observer callbacks
//! every concrete control needs. Concrete controls own one and add their
//! props and role mapping on top.

use tactile::{
    interaction, ControlState, Effect, FocusCoordinator, FocusHost, FocusState, InputEvent, Key,
    NodeId,
};

/// How a control reacts to pointer presses and activation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Presses and activation keys trigger the control
    Pressable,
    /// Only hover and key forwarding; never activates
    HoverOnly,
}

/// State, focus and observers of one mounted control
pub struct Control {
    state: ControlState,
    focus: FocusCoordinator,
    behavior: Behavior,
    on_click: Option<Box<dyn FnMut()>>,
    on_key_down: Option<Box<dyn FnMut(&Key)>>,
    on_key_up: Option<Box<dyn FnMut(&Key)>>,
    on_key_press: Option<Box<dyn FnMut(&Key)>>,
    on_focus_change: Option<Box<dyn FnMut(bool)>>,
}

impl Control {
    /// Mount a control targeting `target`
    ///
    /// An initial focus request is applied in the same step, so the target
    /// holds focus before the first render.
    pub fn mount(
        target: NodeId,
        behavior: Behavior,
        enabled: bool,
        focused: bool,
        host: &mut dyn FocusHost,
    ) -> Self {
        let mut control = Control {
            state: ControlState::new(enabled),
            focus: FocusCoordinator::new(target),
            behavior,
            on_click: None,
            on_key_down: None,
            on_key_up: None,
            on_key_press: None,
            on_focus_change: None,
        };
        control.focus.on_mount(&mut control.state, host, focused);
        control
    }

    /// Release real focus before the control goes away
    pub fn unmount(mut self, host: &mut dyn FocusHost) {
        self.focus.release_focus(&mut self.state, host);
    }

    /// Current interaction state
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// The real focus target
    pub fn target(&self) -> &NodeId {
        self.focus.target()
    }

    /// Observer for activations
    pub fn set_on_click(&mut self, f: impl FnMut() + 'static) {
        self.on_click = Some(Box::new(f));
    }

    /// Observer for forwarded key-downs
    pub fn set_on_key_down(&mut self, f: impl FnMut(&Key) + 'static) {
        self.on_key_down = Some(Box::new(f));
    }

    /// Observer for forwarded key-ups
    pub fn set_on_key_up(&mut self, f: impl FnMut(&Key) + 'static) {
        self.on_key_up = Some(Box::new(f));
    }

    /// Observer for forwarded key presses
    pub fn set_on_key_press(&mut self, f: impl FnMut(&Key) + 'static) {
        self.on_key_press = Some(Box::new(f));
    }

    /// Observer for gaining (`true`) or losing (`false`) focus
    pub fn set_on_focus_change(&mut self, f: impl FnMut(bool) + 'static) {
        self.on_focus_change = Some(Box::new(f));
    }

    /// Deliver an input event and dispatch the resulting effects in order
    ///
    /// Returns `true` if the control was activated.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let effects = match self.behavior {
            Behavior::Pressable => interaction::reduce(&mut self.state, event),
            Behavior::HoverOnly => interaction::reduce_hover_only(&mut self.state, event),
        };

        let mut activated = false;
        for effect in effects {
            match effect {
                Effect::Activate => {
                    activated = true;
                    if let Some(ref mut on_click) = self.on_click {
                        on_click();
                    }
                }
                Effect::KeyDown(key) => {
                    if let Some(ref mut on_key_down) = self.on_key_down {
                        on_key_down(&key);
                    }
                }
                Effect::KeyUp(key) => {
                    if let Some(ref mut on_key_up) = self.on_key_up {
                        on_key_up(&key);
                    }
                }
                Effect::KeyPress(key) => {
                    if let Some(ref mut on_key_press) = self.on_key_press {
                        on_key_press(&key);
                    }
                }
            }
        }
        activated
    }

    /// The host moved focus onto this control's target
    pub fn on_focus(&mut self, host: &mut dyn FocusHost) {
        self.with_focus_notify(|focus, state| focus.on_target_focused(state, host));
    }

    /// The host moved focus away from this control's target
    pub fn on_blur(&mut self) {
        self.with_focus_notify(|focus, state| focus.on_target_blurred(state));
    }

    /// Reconcile with the host's focus holder
    pub fn sync_focus(&mut self, host: &mut dyn FocusHost) {
        self.with_focus_notify(|focus, state| {
            focus.sync(state, host);
        });
    }

    /// Apply a change of the disabled property
    ///
    /// The correction is complete when this returns: a disabled control is
    /// not hovered, not pressed and not focused.
    pub fn set_enabled(&mut self, enabled: bool, host: &mut dyn FocusHost) {
        if self.state.enabled() == enabled {
            return;
        }

        log::debug!("{:?} enabled: {enabled}", self.focus.target());
        self.with_focus_notify(|focus, state| {
            interaction::set_enabled(state, enabled);
            focus.on_disabled_changed(state, host, !enabled);
        });
        self.state.debug_assert_invariants();
    }

    /// Apply a change of the focused property
    pub fn set_focused(&mut self, focused: bool, host: &mut dyn FocusHost) {
        self.with_focus_notify(|focus, state| {
            focus.on_focus_property_changed(state, host, focused)
        });
    }

    fn with_focus_notify(&mut self, f: impl FnOnce(&FocusCoordinator, &mut ControlState)) {
        let before = self.state.is_focused();
        f(&self.focus, &mut self.state);
        let after = self.state.is_focused();

        if before != after {
            if let Some(ref mut on_focus_change) = self.on_focus_change {
                on_focus_change(after);
            }
        }
    }

    /// Current focus state
    pub fn focus_state(&self) -> FocusState {
        self.state.focus()
    }
}

impl std::fmt::Debug for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Control")
            .field("state", &self.state)
            .field("target", self.focus.target())
            .field("behavior", &self.behavior)
            .finish()
    }
}

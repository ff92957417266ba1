//! Focus coordination between a control and the host's real focus target
//!
//! A control's [`FocusState`] is only trustworthy if it agrees with the host.
//! The [`FocusCoordinator`] is the single place that moves real input focus
//! on the control's behalf, and it keeps these invariants:
//!
//! - `HardFocused` means the host's focus holder is the control's target.
//! - `Unfocused` means it is not.
//! - A disabled control is always `Unfocused`.
//!
//! `SoftFocused` is never produced by a request. It is set when the control
//! observes its target gaining focus through the host (keyboard navigation,
//! click-to-focus), so focus-dependent styling can apply without triggering
//! another focus request.

use crate::{ControlState, FocusState, NodeId};

/// Host capability to move and query real input focus
///
/// Implemented by the rendering/windowing integration. [`UiContext`](crate::UiContext)
/// is an in-process implementation.
pub trait FocusHost {
    /// Move input focus to `target`
    fn focus(&mut self, target: &NodeId);

    /// Remove input focus from `target` if it holds it
    fn blur(&mut self, target: &NodeId);

    /// The node currently holding input focus, if any
    fn focused(&self) -> Option<&NodeId>;

    /// Allocate a unique ID for a control's focus target
    fn generate_id(&mut self, label: &str) -> NodeId;

    /// Whether `target` currently holds input focus
    fn has_focus(&self, target: &NodeId) -> bool {
        self.focused() == Some(target)
    }
}

/// Synchronizes one control's [`FocusState`] with its real focus target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusCoordinator {
    target: NodeId,
}

impl FocusCoordinator {
    /// Create a coordinator for the given focus target
    pub fn new(target: NodeId) -> Self {
        Self { target }
    }

    /// The node this coordinator moves focus to
    pub fn target(&self) -> &NodeId {
        &self.target
    }

    /// Request hard focus; no-op while disabled
    pub fn request_focus(&self, state: &mut ControlState, host: &mut dyn FocusHost) {
        if !state.enabled {
            log::debug!("focus request for {:?} ignored: disabled", self.target);
            return;
        }

        log::debug!("focus requested for {:?}", self.target);
        state.focus = FocusState::HardFocused;
        if !host.has_focus(&self.target) {
            host.focus(&self.target);
        }
    }

    /// Drop focus, relinquishing real focus if the target holds it
    pub fn release_focus(&self, state: &mut ControlState, host: &mut dyn FocusHost) {
        if state.focus.is_focused() {
            log::debug!("focus released for {:?}", self.target);
        }
        state.focus = FocusState::Unfocused;
        if host.has_focus(&self.target) {
            host.blur(&self.target);
        }
    }

    /// React to the disabled property changing
    ///
    /// Disabling forces `Unfocused` regardless of the prior state. Enabling
    /// does not restore focus.
    pub fn on_disabled_changed(
        &self,
        state: &mut ControlState,
        host: &mut dyn FocusHost,
        disabled: bool,
    ) {
        if disabled {
            self.release_focus(state, host);
        }
    }

    /// Apply the initial focus request in the same step as mounting
    pub fn on_mount(
        &self,
        state: &mut ControlState,
        host: &mut dyn FocusHost,
        initial_focus_requested: bool,
    ) {
        if initial_focus_requested && state.enabled {
            self.request_focus(state, host);
        }
    }

    /// React to the externally controlled `focused` property changing
    ///
    /// A request made while disabled is dropped, not queued.
    pub fn on_focus_property_changed(
        &self,
        state: &mut ControlState,
        host: &mut dyn FocusHost,
        focused: bool,
    ) {
        if focused {
            self.request_focus(state, host);
        } else {
            self.release_focus(state, host);
        }
    }

    /// The host reports that the target gained focus
    ///
    /// Focus acquired without a request becomes `SoftFocused`. A disabled
    /// control gives the focus straight back.
    pub fn on_target_focused(&self, state: &mut ControlState, host: &mut dyn FocusHost) {
        if !state.enabled {
            log::debug!("{:?} focused while disabled, blurring", self.target);
            host.blur(&self.target);
            return;
        }

        if state.focus == FocusState::Unfocused {
            state.focus = FocusState::SoftFocused;
        }
    }

    /// The host reports that the target lost focus
    pub fn on_target_blurred(&self, state: &mut ControlState) {
        state.focus = FocusState::Unfocused;
    }

    /// Reconcile the focus state with the host's current focus holder
    ///
    /// Returns `true` if the state changed.
    pub fn sync(&self, state: &mut ControlState, host: &mut dyn FocusHost) -> bool {
        let before = state.focus;
        if host.has_focus(&self.target) {
            self.on_target_focused(state, host);
        } else {
            self.on_target_blurred(state);
        }
        state.focus != before
    }
}

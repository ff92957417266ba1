//! Per-control interaction state

/// Focus state of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusState {
    /// The control does not hold input focus
    #[default]
    Unfocused,
    /// Focus was acquired incidentally (keyboard navigation, click-to-focus)
    /// without the control requesting it
    SoftFocused,
    /// Focus was requested by the control and moved to its target
    HardFocused,
}

impl FocusState {
    /// Whether the control holds focus at all
    pub fn is_focused(self) -> bool {
        !matches!(self, FocusState::Unfocused)
    }
}

/// Interaction state owned by a single control
///
/// Fields are only mutated by the transition functions in
/// [`interaction`](crate::interaction) and by [`FocusCoordinator`](crate::FocusCoordinator),
/// which keep the following invariant after every transition:
/// a disabled control is never hovered, pressed or focused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub(crate) enabled: bool,
    pub(crate) hovered: bool,
    pub(crate) pressed: bool,
    pub(crate) pressed_by_key: bool,
    pub(crate) focus: FocusState,
}

impl ControlState {
    /// Create an idle state
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            hovered: false,
            pressed: false,
            pressed_by_key: false,
            focus: FocusState::Unfocused,
        }
    }

    /// Whether the control accepts interaction
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the pointer is over the control
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a press (pointer or keyboard) is in progress
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the current press was started by an activation key
    pub fn pressed_by_key(&self) -> bool {
        self.pressed_by_key
    }

    /// Current focus state
    pub fn focus(&self) -> FocusState {
        self.focus
    }

    /// Whether the control holds soft or hard focus
    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    /// Debug-assert the disabled invariant
    ///
    /// Compiled out of release builds.
    pub fn debug_assert_invariants(&self) {
        debug_assert!(
            self.enabled || (!self.hovered && !self.pressed && !self.is_focused()),
            "disabled control carries interaction state: {self:?}"
        );
        debug_assert!(
            !self.pressed_by_key || self.pressed,
            "pressed_by_key set without pressed: {self:?}"
        );
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(true)
    }
}

//! Backend-agnostic input events delivered to a control
//!
//! Windowing libraries convert their events into [`InputEvent`]s and deliver
//! them to the control that is currently active (hovered or focused).

/// Backend-agnostic named key representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NamedKey {
    /// Enter/Return key
    Enter,
    /// Space bar
    Space,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Left arrow key
    ArrowLeft,
    /// Right arrow key
    ArrowRight,
    /// Up arrow key
    ArrowUp,
    /// Down arrow key
    ArrowDown,
    /// Home key
    Home,
    /// End key
    End,
    /// Shift key (left or right)
    Shift,
    /// Control key (left or right)
    Control,
    /// Alt key (left or right)
    Alt,
    /// Super/Meta/Windows/Command key
    Super,
    /// Function keys
    F(u8),
}

/// Backend-agnostic key representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A named key (Enter, Escape, arrows, etc.)
    Named(NamedKey),
    /// A character key (letters, numbers, symbols)
    Character(String),
    /// Unknown/unhandled key
    Unknown,
}

impl Key {
    /// Shorthand for a character key
    pub fn character(text: impl Into<String>) -> Self {
        Key::Character(text.into())
    }
}

impl From<NamedKey> for Key {
    fn from(named: NamedKey) -> Self {
        Key::Named(named)
    }
}

/// Keys that press a control from the keyboard
///
/// Every other key takes the pass-through branch and is only forwarded to
/// key observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivationKey {
    /// Space bar, either as a named key or as the `" "` character
    Space,
    /// Enter/Return
    Enter,
}

impl ActivationKey {
    /// Classify a key, returning `None` for keys outside the recognized set
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::Space) => Some(ActivationKey::Space),
            Key::Named(NamedKey::Enter) => Some(ActivationKey::Enter),
            Key::Character(text) if text == " " => Some(ActivationKey::Space),
            _ => None,
        }
    }
}

/// Input delivered by the host to a single control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer entered the control's bounds
    PointerEnter,
    /// Pointer left the control's bounds
    PointerLeave,
    /// Primary pointer button went down over the control
    PointerDown,
    /// Primary pointer button was released
    PointerUp,
    /// A key went down while the control was the input target
    KeyDown(Key),
    /// A key was released
    KeyUp(Key),
    /// A key produced text input
    KeyPress(Key),
}

impl InputEvent {
    /// The key carried by keyboard events
    pub fn key(&self) -> Option<&Key> {
        match self {
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) | InputEvent::KeyPress(key) => {
                Some(key)
            }
            _ => None,
        }
    }
}

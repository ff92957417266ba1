//! Semantic variant resolution
//!
//! Decides how a control presents itself: as a native control, as a link
//! with a navigable target, or as a pseudo-link that looks like a link but
//! behaves like a button. The derived attributes are recomputed from the
//! current `enabled` flag every time, so disabling a link drops its href in
//! the same step.

use crate::Tag;

/// Semantic role exposed to assistive technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Role implied by the native element
    Native,
    /// `link`
    Link,
    /// `button`, synthesized on a non-button element
    Button,
}

impl Role {
    /// Value of the `role` attribute, if one must be set explicitly
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            Role::Native => None,
            Role::Link => Some("link"),
            Role::Button => Some("button"),
        }
    }
}

/// How a control is presented
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Native control
    Native,
    /// Link to a target URL
    ///
    /// The URL may be absent for controls declared as links without a target.
    Navigable(Option<String>),
    /// Link-like control with no navigable target
    Pseudo,
}

/// Attributes derived from a [`Variant`] and the enabled flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub tag: Tag,
    pub role: Role,
    /// Navigable target; only set while enabled
    pub href: Option<String>,
    /// Explicit tab index; `None` defers to the host default
    pub tab_index: Option<i32>,
}

impl Variant {
    /// Resolve the variant of a link-like control from its URL
    pub fn for_link(url: Option<&str>) -> Self {
        match url {
            Some(url) => Variant::Navigable(Some(url.to_string())),
            None => Variant::Pseudo,
        }
    }

    /// Compute the attribute surface for the current enabled flag
    pub fn resolve(&self, enabled: bool) -> Resolved {
        match self {
            Variant::Native => Resolved {
                tag: Tag::Button,
                role: Role::Native,
                href: None,
                tab_index: None,
            },
            Variant::Navigable(url) => Resolved {
                tag: Tag::Anchor,
                role: Role::Link,
                href: if enabled { url.clone() } else { None },
                tab_index: None,
            },
            Variant::Pseudo => Resolved {
                tag: Tag::Span,
                role: Role::Button,
                href: None,
                tab_index: Some(if enabled { 0 } else { -1 }),
            },
        }
    }
}

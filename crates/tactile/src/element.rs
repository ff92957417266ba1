//! Rendered attribute surface of a control
//!
//! An [`Element`] is what a control hands to the rendering engine: which
//! kind of element to present, its semantic role, and the attributes derived
//! from the control's state. Class names follow the
//! `<component>_<flag>` / `<component>_<axis>_<value>` scheme built by
//! [`ClassNames`].

use crate::Role;
use tactile_macros::WithBuilders;

/// Kind of element to present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Native push button
    Button,
    /// Hyperlink anchor
    Anchor,
    /// Generic inline element
    Span,
    /// Native text input
    Input,
}

/// Attribute surface produced by a control's `render`
#[derive(Debug, Clone, PartialEq, Eq, WithBuilders)]
pub struct Element {
    #[with_builders(skip)]
    pub tag: Tag,
    /// Semantic role
    pub role: Role,
    /// ID of the real focus target
    #[with_builders(some, into)]
    pub id: Option<String>,
    #[with_builders(into)]
    pub name: Option<String>,
    #[with_builders(into)]
    pub title: Option<String>,
    /// Navigable target, present only for enabled navigable controls
    pub href: Option<String>,
    /// Explicit tab index; `None` leaves reachability to the host default
    pub tab_index: Option<i32>,
    /// Native `disabled` attribute
    pub disabled: bool,
    #[with_builders(into)]
    pub input_type: Option<String>,
    #[with_builders(into)]
    pub value: Option<String>,
    #[with_builders(into)]
    pub placeholder: Option<String>,
    pub max_length: Option<usize>,
    /// Ordered class names
    pub class_names: Vec<String>,
    /// Text content
    #[with_builders(into)]
    pub text: Option<String>,
}

impl Element {
    /// Create an element with no attributes
    pub fn new(tag: Tag, role: Role) -> Self {
        Self {
            tag,
            role,
            id: None,
            name: None,
            title: None,
            href: None,
            tab_index: None,
            disabled: false,
            input_type: None,
            value: None,
            placeholder: None,
            max_length: None,
            class_names: Vec::new(),
            text: None,
        }
    }

    /// Check if the element carries a class name
    pub fn has_class(&self, class: &str) -> bool {
        self.class_names.iter().any(|c| c == class)
    }

    /// The class names joined with spaces
    pub fn class_attr(&self) -> String {
        self.class_names.join(" ")
    }
}

/// Builder for `<block>_<flag>` and `<block>_<axis>_<value>` class lists
#[derive(Debug, Clone)]
pub struct ClassNames {
    block: &'static str,
    classes: Vec<String>,
}

impl ClassNames {
    /// Start a class list with the block name itself
    pub fn new(block: &'static str) -> Self {
        Self {
            block,
            classes: vec![block.to_string()],
        }
    }

    /// Add `<block>_<axis>_<value>` when a value is present
    pub fn modifier(mut self, axis: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.classes
                .push(format!("{}_{}_{}", self.block, axis, value));
        }
        self
    }

    /// Add `<block>_<flag>` when `on` is set
    pub fn flag(mut self, flag: &str, on: bool) -> Self {
        if on {
            self.classes.push(format!("{}_{}", self.block, flag));
        }
        self
    }

    /// Append user supplied class names verbatim
    pub fn mix(mut self, extra: Option<&str>) -> Self {
        if let Some(extra) = extra {
            self.classes
                .extend(extra.split_whitespace().map(str::to_string));
        }
        self
    }

    pub fn build(self) -> Vec<String> {
        self.classes
    }
}

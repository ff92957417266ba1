//! Text input component
//!
//! Shares hover, focus and key forwarding with the other controls but is
//! never pressed or activated. The value is owned by the host: editing is
//! done elsewhere and pushed in with [`TextInput::set_value`].

use crate::{Behavior, Control};
use tactile::{ClassNames, Element, FocusHost, FocusState, InputEvent, Key, NodeId, Role, Tag};
use tactile_macros::WithBuilders;

/// Declared options of a text input
#[derive(Debug, Clone, PartialEq, Eq, WithBuilders)]
pub struct TextInputProps {
    /// ID of the focus target; generated when absent
    #[with_builders(some, into)]
    pub id: Option<String>,
    #[with_builders(some, into)]
    pub name: Option<String>,
    /// Native input type, e.g. `text` or `password`
    #[with_builders(into)]
    pub input_type: String,
    #[with_builders(into)]
    pub value: String,
    #[with_builders(some, into)]
    pub placeholder: Option<String>,
    #[with_builders(some)]
    pub max_length: Option<usize>,
    /// Show a clear control next to the value
    pub has_clear: bool,
    pub disabled: bool,
    pub focused: bool,
    #[with_builders(some, into)]
    pub class_name: Option<String>,
    #[with_builders(some, into)]
    pub theme: Option<String>,
    #[with_builders(some, into)]
    pub size: Option<String>,
}

impl Default for TextInputProps {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            input_type: "text".to_string(),
            value: String::new(),
            placeholder: None,
            max_length: None,
            has_clear: false,
            disabled: false,
            focused: false,
            class_name: None,
            theme: None,
            size: None,
        }
    }
}

/// A mounted text input
///
/// # Example
///
/// ```ignore
/// let input = TextInput::mount(TextInputProps::default().with_placeholder("Fill me!"), &mut ctx)
///     .on_focus_change(|focused| println!("focused: {focused}"));
/// ```
#[derive(Debug)]
pub struct TextInput {
    props: TextInputProps,
    control: Control,
}

impl TextInput {
    /// Mount a text input, applying an initial focus request
    pub fn mount(mut props: TextInputProps, host: &mut dyn FocusHost) -> Self {
        clamp_value(&mut props.value, props.max_length);
        let target = match props.id {
            Some(ref id) => NodeId::new(id.clone()),
            None => host.generate_id("text_input"),
        };
        let control = Control::mount(
            target,
            Behavior::HoverOnly,
            !props.disabled,
            props.focused,
            host,
        );

        TextInput { props, control }
    }

    /// Set a callback for focus gained (`true`) and lost (`false`)
    pub fn on_focus_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.control.set_on_focus_change(f);
        self
    }

    pub fn on_key_down(mut self, f: impl FnMut(&Key) + 'static) -> Self {
        self.control.set_on_key_down(f);
        self
    }

    pub fn on_key_up(mut self, f: impl FnMut(&Key) + 'static) -> Self {
        self.control.set_on_key_up(f);
        self
    }

    pub fn on_key_press(mut self, f: impl FnMut(&Key) + 'static) -> Self {
        self.control.set_on_key_press(f);
        self
    }

    pub fn props(&self) -> &TextInputProps {
        &self.props
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn value(&self) -> &str {
        &self.props.value
    }

    /// Replace the value, truncating to `max_length` characters
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.props.value = value.into();
        clamp_value(&mut self.props.value, self.props.max_length);
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        self.control.handle_event(event);
    }

    pub fn on_focus(&mut self, host: &mut dyn FocusHost) {
        self.control.on_focus(host);
    }

    pub fn on_blur(&mut self) {
        self.control.on_blur();
    }

    /// Replace the declared props, clamping the value to `max_length`
    pub fn set_props(&mut self, props: TextInputProps, host: &mut dyn FocusHost) {
        let old = std::mem::replace(&mut self.props, props);
        clamp_value(&mut self.props.value, self.props.max_length);

        if old.disabled != self.props.disabled {
            self.control.set_enabled(!self.props.disabled, host);
        }
        if old.focused != self.props.focused {
            self.control.set_focused(self.props.focused, host);
        }
    }

    pub fn set_disabled(&mut self, disabled: bool, host: &mut dyn FocusHost) {
        let props = self.props.clone().with_disabled(disabled);
        self.set_props(props, host);
    }

    /// Request or release focus
    ///
    /// A repeated request re-acquires focus lost to the host in between.
    pub fn set_focused(&mut self, focused: bool, host: &mut dyn FocusHost) {
        let props = self.props.clone().with_focused(focused);
        self.set_props(props, host);

        if focused && self.control.focus_state() != FocusState::HardFocused {
            self.control.set_focused(true, host);
        }
    }

    pub fn unmount(self, host: &mut dyn FocusHost) {
        self.control.unmount(host);
    }

    /// Derive the attribute surface from the current state
    pub fn render(&self) -> Element {
        let state = self.control.state();

        let class_names = ClassNames::new("text-input")
            .modifier("type", Some(self.props.input_type.as_str()))
            .modifier("theme", self.props.theme.as_deref())
            .modifier("size", self.props.size.as_deref())
            .flag("has-clear", self.props.has_clear)
            .flag("disabled", !state.enabled())
            .flag("focused", state.is_focused())
            .flag("hovered", state.hovered())
            .mix(self.props.class_name.as_deref())
            .build();

        Element::new(Tag::Input, Role::Native)
            .with_id(self.control.target().as_str())
            .with_name(self.props.name.clone())
            .with_input_type(self.props.input_type.clone())
            .with_value(self.props.value.clone())
            .with_placeholder(self.props.placeholder.clone())
            .with_max_length(self.props.max_length)
            .with_disabled(!state.enabled())
            .with_class_names(class_names)
    }
}

fn clamp_value(value: &mut String, max_length: Option<usize>) {
    let Some(max) = max_length else {
        return;
    };
    if let Some((byte_idx, _)) = value.char_indices().nth(max) {
        value.truncate(byte_idx);
    }
}

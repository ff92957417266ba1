//! Button component
//!
//! A pressable control rendered as a native button, or as a link when its
//! type is [`ButtonType::Link`].

use crate::{Behavior, Control};
use tactile::{ClassNames, Element, FocusHost, FocusState, InputEvent, Key, NodeId, Variant};
use tactile_macros::WithBuilders;

/// Declared type of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    /// Plain push button
    #[default]
    Button,
    /// Submits its form
    Submit,
    /// Resets its form
    Reset,
    /// Navigates to `url`
    Link,
}

impl ButtonType {
    /// Value of the native `type` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
            ButtonType::Link => "link",
        }
    }
}

/// Declared options of a button
#[derive(Debug, Clone, Default, PartialEq, Eq, WithBuilders)]
pub struct ButtonProps {
    /// ID of the focus target; generated when absent
    #[with_builders(some, into)]
    pub id: Option<String>,
    #[with_builders(some, into)]
    pub name: Option<String>,
    pub button_type: ButtonType,
    #[with_builders(some, into)]
    pub view: Option<String>,
    #[with_builders(some, into)]
    pub class_name: Option<String>,
    #[with_builders(some, into)]
    pub title: Option<String>,
    /// Target of a [`ButtonType::Link`] button
    #[with_builders(some, into)]
    pub url: Option<String>,
    pub checked: bool,
    pub disabled: bool,
    /// Request focus on mount, or whenever this turns on
    pub focused: bool,
    #[with_builders(some, into)]
    pub theme: Option<String>,
    #[with_builders(some, into)]
    pub size: Option<String>,
}

impl ButtonProps {
    fn variant(&self) -> Variant {
        match self.button_type {
            ButtonType::Link => Variant::Navigable(self.url.clone()),
            _ => Variant::Native,
        }
    }
}

/// A mounted button
///
/// # Example
///
/// ```ignore
/// let mut button = Button::mount("Save", ButtonProps::default().with_view("action"), &mut ctx)
///     .on_click(|| println!("Saved!"));
///
/// button.handle_event(InputEvent::PointerDown);
/// button.handle_event(InputEvent::PointerUp);
/// let element = button.render();
/// ```
#[derive(Debug)]
pub struct Button {
    label: String,
    props: ButtonProps,
    control: Control,
}

impl Button {
    /// Mount a button, applying an initial focus request
    pub fn mount(label: impl Into<String>, props: ButtonProps, host: &mut dyn FocusHost) -> Self {
        let target = match props.id {
            Some(ref id) => NodeId::new(id.clone()),
            None => host.generate_id("button"),
        };
        let control = Control::mount(
            target,
            Behavior::Pressable,
            !props.disabled,
            props.focused,
            host,
        );

        Button {
            label: label.into(),
            props,
            control,
        }
    }

    /// Set a callback to be called when the button is activated
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.control.set_on_click(f);
        self
    }

    /// Set a callback for key-down events
    pub fn on_key_down(mut self, f: impl FnMut(&Key) + 'static) -> Self {
        self.control.set_on_key_down(f);
        self
    }

    /// Set a callback for key-up events
    pub fn on_key_up(mut self, f: impl FnMut(&Key) + 'static) -> Self {
        self.control.set_on_key_up(f);
        self
    }

    /// Set a callback for key-press events
    pub fn on_key_press(mut self, f: impl FnMut(&Key) + 'static) -> Self {
        self.control.set_on_key_press(f);
        self
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Deliver an input event; returns `true` if the button was activated
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        self.control.handle_event(event)
    }

    /// The host focused this button's target
    pub fn on_focus(&mut self, host: &mut dyn FocusHost) {
        self.control.on_focus(host);
    }

    /// The host moved focus away
    pub fn on_blur(&mut self) {
        self.control.on_blur();
    }

    /// Replace the declared props
    ///
    /// `disabled` is applied before `focused`, so a focus request arriving
    /// together with `disabled` is dropped.
    pub fn set_props(&mut self, props: ButtonProps, host: &mut dyn FocusHost) {
        let old = std::mem::replace(&mut self.props, props);

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

    /// Release focus and consume the button
    pub fn unmount(self, host: &mut dyn FocusHost) {
        self.control.unmount(host);
    }

    /// Derive the attribute surface from the current state
    pub fn render(&self) -> Element {
        let state = self.control.state();
        let resolved = self.props.variant().resolve(state.enabled());
        let native = self.props.button_type != ButtonType::Link;

        let class_names = ClassNames::new("button")
            .modifier("type", Some(self.props.button_type.as_str()))
            .modifier("view", self.props.view.as_deref())
            .modifier("theme", self.props.theme.as_deref())
            .modifier("size", self.props.size.as_deref())
            .flag("checked", self.props.checked)
            .flag("disabled", !state.enabled())
            .flag("focused", state.is_focused())
            .flag("hovered", state.hovered())
            .flag("pressed", state.pressed())
            .mix(self.props.class_name.as_deref())
            .build();

        let mut element = Element::new(resolved.tag, resolved.role)
            .with_id(self.control.target().as_str())
            .with_name(self.props.name.clone())
            .with_title(self.props.title.clone())
            .with_href(resolved.href)
            .with_tab_index(resolved.tab_index)
            .with_class_names(class_names)
            .with_text(self.label.clone());

        if native {
            element = element
                .with_input_type(self.props.button_type.as_str().to_string())
                .with_disabled(!state.enabled());
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tactile::{NamedKey, Role, Tag, UiContext};

    fn counter() -> (Rc<RefCell<usize>>, impl FnMut() + 'static) {
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        (count, move || *c.borrow_mut() += 1)
    }

    fn key_log() -> (Rc<RefCell<Vec<Key>>>, impl FnMut(&Key) + 'static) {
        let keys = Rc::new(RefCell::new(Vec::new()));
        let k = keys.clone();
        (keys, move |key: &Key| k.borrow_mut().push(key.clone()))
    }

    #[test]
    fn test_is_a_button() {
        let mut ctx = UiContext::new();
        let element = Button::mount("button", ButtonProps::default(), &mut ctx).render();

        assert_eq!(element.tag, Tag::Button);
        assert_eq!(element.role, Role::Native);
        assert!(element.has_class("button"));
        assert_eq!(element.text.as_deref(), Some("button"));
    }

    #[test]
    fn test_accepts_options() {
        let mut ctx = UiContext::new();
        let props = ButtonProps::default()
            .with_name("my-button")
            .with_button_type(ButtonType::Submit)
            .with_view("action")
            .with_class_name("my-button")
            .with_theme("islands")
            .with_size("m");
        let element = Button::mount("button", props, &mut ctx).render();

        assert_eq!(element.name.as_deref(), Some("my-button"));
        assert_eq!(element.input_type.as_deref(), Some("submit"));
        assert!(element.has_class("button_type_submit"));
        assert!(element.has_class("button_view_action"));
        assert!(element.has_class("button_theme_islands"));
        assert!(element.has_class("button_size_m"));
        assert!(element.has_class("my-button"));
    }

    #[test]
    fn test_checked() {
        let mut ctx = UiContext::new();
        let mut button = Button::mount("button", ButtonProps::default().with_checked(true), &mut ctx);
        assert!(button.render().has_class("button_checked"));

        let props = button.props().clone().with_checked(false);
        button.set_props(props, &mut ctx);
        assert!(!button.render().has_class("button_checked"));
    }

    #[test]
    fn test_disabled() {
        let mut ctx = UiContext::new();
        let mut button =
            Button::mount("button", ButtonProps::default().with_disabled(true), &mut ctx);
        let element = button.render();
        assert!(element.disabled);
        assert!(element.has_class("button_disabled"));

        button.set_disabled(false, &mut ctx);
        let element = button.render();
        assert!(!element.disabled);
        assert!(!element.has_class("button_disabled"));
    }

    #[test]
    fn test_focused_on_mount() {
        let mut ctx = UiContext::new();
        let button = Button::mount("button", ButtonProps::default().with_focused(true), &mut ctx);

        assert_eq!(button.control().focus_state(), FocusState::HardFocused);
        assert!(ctx.has_focus(button.control().target()));
        assert!(button.render().has_class("button_focused"));
    }

    #[test]
    fn test_disabled_and_focused_on_mount() {
        let mut ctx = UiContext::new();
        let props = ButtonProps::default().with_disabled(true).with_focused(true);
        let button = Button::mount("button", props, &mut ctx);

        assert_eq!(button.control().focus_state(), FocusState::Unfocused);
        assert!(ctx.focused().is_none());
        assert!(ctx.take_focus_changes().is_empty());
    }

    #[test]
    fn test_focused_after_mount() {
        let mut ctx = UiContext::new();
        let mut button = Button::mount("button", ButtonProps::default(), &mut ctx);
        assert_eq!(button.control().focus_state(), FocusState::Unfocused);

        button.set_focused(true, &mut ctx);
        assert_eq!(button.control().focus_state(), FocusState::HardFocused);
        assert!(ctx.has_focus(button.control().target()));
    }

    #[test]
    fn test_focus_request_after_blur() {
        let mut ctx = UiContext::new();
        let mut button = Button::mount("button", ButtonProps::default(), &mut ctx);

        button.set_focused(true, &mut ctx);
        ctx.set_focus(None);
        button.on_blur();
        assert_eq!(button.control().focus_state(), FocusState::Unfocused);

        button.set_focused(true, &mut ctx);
        assert_eq!(button.control().focus_state(), FocusState::HardFocused);
        assert!(ctx.has_focus(button.control().target()));
        assert!(button.props().focused);
    }

    #[test]
    fn test_focus_request_dropped_while_disabled() {
        let mut ctx = UiContext::new();
        let mut button = Button::mount("button", ButtonProps::default().with_disabled(true), &mut ctx);

        button.set_focused(true, &mut ctx);
        button.set_focused(true, &mut ctx);
        assert_eq!(button.control().focus_state(), FocusState::Unfocused);

        button.set_disabled(false, &mut ctx);
        assert_eq!(button.control().focus_state(), FocusState::Unfocused);
        assert!(ctx.focused().is_none());
    }

    #[test]
    fn test_removes_focused_if_disabled() {
        let mut ctx = UiContext::new();
        let mut button = Button::mount("button", ButtonProps::default().with_focused(true), &mut ctx);

        button.set_disabled(true, &mut ctx);
        assert!(!button.render().has_class("button_focused"));
        assert!(ctx.focused().is_none());
    }

    #[test]
    fn test_explicit_id() {
        let mut ctx = UiContext::new();
        let button = Button::mount("ok", ButtonProps::default().with_id("ok-button"), &mut ctx);
        assert_eq!(button.control().target().as_str(), "ok-button");
        assert_eq!(button.render().id.as_deref(), Some("ok-button"));
    }

    #[test]
    fn test_type_link() {
        let mut ctx = UiContext::new();
        let element = Button::mount(
            "button",
            ButtonProps::default().with_button_type(ButtonType::Link),
            &mut ctx,
        )
        .render();

        assert_eq!(element.tag, Tag::Anchor);
        assert_eq!(element.role.attribute(), Some("link"));
        assert_eq!(element.href, None);
        assert_eq!(element.input_type, None);
    }

    #[test]
    fn test_type_link_href_follows_disabled() {
        let mut ctx = UiContext::new();
        let props = ButtonProps::default()
            .with_button_type(ButtonType::Link)
            .with_url("http://example.com");
        let mut button = Button::mount("button", props.clone(), &mut ctx);
        assert_eq!(button.render().href.as_deref(), Some("http://example.com"));

        button.set_disabled(true, &mut ctx);
        assert_eq!(button.render().href, None);

        button.set_disabled(false, &mut ctx);
        assert_eq!(button.render().href.as_deref(), Some("http://example.com"));

        let initially_disabled = Button::mount("button", props.with_disabled(true), &mut ctx);
        assert_eq!(initially_disabled.render().href, None);
    }

    #[test]
    fn test_hoverable() {
        let mut ctx = UiContext::new();
        let mut button = Button::mount("button", ButtonProps::default(), &mut ctx);

        button.handle_event(InputEvent::PointerEnter);
        assert!(button.control().state().hovered());
        assert!(button.render().has_class("button_hovered"));

        button.handle_event(InputEvent::PointerLeave);
        assert!(!button.control().state().hovered());
        assert!(!button.render().has_class("button_hovered"));

        let mut disabled =
            Button::mount("button", ButtonProps::default().with_disabled(true), &mut ctx);
        disabled.handle_event(InputEvent::PointerEnter);
        assert!(!disabled.control().state().hovered());
    }

    #[test]
    fn test_pressable_by_pointer() {
        let mut ctx = UiContext::new();
        let mut button = Button::mount("button", ButtonProps::default(), &mut ctx);

        button.handle_event(InputEvent::PointerDown);
        assert!(button.render().has_class("button_pressed"));

        button.handle_event(InputEvent::PointerUp);
        assert!(!button.render().has_class("button_pressed"));
    }

    #[test]
    fn test_pressable_by_keys_when_focused() {
        let mut ctx = UiContext::new();
        let mut button = Button::mount("button", ButtonProps::default().with_focused(true), &mut ctx);

        button.handle_event(InputEvent::KeyDown(Key::character("q")));
        assert!(!button.control().state().pressed());
        button.handle_event(InputEvent::KeyUp(Key::character("q")));

        button.handle_event(InputEvent::KeyDown(Key::character(" ")));
        assert!(button.control().state().pressed());
        button.handle_event(InputEvent::KeyUp(Key::character(" ")));
        assert!(!button.control().state().pressed());

        button.handle_event(InputEvent::KeyDown(NamedKey::Enter.into()));
        assert!(button.control().state().pressed());
        button.handle_event(InputEvent::KeyUp(NamedKey::Enter.into()));
        assert!(!button.control().state().pressed());
    }

    #[test]
    fn test_not_pressable_if_disabled() {
        let mut ctx = UiContext::new();
        let mut button =
            Button::mount("button", ButtonProps::default().with_disabled(true), &mut ctx);

        button.handle_event(InputEvent::PointerDown);
        button.handle_event(InputEvent::KeyDown(Key::character(" ")));
        button.handle_event(InputEvent::KeyDown(NamedKey::Enter.into()));
        assert!(!button.control().state().pressed());
    }

    #[test]
    fn test_key_observers() {
        let mut ctx = UiContext::new();
        let (downs, on_down) = key_log();
        let (ups, on_up) = key_log();
        let mut button = Button::mount("button", ButtonProps::default().with_focused(true), &mut ctx)
            .on_key_down(on_down)
            .on_key_up(on_up);

        button.handle_event(InputEvent::KeyDown(NamedKey::ArrowLeft.into()));
        button.handle_event(InputEvent::KeyUp(NamedKey::ArrowLeft.into()));

        assert_eq!(*downs.borrow(), vec![Key::Named(NamedKey::ArrowLeft)]);
        assert_eq!(*ups.borrow(), vec![Key::Named(NamedKey::ArrowLeft)]);
    }

    #[test]
    fn test_no_key_observers_if_disabled() {
        let mut ctx = UiContext::new();
        let (downs, on_down) = key_log();
        let (ups, on_up) = key_log();
        let (presses, on_press) = key_log();
        let mut button =
            Button::mount("button", ButtonProps::default().with_disabled(true), &mut ctx)
                .on_key_down(on_down)
                .on_key_up(on_up)
                .on_key_press(on_press);

        button.handle_event(InputEvent::KeyDown(NamedKey::ArrowLeft.into()));
        button.handle_event(InputEvent::KeyUp(NamedKey::ArrowLeft.into()));
        button.handle_event(InputEvent::KeyPress(Key::character("q")));

        assert!(downs.borrow().is_empty());
        assert!(ups.borrow().is_empty());
        assert!(presses.borrow().is_empty());
    }

    #[test]
    fn test_key_press_observer() {
        let mut ctx = UiContext::new();
        let (presses, on_press) = key_log();
        let mut button =
            Button::mount("button", ButtonProps::default(), &mut ctx).on_key_press(on_press);

        button.handle_event(InputEvent::KeyPress(Key::character("q")));
        assert_eq!(*presses.borrow(), vec![Key::character("q")]);
    }

    #[test]
    fn test_click() {
        let mut ctx = UiContext::new();
        let (clicks, on_click) = counter();
        let mut button = Button::mount("button", ButtonProps::default(), &mut ctx).on_click(on_click);

        button.handle_event(InputEvent::PointerDown);
        button.handle_event(InputEvent::PointerUp);
        assert_eq!(*clicks.borrow(), 1);
    }

    #[test]
    fn test_click_by_enter_and_space() {
        let mut ctx = UiContext::new();
        let (clicks, on_click) = counter();
        let mut button = Button::mount("button", ButtonProps::default().with_focused(true), &mut ctx)
            .on_click(on_click);

        button.handle_event(InputEvent::KeyDown(NamedKey::Enter.into()));
        button.handle_event(InputEvent::KeyUp(NamedKey::Enter.into()));
        button.handle_event(InputEvent::KeyDown(NamedKey::Space.into()));
        button.handle_event(InputEvent::KeyUp(NamedKey::Space.into()));

        assert_eq!(*clicks.borrow(), 2);
    }

    #[test]
    fn test_no_click_if_disabled() {
        let mut ctx = UiContext::new();
        let (clicks, on_click) = counter();
        let mut button =
            Button::mount("button", ButtonProps::default().with_disabled(true), &mut ctx)
                .on_click(on_click);

        button.handle_event(InputEvent::PointerDown);
        button.handle_event(InputEvent::PointerUp);
        assert_eq!(*clicks.borrow(), 0);
    }

    #[test]
    fn test_disable_mid_press_cancels_click() {
        let mut ctx = UiContext::new();
        let (clicks, on_click) = counter();
        let mut button = Button::mount("button", ButtonProps::default(), &mut ctx).on_click(on_click);

        button.handle_event(InputEvent::PointerDown);
        button.set_disabled(true, &mut ctx);
        button.set_disabled(false, &mut ctx);
        button.handle_event(InputEvent::PointerUp);

        assert_eq!(*clicks.borrow(), 0);
    }

    #[test]
    fn test_soft_focus_from_navigation() {
        let mut ctx = UiContext::new();
        let mut button = Button::mount("button", ButtonProps::default(), &mut ctx);

        ctx.set_focus(Some(button.control().target().clone()));
        button.on_focus(&mut ctx);

        assert_eq!(button.control().focus_state(), FocusState::SoftFocused);
        assert!(button.render().has_class("button_focused"));

        button.on_blur();
        assert_eq!(button.control().focus_state(), FocusState::Unfocused);
    }
}

//! Link component
//!
//! A link with a url is rendered as an anchor. Without one it becomes a
//! pseudo-link: styled like a link, but exposed with the `button` role and an
//! explicit tab index so it stays keyboard reachable.

use crate::{Behavior, Control};
use tactile::{ClassNames, Element, FocusHost, FocusState, InputEvent, Key, NodeId, Variant};
use tactile_macros::WithBuilders;

/// Declared type of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkType {
    #[default]
    Default,
    /// Rendered with pseudo-link styling
    Pseudo,
}

impl LinkType {
    fn modifier(self) -> Option<&'static str> {
        match self {
            LinkType::Default => None,
            LinkType::Pseudo => Some("pseudo"),
        }
    }
}

/// Declared options of a link
#[derive(Debug, Clone, Default, PartialEq, Eq, WithBuilders)]
pub struct LinkProps {
    /// ID of the focus target; generated when absent
    #[with_builders(some, into)]
    pub id: Option<String>,
    /// Navigable target; a link without one is a pseudo-link
    #[with_builders(some, into)]
    pub url: Option<String>,
    pub link_type: LinkType,
    #[with_builders(some, into)]
    pub title: Option<String>,
    #[with_builders(some, into)]
    pub class_name: Option<String>,
    pub disabled: bool,
    pub focused: bool,
    #[with_builders(some, into)]
    pub theme: Option<String>,
    #[with_builders(some, into)]
    pub size: Option<String>,
}

/// A mounted link
#[derive(Debug)]
pub struct Link {
    label: String,
    props: LinkProps,
    control: Control,
}

impl Link {
    /// Mount a link, applying an initial focus request
    pub fn mount(label: impl Into<String>, props: LinkProps, host: &mut dyn FocusHost) -> Self {
        let target = match props.id {
            Some(ref id) => NodeId::new(id.clone()),
            None => host.generate_id("link"),
        };
        let control = Control::mount(
            target,
            Behavior::Pressable,
            !props.disabled,
            props.focused,
            host,
        );

        Link {
            label: label.into(),
            props,
            control,
        }
    }

    /// Set a callback to be called when the link is activated
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.control.set_on_click(f);
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

    pub fn props(&self) -> &LinkProps {
        &self.props
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn variant(&self) -> Variant {
        Variant::for_link(self.props.url.as_deref())
    }

    /// Deliver an input event; returns `true` if the link was activated
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        self.control.handle_event(event)
    }

    pub fn on_focus(&mut self, host: &mut dyn FocusHost) {
        self.control.on_focus(host);
    }

    pub fn on_blur(&mut self) {
        self.control.on_blur();
    }

    /// Replace the declared props
    pub fn set_props(&mut self, props: LinkProps, host: &mut dyn FocusHost) {
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

    pub fn set_url(&mut self, url: Option<String>, host: &mut dyn FocusHost) {
        let mut props = self.props.clone();
        props.url = url;
        self.set_props(props, host);
    }

    /// Release focus and consume the link
    pub fn unmount(self, host: &mut dyn FocusHost) {
        self.control.unmount(host);
    }

    /// Derive the attribute surface from the current state
    pub fn render(&self) -> Element {
        let state = self.control.state();
        let resolved = self.variant().resolve(state.enabled());

        let class_names = ClassNames::new("link")
            .modifier("type", self.props.link_type.modifier())
            .modifier("theme", self.props.theme.as_deref())
            .modifier("size", self.props.size.as_deref())
            .flag("disabled", !state.enabled())
            .flag("focused", state.is_focused())
            .flag("hovered", state.hovered())
            .flag("pressed", state.pressed())
            .mix(self.props.class_name.as_deref())
            .build();

        Element::new(resolved.tag, resolved.role)
            .with_id(self.control.target().as_str())
            .with_title(self.props.title.clone())
            .with_href(resolved.href)
            .with_tab_index(resolved.tab_index)
            .with_class_names(class_names)
            .with_text(self.label.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tactile::{NamedKey, Tag, UiContext};

    const URL: &str = "http://example.com";

    fn link_props() -> LinkProps {
        LinkProps::default().with_url(URL)
    }

    #[test]
    fn test_is_an_anchor() {
        let mut ctx = UiContext::new();
        let element = Link::mount("link", link_props(), &mut ctx).render();

        assert_eq!(element.tag, Tag::Anchor);
        assert!(element.has_class("link"));
        assert_eq!(element.href.as_deref(), Some(URL));
        assert_eq!(element.role.attribute(), Some("link"));
    }

    #[test]
    fn test_accepts_options() {
        let mut ctx = UiContext::new();
        let props = link_props()
            .with_title("my link")
            .with_link_type(LinkType::Pseudo)
            .with_class_name("my-link");
        let element = Link::mount("link", props, &mut ctx).render();

        assert_eq!(element.title.as_deref(), Some("my link"));
        assert!(element.has_class("link_type_pseudo"));
        assert!(element.has_class("my-link"));
        // A url still makes it navigable
        assert_eq!(element.tag, Tag::Anchor);
    }

    #[test]
    fn test_disabled_class() {
        let mut ctx = UiContext::new();
        let mut link = Link::mount("link", link_props().with_disabled(true), &mut ctx);
        assert!(link.render().has_class("link_disabled"));

        link.set_disabled(false, &mut ctx);
        assert!(!link.render().has_class("link_disabled"));
    }

    #[test]
    fn test_href_follows_disabled() {
        let mut ctx = UiContext::new();
        let initially_disabled = Link::mount("link", link_props().with_disabled(true), &mut ctx);
        assert_eq!(initially_disabled.render().href, None);

        let mut link = Link::mount("link", link_props(), &mut ctx);
        link.set_disabled(true, &mut ctx);
        assert_eq!(link.render().href, None);

        link.set_disabled(false, &mut ctx);
        assert_eq!(link.render().href.as_deref(), Some(URL));
    }

    #[test]
    fn test_href_follows_url() {
        let mut ctx = UiContext::new();
        let mut link = Link::mount("link", link_props(), &mut ctx);

        link.set_url(Some("http://example.org".to_string()), &mut ctx);
        assert_eq!(link.render().href.as_deref(), Some("http://example.org"));

        link.set_url(None, &mut ctx);
        let element = link.render();
        assert_eq!(element.tag, Tag::Span);
        assert_eq!(element.href, None);
    }

    #[test]
    fn test_focused() {
        let mut ctx = UiContext::new();
        let mut link = Link::mount("link", link_props().with_focused(true), &mut ctx);
        assert!(link.render().has_class("link_focused"));
        assert_eq!(link.control().focus_state(), FocusState::HardFocused);

        link.set_disabled(true, &mut ctx);
        assert!(!link.render().has_class("link_focused"));
        assert!(ctx.focused().is_none());
    }

    #[test]
    fn test_refocus_after_host_blur() {
        let mut ctx = UiContext::new();
        let mut link = Link::mount("link", link_props().with_focused(true), &mut ctx);

        ctx.set_focus(None);
        link.on_blur();
        assert!(!link.render().has_class("link_focused"));

        link.set_focused(true, &mut ctx);
        assert_eq!(link.control().focus_state(), FocusState::HardFocused);
        assert!(ctx.has_focus(link.control().target()));
        assert!(link.render().has_class("link_focused"));
    }

    #[test]
    fn test_pseudo() {
        let mut ctx = UiContext::new();
        let element = Link::mount("link", LinkProps::default(), &mut ctx).render();

        assert_eq!(element.tag, Tag::Span);
        assert_eq!(element.role.attribute(), Some("button"));
        assert_eq!(element.tab_index, Some(0));
        assert_eq!(element.href, None);
    }

    #[test]
    fn test_pseudo_not_focusable_if_disabled() {
        let mut ctx = UiContext::new();
        let mut link = Link::mount("link", LinkProps::default().with_disabled(true), &mut ctx);
        assert_eq!(link.render().tab_index, Some(-1));

        link.set_disabled(false, &mut ctx);
        assert_eq!(link.render().tab_index, Some(0));
    }

    #[test]
    fn test_hoverable() {
        let mut ctx = UiContext::new();
        let mut link = Link::mount("link", link_props(), &mut ctx);

        link.handle_event(InputEvent::PointerEnter);
        assert!(link.render().has_class("link_hovered"));
        link.handle_event(InputEvent::PointerLeave);
        assert!(!link.render().has_class("link_hovered"));

        let mut disabled = Link::mount("link", link_props().with_disabled(true), &mut ctx);
        disabled.handle_event(InputEvent::PointerEnter);
        assert!(!disabled.control().state().hovered());
    }

    #[test]
    fn test_pressable_by_keys_when_focused() {
        let mut ctx = UiContext::new();
        let mut link = Link::mount("link", link_props().with_focused(true), &mut ctx);

        link.handle_event(InputEvent::KeyDown(Key::character("q")));
        assert!(!link.control().state().pressed());
        link.handle_event(InputEvent::KeyUp(Key::character("q")));

        link.handle_event(InputEvent::KeyDown(Key::character(" ")));
        assert!(link.control().state().pressed());
        link.handle_event(InputEvent::KeyUp(Key::character(" ")));
        assert!(!link.control().state().pressed());

        link.handle_event(InputEvent::KeyDown(NamedKey::Enter.into()));
        assert!(link.render().has_class("link_pressed"));
        link.handle_event(InputEvent::KeyUp(NamedKey::Enter.into()));
        assert!(!link.control().state().pressed());
    }

    #[test]
    fn test_click_by_pointer_and_keys() {
        let mut ctx = UiContext::new();
        let clicks = Rc::new(RefCell::new(0));
        let c = clicks.clone();
        let mut link = Link::mount("link", LinkProps::default().with_focused(true), &mut ctx)
            .on_click(move || *c.borrow_mut() += 1);

        link.handle_event(InputEvent::PointerDown);
        link.handle_event(InputEvent::PointerUp);
        link.handle_event(InputEvent::KeyDown(NamedKey::Enter.into()));
        link.handle_event(InputEvent::KeyUp(NamedKey::Enter.into()));
        link.handle_event(InputEvent::KeyDown(Key::character(" ")));
        link.handle_event(InputEvent::KeyUp(Key::character(" ")));

        assert_eq!(*clicks.borrow(), 3);
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let mut ctx = UiContext::new();
        let events = Rc::new(RefCell::new(0));
        let (c, d, u) = (events.clone(), events.clone(), events.clone());
        let mut link = Link::mount("link", link_props().with_disabled(true), &mut ctx)
            .on_click(move || *c.borrow_mut() += 1)
            .on_key_down(move |_| *d.borrow_mut() += 1)
            .on_key_up(move |_| *u.borrow_mut() += 1);

        link.handle_event(InputEvent::PointerDown);
        link.handle_event(InputEvent::PointerUp);
        link.handle_event(InputEvent::KeyDown(NamedKey::ArrowLeft.into()));
        link.handle_event(InputEvent::KeyUp(NamedKey::ArrowLeft.into()));

        assert_eq!(*events.borrow(), 0);
        assert!(!link.control().state().pressed());
    }
}

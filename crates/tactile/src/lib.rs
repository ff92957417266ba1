//! # tactile
//!
//! Backend agnostic interaction core for small UI controls.
//!
//! This crate holds the state machines that buttons, links and text inputs
//! share. It has no dependency on any windowing library or renderer: hosts
//! feed it [`InputEvent`]s and property changes, and read back an [`Element`]
//! describing the attribute surface to present.
//!
//! ## Core Types
//!
//! - [`ControlState`] - Enabled, hovered, pressed and focus flags of one control
//! - [`FocusState`] - Unfocused, soft focused or hard focused
//! - [`InputEvent`] - Pointer and keyboard input delivered to a control
//!
//! ## Behavior
//!
//! - [`interaction`] - Hover/press reducer that synthesizes [`Effect::Activate`]
//! - [`FocusCoordinator`] - Keeps [`FocusState`] in sync with the host's focus holder
//! - [`Variant`] - Resolves role, href and tab index
//!
//! ## Host Integration
//!
//! - [`FocusHost`] - Capability to move and query real input focus
//! - [`UiContext`] - In-process focus host with ID generation
//! - [`Portal`] - Mounts a single child into an auxiliary root outside the tree

mod context;
mod element;
mod error;
mod focus;
mod input;
pub mod interaction;
mod portal;
mod state;
mod variant;

pub use context::*;
pub use element::*;
pub use error::*;
pub use focus::*;
pub use input::*;
pub use interaction::Effect;
pub use portal::*;
pub use state::*;
pub use variant::*;

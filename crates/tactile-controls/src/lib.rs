//! # tactile-controls
//!
//! Interactive controls built on the tactile core.
//!
//! Every control composes the same pieces: a [`ControlState`](tactile::ControlState)
//! driven by the hover/press reducer, a [`FocusCoordinator`](tactile::FocusCoordinator)
//! bound to the control's focus target, and a [`Variant`](tactile::Variant)
//! that decides the rendered role.

mod button;
mod control;
mod link;
mod text_input;

pub use button::*;
pub use control::*;
pub use link::*;
pub use text_input::*;

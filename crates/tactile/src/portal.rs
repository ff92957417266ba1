//! Out-of-tree mounting for overlay content
//!
//! A [`Portal`] renders a single child into an auxiliary root that lives
//! outside the normal containment hierarchy, e.g. a popup layer drawn above
//! everything else. Auxiliary roots are created by a [`RootContainer`]
//! supplied at construction; [`default_overlay`] provides the shared layer
//! used at the outermost integration boundary.
//!
//! # Example
//!
//! ```ignore
//! let layer = Rc::new(RefCell::new(OverlayLayer::new()));
//! let mut portal = Portal::new(layer.clone());
//!
//! portal.render(vec![popup_element])?; // mounts and renders
//! portal.render(Vec::new())?;          // unmounts
//! ```

use crate::{Element, Error, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Identifier of an auxiliary root inside its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuxRootId(u64);

/// Point of attachment for auxiliary roots
pub trait RootContainer<T> {
    /// Create a new root and attach it to the container
    fn create_root(&mut self) -> AuxRootId;

    /// Render content into a root, replacing what was there
    fn render(&mut self, root: AuxRootId, content: T);

    /// Dispose the content rendered into a root
    fn clear(&mut self, root: AuxRootId);

    /// Detach and discard a root
    fn remove_root(&mut self, root: AuxRootId);
}

/// Shared handle to a root container
pub type SharedRootContainer<T> = Rc<RefCell<dyn RootContainer<T>>>;

/// In-memory root container keeping roots in attach order
#[derive(Debug)]
pub struct OverlayLayer<T> {
    roots: Vec<(AuxRootId, Option<T>)>,
    next_id: u64,
}

impl<T> OverlayLayer<T> {
    /// Create an empty layer
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            next_id: 0,
        }
    }

    /// Number of attached roots
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Check if no root is attached
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Check if a root is attached
    pub fn contains(&self, root: AuxRootId) -> bool {
        self.roots.iter().any(|(id, _)| *id == root)
    }

    /// Content rendered into a root
    pub fn content(&self, root: AuxRootId) -> Option<&T> {
        self.roots
            .iter()
            .find(|(id, _)| *id == root)
            .and_then(|(_, content)| content.as_ref())
    }

    /// Rendered contents, bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.roots.iter().filter_map(|(_, content)| content.as_ref())
    }

    fn slot_mut(&mut self, root: AuxRootId) -> Option<&mut Option<T>> {
        self.roots
            .iter_mut()
            .find(|(id, _)| *id == root)
            .map(|(_, content)| content)
    }
}

impl<T> Default for OverlayLayer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RootContainer<T> for OverlayLayer<T> {
    fn create_root(&mut self) -> AuxRootId {
        let id = AuxRootId(self.next_id);
        self.next_id += 1;
        self.roots.push((id, None));
        id
    }

    fn render(&mut self, root: AuxRootId, content: T) {
        match self.slot_mut(root) {
            Some(slot) => *slot = Some(content),
            None => log::warn!("render into detached root {root:?}"),
        }
    }

    fn clear(&mut self, root: AuxRootId) {
        if let Some(slot) = self.slot_mut(root) {
            *slot = None;
        }
    }

    fn remove_root(&mut self, root: AuxRootId) {
        self.roots.retain(|(id, _)| *id != root);
    }
}

thread_local! {
    static DEFAULT_OVERLAY: Rc<RefCell<OverlayLayer<Element>>> =
        Rc::new(RefCell::new(OverlayLayer::new()));
}

/// The overlay layer shared by everything on the UI thread
///
/// Only meant for the outermost integration boundary; components should be
/// handed their container explicitly.
pub fn default_overlay() -> Rc<RefCell<OverlayLayer<Element>>> {
    DEFAULT_OVERLAY.with(Rc::clone)
}

/// Mounts a single child into an auxiliary root
///
/// Holds at most one root at a time. Mounting and unmounting are
/// idempotent, and dropping a mounted portal unmounts it.
pub struct Portal<T: 'static> {
    container: SharedRootContainer<T>,
    root: Option<AuxRootId>,
}

impl<T: 'static> Portal<T> {
    /// Create an unmounted portal attaching into `container`
    pub fn new<C>(container: Rc<RefCell<C>>) -> Self
    where
        C: RootContainer<T> + 'static,
    {
        let container: SharedRootContainer<T> = container;
        Self {
            container,
            root: None,
        }
    }

    /// Whether an auxiliary root is currently held
    pub fn is_mounted(&self) -> bool {
        self.root.is_some()
    }

    /// The auxiliary root, if mounted
    pub fn root(&self) -> Option<AuxRootId> {
        self.root
    }

    /// Create and attach the auxiliary root unless already mounted
    ///
    /// Fails with [`Error::ContainerBusy`] if the container is borrowed, in
    /// which case the portal stays unmounted.
    pub fn mount_portal(&mut self) -> Result<()> {
        if self.root.is_some() {
            return Ok(());
        }

        let root = self
            .container
            .try_borrow_mut()
            .map_err(|_| Error::ContainerBusy)?
            .create_root();
        log::debug!("portal mounted at {root:?}");
        self.root = Some(root);
        Ok(())
    }

    /// Dispose content and detach the auxiliary root, if mounted
    ///
    /// A busy container keeps the root mounted and reports
    /// [`Error::ContainerBusy`].
    pub fn unmount_portal(&mut self) -> Result<()> {
        let Some(root) = self.root else {
            return Ok(());
        };

        let Ok(mut container) = self.container.try_borrow_mut() else {
            log::warn!("root container busy, {root:?} stays mounted");
            return Err(Error::ContainerBusy);
        };
        container.clear(root);
        container.remove_root(root);
        self.root = None;
        log::debug!("portal unmounted from {root:?}");
        Ok(())
    }

    /// Render the portal's children
    ///
    /// One child mounts the portal and renders into its root, no children
    /// unmount it. More than one child is rejected before anything is
    /// mounted.
    pub fn render(&mut self, children: Vec<T>) -> Result<()> {
        let count = children.len();
        let mut children = children.into_iter();
        match (children.next(), count) {
            (None, _) => self.unmount_portal(),
            (Some(child), 1) => {
                let mut container = self
                    .container
                    .try_borrow_mut()
                    .map_err(|_| Error::ContainerBusy)?;
                let root = match self.root {
                    Some(root) => root,
                    None => {
                        let root = container.create_root();
                        log::debug!("portal mounted at {root:?}");
                        self.root = Some(root);
                        root
                    }
                };
                container.render(root, child);
                Ok(())
            }
            (Some(_), count) => {
                log::warn!("portal rendered with {count} children");
                Err(Error::InvalidChildCount { count })
            }
        }
    }
}

impl<T: 'static> Drop for Portal<T> {
    fn drop(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };

        match self.container.try_borrow_mut() {
            Ok(mut container) => {
                container.clear(root);
                container.remove_root(root);
            }
            Err(_) => log::warn!("root container busy, leaking {root:?}"),
        }
    }
}

impl<T: 'static> std::fmt::Debug for Portal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Portal").field("root", &self.root).finish()
    }
}

impl Portal<Element> {
    /// Create a portal attaching into the [`default_overlay`]
    pub fn with_default_overlay() -> Self {
        Self::new(default_overlay())
    }
}

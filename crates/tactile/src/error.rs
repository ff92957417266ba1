//! Error types for tactile

/// Errors reported to the host
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A portal was rendered with more than one child
    #[error("portal expects a single child or none, got {count}")]
    InvalidChildCount {
        /// Number of children that were supplied
        count: usize,
    },

    /// The root container was borrowed elsewhere while a portal needed it
    #[error("root container is busy")]
    ContainerBusy,
}

/// Result alias using [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

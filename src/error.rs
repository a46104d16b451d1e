//! Error handling types and utilities.

use crate::types::FactField;

/// A specialized Result type for rustdoc-implementors operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the IO and CLI layers.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when the implementor index cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A fact is missing one of its required fields.
    #[error("malformed fact at position {position}: missing `{field}`")]
    MalformedFact { position: usize, field: FactField },
}

/// Error returned by the viewer registry when the handoff protocol is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// An index was already registered for this build.
    #[error("an implementor index has already been submitted to this registry")]
    AlreadySubmitted,
    /// A viewer handler is already attached.
    #[error("a viewer handler is already attached to this registry")]
    AlreadyAttached,
}

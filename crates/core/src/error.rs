//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// rejected mutations). Infrastructure concerns belong elsewhere. Integrity
/// problems discovered mid-computation (a stored reference that no longer
/// resolves) are reported as warnings on the result, not through this type:
/// a broken reference must never stop the customer seeing a total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A mutation referenced an item id that resolves in neither the built-in
    /// catalog nor the session's custom registry.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// A room-targeting operation named a room id that is not present.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// Custom item creation with non-positive or non-finite dimensions, or
    /// an empty name.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A box size with zero, negative or non-finite volume.
    ///
    /// Unreachable through the built-in enumeration; guards sizes that arrive
    /// via deserialized snapshots.
    #[error("invalid box size: {0}")]
    InvalidBoxSize(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn unknown_item(id: impl Into<String>) -> Self {
        Self::UnknownItem(id.into())
    }

    pub fn unknown_room(id: impl Into<String>) -> Self {
        Self::UnknownRoom(id.into())
    }

    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    pub fn invalid_box_size(msg: impl Into<String>) -> Self {
        Self::InvalidBoxSize(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

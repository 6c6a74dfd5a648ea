//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and compared entirely by their attribute
/// values: every 0.19 m³ "Medium" box is the same box size, while two rooms
/// that happen to share a name are still distinct entities. "Modifying" a
/// value object means constructing a new one, which keeps values safe to
/// copy, share and compare like primitives.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

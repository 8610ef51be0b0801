//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and defined entirely by their attribute values;
/// two instances with the same values are equal. Their only constructors are
/// validating factories — no setters exist post-construction, so a value object
/// that exists is a value object that is valid.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

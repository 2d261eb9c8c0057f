//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared entirely by their attribute
/// values: two filters with the same criteria are the same filter, two group
/// keys over the same 5-tuple are the same key. Entities, by contrast, carry
/// an identity that outlives their attribute values.
///
/// To "modify" a value object, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

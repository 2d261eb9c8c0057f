//! Entity trait: identity that outlives attribute values.

/// Entity marker + minimal interface.
///
/// An inventory record is the same record for its whole life, whatever its
/// fields say; the id carries that identity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

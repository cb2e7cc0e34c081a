//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The identifier is assigned once when the entity is created and is never
/// reassigned afterwards; implementors expose it read-only.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

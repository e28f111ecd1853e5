//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Materials and transactions are entities: two records with the same
/// identifier denote the same thing, which is what snapshot validation checks.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

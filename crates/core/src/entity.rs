//! Entity trait: identity + continuity across state changes.

/// Marker + minimal interface for identified domain records.
///
/// An employee stays the same employee through a rename or a suspension;
/// what makes it "the same" is its identifier, not its field values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

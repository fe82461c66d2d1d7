//! Aggregate root trait for domain models that own their lifecycle.

/// Aggregate root marker + minimal interface.
///
/// Kept small so each domain module decides how it models state transitions
/// (state objects, lookup tables, event application).
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented once per accepted state change; rejected actions leave it as is.
    fn version(&self) -> u64;
}

//! ListRecord trait for rows browsed by the engine

use std::hash::Hash;

/// Trait for records that can be browsed in a list screen.
///
/// The engine never inspects record fields directly; it only needs a stable
/// key for selection tracking. Everything else reaches the record through
/// injected predicates and search-field accessors. Records are owned data:
/// the `'static` bound lets predicates built over them live in the engine.
pub trait ListRecord: 'static {
    /// The unique identifier type for this record.
    type Key: Eq + Hash + Clone;

    /// Returns the unique identifier of this record.
    ///
    /// Keys must be stable across data refreshes: a record that survives a
    /// refetch keeps its key, which is what lets selection persist.
    fn key(&self) -> Self::Key;
}

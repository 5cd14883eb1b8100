//! Store and parser tuning knobs.

/// Tuning thresholds for the triple stores in [`crate::graph`].
///
/// The defaults match the fixed constants the stores were designed around;
/// they are exposed here so callers can tune them for unusual cardinality
/// distributions without touching store internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Array-to-hashed promotion threshold for subject bunches.
    pub subject_promotion_threshold: usize,
    /// Array-to-hashed promotion threshold for predicate and object bunches.
    pub predicate_object_promotion_threshold: usize,
    /// An `_PO` lookup defaults to scanning the object bunch; above this
    /// object-bunch size it switches to the predicate bunch instead, but
    /// only if the predicate bunch is smaller still.
    pub secondary_lookup_threshold: usize,
    /// Batch size used when iterating a [`crate::graph::RoaringStore`] in
    /// chunks, and when splitting work across `rayon` for a parallel
    /// [`crate::graph::Graph::stream`].
    pub batch_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            subject_promotion_threshold: 16,
            predicate_object_promotion_threshold: 32,
            secondary_lookup_threshold: 400,
            batch_size: 64,
        }
    }
}

//! Triple stores: the [`Graph`] trait and its implementations.
//!
//! - [`FastTriadicStore`] indexes triples three ways (by subject, by
//!   predicate, by object) using [`TripleBunch`]/[`TripleBunchMap`], and is
//!   the default in-memory store.
//! - [`RoaringStore`] assigns every triple a stable slot id and indexes
//!   `node -> bitmap of slots` for the three components, trading some
//!   insert cost for very fast set algebra over large graphs.
//! - [`DeltaGraph`] overlays additions and removals on top of a base graph
//!   without mutating it.

mod bunch;
mod bunch_map;
mod delta;
mod fast_store;
mod roaring_store;

pub use bunch::TripleBunch;
pub use bunch_map::TripleBunchMap;
pub use delta::DeltaGraph;
pub use fast_store::FastTriadicStore;
pub use roaring_store::RoaringStore;

use cim_common::{Result, Triple, TriplePattern};

/// A boxed, lazily-evaluated sequence of triples borrowed from a [`Graph`].
pub type TripleIter<'a> = Box<dyn Iterator<Item = Triple> + 'a>;

/// A mutable set of triples that can be queried by pattern.
///
/// Implementations dispatch every query on [`cim_common::Pattern`] rather
/// than scanning generically, so each of the eight match cases gets its own
/// constant-time path.
pub trait Graph: Send + Sync {
    /// Adds `triple`. Returns `false` if it was already present.
    ///
    /// # Errors
    ///
    /// Implementations that detect structural limits (e.g. a slot-space
    /// exhausted store) return [`cim_common::Error`] rather than panicking.
    fn add(&mut self, triple: Triple) -> Result<bool>;

    /// Removes `triple`. Returns `false` if it was not present.
    fn remove(&mut self, triple: &Triple) -> Result<bool>;

    /// Whether any triple in the graph satisfies `pattern`.
    fn contains(&self, pattern: &TriplePattern) -> bool;

    /// A lazy sequence of every triple satisfying `pattern`.
    fn find(&self, pattern: &TriplePattern) -> TripleIter<'_>;

    /// Calls `f` once per triple satisfying `pattern`, without the
    /// allocation an external iterator may require. The default
    /// implementation simply drives [`Graph::find`]; stores that can walk
    /// their indices without materializing intermediate pairs override it.
    fn for_each(&self, pattern: &TriplePattern, f: &mut dyn FnMut(&Triple)) {
        for triple in self.find(pattern) {
            f(&triple);
        }
    }

    /// A data-parallel sequence of every triple satisfying `pattern`.
    ///
    /// The default implementation is sequential; stores that can partition
    /// their index cheaply (presently [`RoaringStore`]) override this to
    /// actually fan the scan out across `rayon`'s global pool.
    fn stream(&self, pattern: &TriplePattern) -> Vec<Triple> {
        self.find(pattern).collect()
    }

    /// The number of triples in the graph.
    fn size(&self) -> usize;

    /// Removes every triple.
    fn clear(&mut self);

    /// Called once ingestion into this graph is settled, giving a store
    /// that defers index bookkeeping a chance to do it. The default is a
    /// no-op, which suits stores (e.g. [`FastTriadicStore`]) that maintain
    /// their indices incrementally on every [`add`][Self::add]/
    /// [`remove`][Self::remove].
    fn finalize(&mut self) {}
}

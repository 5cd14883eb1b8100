//! Hash map/set aliases using a fast, non-DoS-resistant hasher.
//!
//! Triple stores hash their own keys heavily (one lookup per `add`/`remove`/
//! `contains`); the default `SipHash` map is a measurable cost at millions
//! of triples, so every index in this crate uses [`ahash`] instead.

/// A [`hashbrown::HashMap`] keyed with [`ahash`]'s fast hasher.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// A [`hashbrown::HashSet`] keyed with [`ahash`]'s fast hasher.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;

//! The hash-map used by the arrangement builder.
//!
//! Iteration order never leaks into results: maps are only used for lookups.

pub use hashbrown::hash_map::Entry;

/// Hashmap using [`hashbrown::HashMap`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;

//! # Common Types

/// A single embedding (or one-hot) vector.
pub type Vector = Vec<f32>;

/// One vector per token (or tag) of a document.
pub type DocumentTensor = Vec<Vector>;

/// A ragged batch: `(documents, tokens-per-document, width)`.
///
/// Documents are not padded to a common length.
pub type BatchTensor = Vec<DocumentTensor>;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type TPHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type TPHashSet<V> = ahash::AHashSet<V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> TPHashMap<K, V> {
            TPHashMap::new()
        }

        /// Create a new empty hash set.
        pub fn hash_set_new<V>() -> TPHashSet<V> {
            TPHashSet::new()
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type TPHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type TPHashSet<V> = std::collections::HashSet<V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> TPHashMap<K, V> {
            TPHashMap::new()
        }

        /// Create a new empty hash set.
        pub fn hash_set_new<V>() -> TPHashSet<V> {
            TPHashSet::new()
        }
    }
}

//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use compact_str::CompactString;
use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a vocabulary id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max id in a vocabulary is less than `T::max()`.
pub trait IdType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> IdType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A token string.
///
/// Either a single byte's canonical rendering, or the concatenation
/// of two tokens produced by a merge.
pub type Token = CompactString;

/// An ordered ``(left, right)`` pair of adjacent tokens.
pub type TokenPair = (Token, Token);

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type BPHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> BPHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> BPHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type BPHashSet<V> = foldhash::HashSet<V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type BPHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> BPHashMap<K, V> {
            BPHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> BPHashMap<K, V> {
            BPHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type BPHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Compile-time check that a value is `Send + Sync`.
#[cfg(test)]
pub(crate) fn static_is_send_sync_check<V: Send + Sync>(_: &V) {}

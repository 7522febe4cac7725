//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// An atomic token unit; a single character or a merged multi-character unit.
///
/// Symbols are short, so they are stored inline where possible.
pub type Symbol = compact_str::CompactString;

/// An ordered pair of adjacent symbols.
pub type SymbolPair = (Symbol, Symbol);

/// A type that can be used as a token id in a [`crate::vocab::SymbolVocab`].
///
/// These are constrained to be unsigned primitive integers;
/// such that the max token in a vocabulary is less than `T::max()`.
pub trait TokenType:
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

impl<T> TokenType for T where
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

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WMHashSet<V> = ahash::AHashSet<V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type WMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WMHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Create a new hash map with the given capacity.
pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WMHashMap<K, V> {
    WMHashMap::with_capacity(capacity)
}

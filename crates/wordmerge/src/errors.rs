//! # Error Types

use compact_str::CompactString;

/// Errors from wordmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum WordmergeError {
    /// A marker or unknown-token symbol was the empty string.
    #[error("{role} symbol must be non-empty")]
    EmptySymbol {
        /// Which symbol was empty.
        role: &'static str,
    },

    /// Frequency collection requires an end-of-word marker.
    #[error("an end-of-word marker is required to collect word frequencies")]
    MissingEndMarker,

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// The unknown-token symbol is not present in the vocabulary.
    #[error("unknown-token symbol {0:?} is not in the vocabulary")]
    UnknownTokenMissing(CompactString),

    /// A token id has no symbol in the vocabulary.
    #[error("unknown token id: {0}")]
    UnknownToken(u64),

    /// An n-gram order was not usable.
    #[error("invalid n-gram order: {0}")]
    InvalidOrder(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for wordmerge operations.
pub type WMResult<T> = core::result::Result<T, WordmergeError>;

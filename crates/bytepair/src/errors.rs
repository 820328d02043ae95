//! # Error Types

use compact_str::CompactString;

/// Errors from bytepair operations.
#[derive(Debug, thiserror::Error)]
pub enum BytePairError {
    /// Decoded bytes are not valid UTF-8.
    #[error("decoded bytes are not valid utf-8: {0}")]
    Decode(#[from] core::str::Utf8Error),

    /// Encoding produced a token which is not in the vocabulary.
    #[error("token not found in vocabulary: {token:?}")]
    TokenNotFound {
        /// The unregistered token.
        token: CompactString,
    },

    /// Decoding was given an id which is not in the vocabulary.
    #[error("id not found in vocabulary: {id}")]
    IdNotFound {
        /// The unregistered id.
        id: u64,
    },

    /// A token contains a character that no byte renders to.
    #[error("malformed token: {token:?}")]
    MalformedToken {
        /// The offending token.
        token: CompactString,
    },

    /// Vocab size exceeds the capacity of the id type.
    #[error("vocab size ({size}) exceeds id type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary or merge table data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for bytepair operations.
pub type BPResult<T> = core::result::Result<T, BytePairError>;

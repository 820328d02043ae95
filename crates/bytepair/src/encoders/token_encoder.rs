//! # Token Encoder Trait

use crate::{
    errors::BPResult,
    types::{IdType, Token},
};

/// The ids of an encoded text, and the final token sequence they map from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeDetails<T: IdType> {
    /// The token ids; ``ids[i]`` is the id of ``tokens[i]``.
    pub ids: Vec<T>,

    /// The final token sequence.
    pub tokens: Vec<Token>,
}

/// A trait for token encoders.
pub trait TokenEncoder<T: IdType>: Send + Sync {
    /// Encode text, returning both the ids and the token sequence.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A `Result` containing the [`EncodeDetails`], or
    /// [`crate::errors::BytePairError::TokenNotFound`].
    fn try_encode_with_details(
        &self,
        text: &str,
    ) -> BPResult<EncodeDetails<T>>;

    /// Encode text into ids, returning an error if the encoding fails.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A `Result` containing the vector of ids or an error.
    fn try_encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> BPResult<Vec<T>> {
        Ok(self.try_encode_with_details(text.as_ref())?.ids)
    }

    /// Encode a batch of text into ids, returning an error if any encoding fails.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A `Result` containing the vector of id vectors, in batch order.
    fn try_encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> BPResult<Vec<Vec<T>>> {
        batch.iter().map(|s| self.try_encode(s)).collect()
    }
}

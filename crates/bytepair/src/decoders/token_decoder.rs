//! # Token Decoder Trait

use crate::{
    codec::{bytes_to_text, bytes_to_text_lossy},
    errors::BPResult,
    types::IdType,
};

/// Trait for token decoders.
pub trait TokenDecoder<T: IdType>: Send + Sync {
    /// Decode ids, appending their bytes to a target buffer.
    ///
    /// ## Arguments
    /// * `ids` - A slice of ids to decode.
    /// * `buf` - The target byte buffer.
    ///
    /// ## Returns
    /// [`crate::errors::BytePairError::IdNotFound`] on the first unknown id.
    fn try_decode_append(
        &self,
        ids: &[T],
        buf: &mut Vec<u8>,
    ) -> BPResult<()>;

    /// Decodes ids into bytes.
    ///
    /// ## Arguments
    /// * `ids` - A slice of ids to decode.
    ///
    /// ## Returns
    /// A `Result` containing the decoded bytes.
    fn try_decode_to_bytes(
        &self,
        ids: &[T],
    ) -> BPResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(ids.len() * 2);
        self.try_decode_append(ids, &mut buf)?;
        Ok(buf)
    }

    /// Decodes ids into a string.
    ///
    /// ## Arguments
    /// * `ids` - A slice of ids to decode.
    ///
    /// ## Returns
    /// A `Result` containing the text, or
    /// [`crate::errors::BytePairError::Decode`] if the bytes are not valid UTF-8.
    fn try_decode_to_string(
        &self,
        ids: &[T],
    ) -> BPResult<String> {
        bytes_to_text(self.try_decode_to_bytes(ids)?)
    }

    /// Decodes ids into a string, replacing invalid UTF-8 with U+FFFD.
    ///
    /// Unknown ids are still errors.
    fn decode_to_string_lossy(
        &self,
        ids: &[T],
    ) -> BPResult<String> {
        Ok(bytes_to_text_lossy(self.try_decode_to_bytes(ids)?))
    }

    /// Decodes a batch of id sequences into strings.
    ///
    /// ## Arguments
    /// * `batch` - A slice of id sequences.
    ///
    /// ## Returns
    /// A `Result` containing the texts, in batch order.
    fn try_decode_batch_to_strings<S: AsRef<[T]> + Sync>(
        &self,
        batch: &[S],
    ) -> BPResult<Vec<String>> {
        batch
            .iter()
            .map(|ids| self.try_decode_to_string(ids.as_ref()))
            .collect()
    }
}

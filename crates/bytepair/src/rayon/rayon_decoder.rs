//! # Parallel Decoder

use crate::{decoders::TokenDecoder, errors::BPResult, types::IdType};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches; single sequences pass through.
#[derive(Debug, Clone)]
pub struct ParallelRayonDecoder<T: IdType, D: TokenDecoder<T>> {
    /// Wrapped decoder.
    pub inner: D,

    _marker: core::marker::PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: IdType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel token decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonDecoder` instance.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: core::marker::PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: IdType,
    D: TokenDecoder<T>,
{
    fn try_decode_append(
        &self,
        ids: &[T],
        buf: &mut Vec<u8>,
    ) -> BPResult<()> {
        self.inner.try_decode_append(ids, buf)
    }

    fn try_decode_batch_to_strings<S: AsRef<[T]> + Sync>(
        &self,
        batch: &[S],
    ) -> BPResult<Vec<String>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|ids| self.inner.try_decode_to_string(ids.as_ref()))
            .collect()
    }
}

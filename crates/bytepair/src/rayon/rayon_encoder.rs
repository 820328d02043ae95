//! # Parallel Encoder

use crate::{
    encoders::{EncodeDetails, TokenEncoder},
    errors::BPResult,
    types::IdType,
};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches; single texts pass through.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T: IdType, E: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: core::marker::PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: IdType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonEncoder` instance.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: core::marker::PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: IdType,
    E: TokenEncoder<T>,
{
    fn try_encode_with_details(
        &self,
        text: &str,
    ) -> BPResult<EncodeDetails<T>> {
        self.inner.try_encode_with_details(text)
    }

    fn try_encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> BPResult<Vec<Vec<T>>> {
        use rayon::prelude::*;

        let results: Vec<BPResult<Vec<T>>> = batch
            .par_iter()
            .map(|text| self.inner.try_encode(text))
            .collect();

        results.into_iter().collect()
    }
}

//! # Dictionary ``{ T -> Vec<u8> }`` Token Decoder

use crate::{
    codec::append_token_bytes,
    decoders::TokenDecoder,
    errors::{BPResult, BytePairError},
    types::IdType,
    vocab::{BpeModel, TokenVocab},
};

fn id_not_found<T: IdType>(id: T) -> BytePairError {
    BytePairError::IdNotFound {
        id: id.to_u64().unwrap_or(u64::MAX),
    }
}

/// Decode ids against a vocabulary, expanding each token as it is visited.
///
/// ## Arguments
/// * `ids` - the ids to decode.
/// * `vocab` - the vocabulary.
/// * `buf` - the target byte buffer.
pub fn decode_append<T: IdType>(
    ids: &[T],
    vocab: &TokenVocab<T>,
    buf: &mut Vec<u8>,
) -> BPResult<()> {
    for &id in ids {
        let token = vocab.get_token(id).ok_or_else(|| id_not_found(id))?;
        append_token_bytes(token, buf)?;
    }
    Ok(())
}

/// A token dictionary [`TokenDecoder<T>`].
///
/// Every token's bytes are expanded once, up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryDecoder<T: IdType> {
    /// ``token_bytes[id]`` is the byte expansion of token ``id``.
    token_bytes: Vec<Vec<u8>>,

    marker: core::marker::PhantomData<T>,
}

impl<T: IdType> DictionaryDecoder<T> {
    /// Build a [`DictionaryDecoder`] from a [`TokenVocab`].
    ///
    /// ## Returns
    /// The decoder, or [`BytePairError::MalformedToken`] if any token has no byte expansion.
    pub fn from_vocab(vocab: &TokenVocab<T>) -> BPResult<Self> {
        let token_bytes = vocab
            .tokens()
            .map(|token| {
                let mut bytes = Vec::with_capacity(token.len());
                append_token_bytes(token, &mut bytes)?;
                Ok(bytes)
            })
            .collect::<BPResult<Vec<_>>>()?;

        Ok(Self {
            token_bytes,
            marker: core::marker::PhantomData,
        })
    }

    /// Build a [`DictionaryDecoder`] from a [`BpeModel`].
    pub fn from_model<M>(model: M) -> BPResult<Self>
    where
        M: AsRef<BpeModel<T>>,
    {
        Self::from_vocab(model.as_ref().vocab())
    }

    /// The number of decodable ids.
    pub fn len(&self) -> usize {
        self.token_bytes.len()
    }

    /// Is the dictionary empty?
    pub fn is_empty(&self) -> bool {
        self.token_bytes.is_empty()
    }
}

impl<T: IdType> TokenDecoder<T> for DictionaryDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ids, buf)))]
    fn try_decode_append(
        &self,
        ids: &[T],
        buf: &mut Vec<u8>,
    ) -> BPResult<()> {
        for &id in ids {
            let bytes = id
                .to_usize()
                .and_then(|idx| self.token_bytes.get(idx))
                .ok_or_else(|| id_not_found(id))?;
            buf.extend_from_slice(bytes);
        }
        Ok(())
    }
}

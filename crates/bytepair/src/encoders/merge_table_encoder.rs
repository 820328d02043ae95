//! # Merge Table Replay Encoder
//!
//! Replays every learned rule, in training order, as one full
//! greedy left-to-right pass over the byte-token sequence.

use std::sync::Arc;

use crate::{
    encoders::{EncodeDetails, TokenEncoder},
    errors::{BPResult, BytePairError},
    training::TokenSeq,
    types::{IdType, Token},
    vocab::{BpeModel, MergeTable, TokenVocab},
};

/// Segment text by replaying a merge table over its byte tokens.
pub fn encode_tokens(
    text: &str,
    merges: &MergeTable,
) -> Vec<Token> {
    let mut seq = TokenSeq::from_text(text);
    for rule in merges {
        if seq.len() < 2 {
            // No rule can match a single token.
            break;
        }
        seq.merge_pair(rule.left(), rule.right(), rule.merged());
    }
    seq.into_tokens()
}

/// Map tokens to their vocabulary ids.
///
/// ## Returns
/// The ids, or [`BytePairError::TokenNotFound`] for the first unregistered token.
pub fn tokens_to_ids<T: IdType>(
    tokens: &[Token],
    vocab: &TokenVocab<T>,
) -> BPResult<Vec<T>> {
    tokens
        .iter()
        .map(|token| {
            vocab
                .get_id(token)
                .ok_or_else(|| BytePairError::TokenNotFound {
                    token: token.clone(),
                })
        })
        .collect()
}

/// A [`TokenEncoder`] which replays a [`BpeModel`]'s merge table.
#[derive(Debug, Clone)]
pub struct MergeTableEncoder<T: IdType> {
    model: Arc<BpeModel<T>>,
}

impl<T: IdType> MergeTableEncoder<T> {
    /// Build an encoder for a model.
    ///
    /// ## Arguments
    /// * `model` - The trained model; an owned model or a shared `Arc`.
    pub fn new<M>(model: M) -> Self
    where
        M: Into<Arc<BpeModel<T>>>,
    {
        Self {
            model: model.into(),
        }
    }

    /// Get the model.
    pub fn model(&self) -> &Arc<BpeModel<T>> {
        &self.model
    }
}

impl<T: IdType> TokenEncoder<T> for MergeTableEncoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn try_encode_with_details(
        &self,
        text: &str,
    ) -> BPResult<EncodeDetails<T>> {
        let tokens = encode_tokens(text, self.model.merges());
        let ids = tokens_to_ids(&tokens, self.model.vocab())?;
        Ok(EncodeDetails { ids, tokens })
    }
}

//! # `bytepair` Byte-Level BPE Tokenizer Engine
//!
//! This crate trains and applies byte-level Byte Pair Encoding (BPE) tokenizers.
//!
//! Text is tokenized as one flat stream of byte tokens; there is no
//! pre-tokenization. Every byte is always representable, so any text
//! encodes, and decoding reverses encoding for any text which does not
//! itself contain ``<0xHH>`` escape text.
//!
//! Literal escape text is not distinguished from an escaped byte: merges
//! can assemble ``"<0x41>"`` from its characters, and that token decodes to
//! ``"A"``. A merge may also spell an existing token, such as ``"<0x0a>"``;
//! the rule is still recorded but the vocabulary does not grow.
//!
//! See:
//! * [`training`] to learn a vocabulary and merge table from text.
//! * [`encoders`] to encode text into ids.
//! * [`decoders`] to decode ids into text.
//! * [`vocab`] to manage token vocabularies and merge tables.
//! * [`codec`] for the canonical byte token rendering.
//!
//! ## Tokens
//!
//! A token is either one byte, rendered as itself when it is printable ASCII
//! (``0x20..=0x7E``) and as ``<0xHH>`` otherwise; or the concatenation of two
//! tokens joined by a merge.
//!
//! ## Example
//!
//! ```rust
//! use bytepair::{decode, encode_with_details, train_bpe};
//!
//! let results = train_bpe::<u32>("low lower lowest", 256 + 8).unwrap();
//! assert_eq!(results.vocab.len(), 256 + 8);
//!
//! let details = encode_with_details("lowest", &results.vocab, &results.merges).unwrap();
//! assert!(details.ids.len() < "lowest".len());
//!
//! let text = decode(&details.ids, &results.vocab).unwrap();
//! assert_eq!(text, "lowest");
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod codec;
pub mod decoders;
pub mod encoders;
pub mod errors;
#[cfg(feature = "serde")]
pub mod io;
#[cfg(feature = "rayon")]
pub mod rayon;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{BPResult, BytePairError};
#[doc(inline)]
pub use types::{IdType, Token};

use crate::{
    codec::bytes_to_text,
    encoders::{EncodeDetails, encode_tokens, tokens_to_ids},
    training::{BpeTrainerOptions, TrainResults, TrainStep},
    vocab::{MergeTable, TokenVocab},
};

/// Train a vocabulary and merge table on text.
///
/// ## Arguments
/// * `text` - the training text.
/// * `vocab_size` - the target vocabulary size; values up to 256 learn no merges.
///
/// ## Returns
/// A `Result` containing the [`TrainResults`], with the full step history.
pub fn train_bpe<T: IdType>(
    text: &str,
    vocab_size: usize,
) -> BPResult<TrainResults<T>> {
    train_bpe_with_observer(text, vocab_size, |_| {})
}

/// Train a vocabulary and merge table on text, observing each step.
///
/// ## Arguments
/// * `text` - the training text.
/// * `vocab_size` - the target vocabulary size.
/// * `on_step` - called synchronously with each [`TrainStep`], in order.
///
/// ## Returns
/// A `Result` containing the [`TrainResults`], with the full step history.
pub fn train_bpe_with_observer<T, F>(
    text: &str,
    vocab_size: usize,
    on_step: F,
) -> BPResult<TrainResults<T>>
where
    T: IdType,
    F: FnMut(&TrainStep),
{
    let mut trainer = BpeTrainerOptions::new(vocab_size).init();
    trainer.update_from_text(text);
    trainer.train_with_observer(on_step)
}

/// Encode text into ids.
///
/// ## Arguments
/// * `text` - the text to encode.
/// * `vocab` - the vocabulary.
/// * `merges` - the merge table, replayed in training order.
///
/// ## Returns
/// The ids, or [`BytePairError::TokenNotFound`].
pub fn encode<T: IdType>(
    text: &str,
    vocab: &TokenVocab<T>,
    merges: &MergeTable,
) -> BPResult<Vec<T>> {
    Ok(encode_with_details(text, vocab, merges)?.ids)
}

/// Encode text into ids, also returning the final token sequence.
///
/// ## Arguments
/// * `text` - the text to encode.
/// * `vocab` - the vocabulary.
/// * `merges` - the merge table, replayed in training order.
///
/// ## Returns
/// The [`EncodeDetails`], or [`BytePairError::TokenNotFound`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(text, vocab, merges)))]
pub fn encode_with_details<T: IdType>(
    text: &str,
    vocab: &TokenVocab<T>,
    merges: &MergeTable,
) -> BPResult<EncodeDetails<T>> {
    let tokens = encode_tokens(text, merges);
    let ids = tokens_to_ids(&tokens, vocab)?;
    Ok(EncodeDetails { ids, tokens })
}

/// Decode ids into text.
///
/// ## Arguments
/// * `ids` - the ids to decode.
/// * `vocab` - the vocabulary.
///
/// ## Returns
/// The text; or [`BytePairError::IdNotFound`] for an unknown id;
/// or [`BytePairError::Decode`] if the bytes are not valid UTF-8.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(ids, vocab)))]
pub fn decode<T: IdType>(
    ids: &[T],
    vocab: &TokenVocab<T>,
) -> BPResult<String> {
    let mut buf = Vec::with_capacity(ids.len() * 2);
    decoders::decode_append(ids, vocab, &mut buf)?;
    bytes_to_text(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let text = "Hello, world!";
        for vocab_size in [256, 260, 300] {
            let results = train_bpe::<u32>(text, vocab_size).unwrap();
            let ids = encode(text, &results.vocab, &results.merges).unwrap();
            assert_eq!(decode(&ids, &results.vocab).unwrap(), text);
        }
    }

    #[test]
    fn test_encode_details_agree() {
        let results = train_bpe::<u16>("abababab cdcd", 256 + 4).unwrap();
        let details = encode_with_details("abab cd", &results.vocab, &results.merges).unwrap();
        assert_eq!(
            details.ids,
            encode("abab cd", &results.vocab, &results.merges).unwrap()
        );
        for (token, id) in details.tokens.iter().zip(&details.ids) {
            assert_eq!(results.vocab.get_id(token), Some(*id));
        }
    }

    #[test]
    fn test_observer() {
        let mut indices = Vec::new();
        let results = train_bpe_with_observer::<u32, _>("aaabdaaabac", 259, |step| {
            indices.push(step.index)
        })
        .unwrap();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(results.steps.len(), 3);
    }

    #[test]
    fn test_decode_errors() {
        let results = train_bpe::<u32>("abc", 256).unwrap();
        assert!(matches!(
            decode(&[99999], &results.vocab),
            Err(BytePairError::IdNotFound { id: 99999 })
        ));
        assert!(matches!(
            decode(&[0xFF], &results.vocab),
            Err(BytePairError::Decode(_))
        ));
    }
}

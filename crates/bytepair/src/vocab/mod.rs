//! # Vocabulary
//!
//! This module provides the token vocabulary and the learned merge table.
//!
//! * [`TokenVocab`] - a dense, insertion-ordered ``{ Token <-> T }`` bijection.
//! * [`MergeTable`] - the ordered ``(left, right) -> merged`` rules.
//! * [`BpeModel`] - a validated pairing of the two; what training produces,
//!   and what encoders and decoders consume.

pub mod bpe_model;
pub mod merge_table;
pub mod token_vocab;

#[doc(inline)]
pub use bpe_model::{BpeModel, try_validate_merge_table};
#[doc(inline)]
pub use merge_table::{MergeRule, MergeTable};
#[doc(inline)]
pub use token_vocab::{TokenVocab, try_vocab_size};

//! # Token Encoders
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bytepair::{
//!     encoders::{MergeTableEncoder, TokenEncoder},
//!     training::BpeTrainerOptions,
//! };
//!
//! let mut trainer = BpeTrainerOptions::new(280).init();
//! trainer.update_from_text("the cat sat on the mat");
//! let model = Arc::new(trainer.train::<u32>().unwrap().into_model());
//!
//! let encoder = MergeTableEncoder::new(model.clone());
//! let ids = encoder.try_encode("the mat").unwrap();
//! assert!(ids.len() < "the mat".len());
//! ```

mod merge_table_encoder;
mod token_encoder;

#[doc(inline)]
pub use merge_table_encoder::{MergeTableEncoder, encode_tokens, tokens_to_ids};
#[doc(inline)]
pub use token_encoder::{EncodeDetails, TokenEncoder};

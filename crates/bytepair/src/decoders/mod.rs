//! # Token Decoders
//!
//! Decoding concatenates each id's token bytes; the result is only
//! turned into text at the end, so multi-byte characters split across
//! several tokens decode correctly.
//!
//! ## Example
//!
//! ```rust
//! use bytepair::{
//!     decoders::{DictionaryDecoder, TokenDecoder},
//!     training::BpeTrainerOptions,
//! };
//!
//! let mut trainer = BpeTrainerOptions::new(270).init();
//! trainer.update_from_text("hello hello hello");
//! let model = trainer.train::<u32>().unwrap().into_model();
//!
//! let decoder = DictionaryDecoder::from_model(&model).unwrap();
//! assert_eq!(decoder.try_decode_to_string(&[104, 105]).unwrap(), "hi");
//! ```

mod dictionary_decoder;
mod token_decoder;

#[doc(inline)]
pub use dictionary_decoder::{DictionaryDecoder, decode_append};
#[doc(inline)]
pub use token_decoder::TokenDecoder;

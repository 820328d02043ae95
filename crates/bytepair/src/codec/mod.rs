//! # Byte Codec
//!
//! Conversion between text, UTF-8 bytes, and canonical byte tokens.
//!
//! Decoding through [`bytes_to_text`] is strict; invalid UTF-8 is reported
//! as [`crate::errors::BytePairError::Decode`]. Callers which prefer
//! replacement characters use [`bytes_to_text_lossy`].
//!
//! Token rendering is not injective over arbitrary text: a token spelled
//! ``<0xHH>`` always reads back as byte ``0xHH``, even when it was built
//! from the literal characters of that escape.

pub mod byte_codec;

#[doc(inline)]
pub use byte_codec::{
    U8_SIZE,
    append_token_bytes,
    byte_token,
    bytes_to_byte_tokens,
    bytes_to_text,
    bytes_to_text_lossy,
    canonical_byte_tokens,
    text_to_byte_tokens,
    text_to_bytes,
    token_to_bytes,
};

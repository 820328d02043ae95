//! # Byte Token Codec
//!
//! Each byte renders to exactly one canonical token:
//! * printable ASCII bytes (``0x20..=0x7E``) render as the character itself,
//! * every other byte renders as the 6-character escape ``<0xHH>`` (lowercase hex).
//!
//! Merged tokens are plain concatenations of these renderings, so
//! [`token_to_bytes`] recovers the bytes with a greedy left-to-right scan.
//! The scan reads any ``<0xHH>`` run as an escaped byte, including one merged
//! from literal ``<``, ``0``, ``x`` characters.

use crate::{
    errors::{BPResult, BytePairError},
    types::Token,
};

/// The size of the u8 space.
pub const U8_SIZE: usize = u8::MAX as usize + 1;

/// The length of an escaped ``<0xHH>`` byte token.
pub const ESCAPED_TOKEN_LEN: usize = 6;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Is this byte rendered as itself?
#[inline(always)]
pub fn is_printable_ascii(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

/// Encode text to its UTF-8 bytes.
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode UTF-8 bytes to text.
///
/// ## Returns
/// The decoded text, or [`BytePairError::Decode`] if the bytes are not valid UTF-8.
pub fn bytes_to_text(bytes: Vec<u8>) -> BPResult<String> {
    String::from_utf8(bytes).map_err(|e| BytePairError::Decode(e.utf8_error()))
}

/// Decode UTF-8 bytes to text, substituting U+FFFD for invalid sequences.
pub fn bytes_to_text_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Append the canonical rendering of a byte to a target string.
#[inline]
pub fn push_byte_rendering(
    byte: u8,
    target: &mut Token,
) {
    if is_printable_ascii(byte) {
        target.push(byte as char);
    } else {
        target.push_str("<0x");
        target.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        target.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
        target.push('>');
    }
}

/// Render a single byte as its canonical token.
pub fn byte_token(byte: u8) -> Token {
    let mut token = Token::default();
    push_byte_rendering(byte, &mut token);
    token
}

/// The 256 canonical byte tokens, in byte order.
pub fn canonical_byte_tokens() -> Vec<Token> {
    (0..=u8::MAX).map(byte_token).collect()
}

/// Render text as one canonical token per UTF-8 byte.
pub fn text_to_byte_tokens(text: &str) -> Vec<Token> {
    bytes_to_byte_tokens(text.as_bytes())
}

/// Render bytes as one canonical token per byte.
pub fn bytes_to_byte_tokens(bytes: &[u8]) -> Vec<Token> {
    bytes.iter().map(|&b| byte_token(b)).collect()
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Parse an escaped ``<0xHH>`` byte at the start of `window`, if present.
fn parse_escape(window: &[u8]) -> Option<u8> {
    match window {
        [b'<', b'0', b'x', hi, lo, b'>', ..] => Some((hex_value(*hi)? << 4) | hex_value(*lo)?),
        _ => None,
    }
}

/// Append the bytes of a (possibly merged) token to a target buffer.
///
/// ## Arguments
/// * `token` - the token to expand.
/// * `buf` - the target byte buffer.
///
/// ## Returns
/// [`BytePairError::MalformedToken`] if the token contains a character
/// outside printable ASCII, which no byte renders to.
pub fn append_token_bytes(
    token: &str,
    buf: &mut Vec<u8>,
) -> BPResult<()> {
    let raw = token.as_bytes();
    let mut i = 0;
    while i < raw.len() {
        if let Some(byte) = parse_escape(&raw[i..]) {
            buf.push(byte);
            i += ESCAPED_TOKEN_LEN;
        } else if is_printable_ascii(raw[i]) {
            buf.push(raw[i]);
            i += 1;
        } else {
            return Err(BytePairError::MalformedToken {
                token: token.into(),
            });
        }
    }
    Ok(())
}

/// Expand a (possibly merged) token to its bytes.
pub fn token_to_bytes(token: &str) -> BPResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(token.len());
    append_token_bytes(token, &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_token_rendering() {
        assert_eq!(byte_token(b'a'), "a");
        assert_eq!(byte_token(b' '), " ");
        assert_eq!(byte_token(b'~'), "~");
        assert_eq!(byte_token(b'\n'), "<0x0a>");
        assert_eq!(byte_token(0x7F), "<0x7f>");
        assert_eq!(byte_token(0x1F), "<0x1f>");
        assert_eq!(byte_token(0xFF), "<0xff>");
        assert_eq!(byte_token(0x00), "<0x00>");
    }

    #[test]
    fn test_canonical_byte_tokens() {
        let tokens = canonical_byte_tokens();
        assert_eq!(tokens.len(), U8_SIZE);

        let mut unique = tokens.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), U8_SIZE);

        for (idx, token) in tokens.iter().enumerate() {
            if is_printable_ascii(idx as u8) {
                assert_eq!(token.len(), 1);
            } else {
                assert_eq!(token.len(), ESCAPED_TOKEN_LEN);
            }
            assert_eq!(token_to_bytes(token).unwrap(), vec![idx as u8]);
        }
    }

    #[test]
    fn test_unicode_byte_tokens() {
        // "世界" := [E4 B8 96] [E7 95 8C]
        let tokens = text_to_byte_tokens("世界");
        assert_eq!(
            tokens,
            vec!["<0xe4>", "<0xb8>", "<0x96>", "<0xe7>", "<0x95>", "<0x8c>"]
        );

        let mut bytes = Vec::new();
        for token in &tokens {
            append_token_bytes(token, &mut bytes).unwrap();
        }
        assert_eq!(bytes_to_text(bytes).unwrap(), "世界");
    }

    #[test]
    fn test_merged_token_to_bytes() {
        assert_eq!(token_to_bytes("ab").unwrap(), b"ab".to_vec());
        assert_eq!(
            token_to_bytes("<0xe4><0xb8>x").unwrap(),
            vec![0xE4, 0xB8, b'x']
        );
        assert_eq!(token_to_bytes("a<0x0a>").unwrap(), vec![b'a', b'\n']);

        // Near-misses of the escape syntax are literal characters.
        assert_eq!(token_to_bytes("<0x4").unwrap(), b"<0x4".to_vec());
        assert_eq!(token_to_bytes("<0xzz>").unwrap(), b"<0xzz>".to_vec());
        assert_eq!(token_to_bytes("<<0x0a>").unwrap(), vec![b'<', b'\n']);
    }

    #[test]
    fn test_malformed_token() {
        assert!(matches!(
            token_to_bytes("a\tb"),
            Err(BytePairError::MalformedToken { .. })
        ));
        assert!(matches!(
            token_to_bytes("é"),
            Err(BytePairError::MalformedToken { .. })
        ));
    }

    #[test]
    fn test_text_bytes_round_trip() {
        for text in ["", "hello", "caf\u{00e9}", "emoji: \u{1f600}"] {
            assert_eq!(bytes_to_text(text_to_bytes(text)).unwrap(), text);
        }
    }

    #[test]
    fn test_bytes_to_text_policies() {
        let bytes = vec![0x61, 0x62, 0xFF, 0x28];
        assert!(matches!(
            bytes_to_text(bytes.clone()),
            Err(BytePairError::Decode(_))
        ));
        assert_eq!(bytes_to_text_lossy(bytes), "ab\u{FFFD}(");
        assert_eq!(bytes_to_text_lossy(b"ab".to_vec()), "ab");
    }
}

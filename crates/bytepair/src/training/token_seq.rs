//! # Token Sequence Buffer

use crate::{codec::text_to_byte_tokens, types::Token};

/// A mutable segmentation of one input text.
///
/// Starts as one canonical token per byte; iteratively coarsened by merges
/// during training and encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenSeq {
    tokens: Vec<Token>,
}

impl From<Vec<Token>> for TokenSeq {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl TokenSeq {
    /// Create a new sequence from tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens.into_iter().map(|t| Token::from(t.as_ref())).collect(),
        }
    }

    /// Create the byte-level sequence of a text.
    ///
    /// # Arguments
    /// * `text` - the text to turn into UTF-8 bytes, and render as byte tokens.
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: text_to_byte_tokens(text),
        }
    }

    /// View the tokens as a slice.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Take the tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Get the length of the sequence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is this sequence empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get an iterator over adjacent ``(left, right)`` windows of this sequence.
    pub fn pairs(&self) -> impl Iterator<Item = (&Token, &Token)> + '_ {
        self.tokens.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Merge all non-overlapping occurrences of ``(left, right) -> merged``.
    ///
    /// Matches are taken greedily, left to right; after a match at ``(i, i+1)``
    /// scanning resumes at ``i+2``.
    ///
    /// # Arguments
    /// * `left` - the left token of the pair.
    /// * `right` - the right token of the pair.
    /// * `merged` - the token to replace the pair with.
    ///
    /// # Returns
    /// The number of replaced occurrences.
    pub fn merge_pair(
        &mut self,
        left: &str,
        right: &str,
        merged: &Token,
    ) -> usize {
        let n = self.tokens.len();
        if n < 2 {
            // Single-token sequences have no pairs to merge.
            return 0;
        }

        let mut new_tokens: Vec<Token> = Vec::with_capacity(n);
        let mut replaced = 0;

        let mut tokens = core::mem::take(&mut self.tokens).into_iter().peekable();
        while let Some(current) = tokens.next() {
            if current == left && tokens.peek().is_some_and(|next| next == right) {
                // Skip 'right'.
                tokens.next();
                new_tokens.push(merged.clone());
                replaced += 1;
            } else {
                new_tokens.push(current);
            }
        }

        self.tokens = new_tokens;
        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let seq = TokenSeq::from_text("hi\n");
        assert_eq!(seq.tokens(), &["h", "i", "<0x0a>"]);
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());

        assert!(TokenSeq::from_text("").is_empty());
    }

    #[test]
    fn test_seq_pairs() {
        let seq = TokenSeq::from_tokens(["a", "b", "c"]);
        let pairs: Vec<(&str, &str)> = seq.pairs().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        assert_eq!(pairs, vec![("a", "b"), ("b", "c")]);
    }

    #[test]
    fn test_merge_pair_non_overlapping() {
        let mut seq = TokenSeq::from_tokens(["a", "a", "a"]);
        let replaced = seq.merge_pair("a", "a", &"aa".into());
        assert_eq!(replaced, 1);
        assert_eq!(seq.tokens(), &["aa", "a"]);

        let mut seq = TokenSeq::from_tokens(["a", "a", "a", "a"]);
        assert_eq!(seq.merge_pair("a", "a", &"aa".into()), 2);
        assert_eq!(seq.tokens(), &["aa", "aa"]);
    }

    #[test]
    fn test_merge_pair() {
        let mut seq = TokenSeq::from_tokens(["a", "b", "c", "a", "b", "b", "a"]);
        assert_eq!(seq.merge_pair("a", "b", &"ab".into()), 2);
        assert_eq!(seq.tokens(), &["ab", "c", "ab", "b", "a"]);

        // No match leaves the sequence unchanged.
        assert_eq!(seq.merge_pair("x", "y", &"xy".into()), 0);
        assert_eq!(seq.tokens(), &["ab", "c", "ab", "b", "a"]);
    }

    #[test]
    fn test_merge_pair_structural() {
        // "a" + "bc" and "ab" + "c" share a concatenation; only the exact pair merges.
        let mut seq = TokenSeq::from_tokens(["ab", "c", "a", "bc"]);
        assert_eq!(seq.merge_pair("a", "bc", &"abc".into()), 1);
        assert_eq!(seq.tokens(), &["ab", "c", "abc"]);
    }

    #[test]
    fn test_merge_pair_short() {
        let mut seq = TokenSeq::from_tokens(["a"]);
        assert_eq!(seq.merge_pair("a", "a", &"aa".into()), 0);
        assert_eq!(seq.tokens(), &["a"]);
    }
}

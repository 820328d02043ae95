//! # Token ``{ Token <-> T }`` Vocabulary

use crate::{
    codec::{U8_SIZE, canonical_byte_tokens},
    errors::{BPResult, BytePairError},
    types::{BPHashMap, IdType, Token, hash_map_with_capacity},
};

/// Validates that `T` can represent every id of a `vocab_size` vocabulary.
pub fn try_vocab_size<T: IdType>(vocab_size: usize) -> BPResult<usize> {
    if vocab_size > 0 && T::from_usize(vocab_size - 1).is_none() {
        Err(BytePairError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

/// Bidirectional ``{ Token <-> T }`` vocabulary.
///
/// Ids are dense, assigned in insertion order from ``0``, and never reassigned.
/// Both directions are kept in sync by [`TokenVocab::add_token`];
/// there is no other mutation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenVocab<T: IdType = u32> {
    /// ``entries[id] == (token, id)``.
    entries: Vec<(Token, T)>,

    /// Map of ``{ Token -> T }``.
    ids: BPHashMap<Token, T>,
}

impl<T: IdType> Default for TokenVocab<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            ids: hash_map_with_capacity(0),
        }
    }
}

impl<T: IdType> TokenVocab<T> {
    /// Build a vocabulary holding the 256 canonical byte tokens.
    ///
    /// Byte ``b`` is assigned id ``b``.
    ///
    /// ## Returns
    /// The vocabulary, or [`BytePairError::VocabSizeOverflow`] if `T` cannot hold 256 ids.
    pub fn with_byte_tokens() -> BPResult<Self> {
        let mut vocab = Self {
            entries: Vec::with_capacity(U8_SIZE),
            ids: hash_map_with_capacity(U8_SIZE),
        };
        for token in canonical_byte_tokens() {
            vocab.add_token(&token)?;
        }
        Ok(vocab)
    }

    /// Rebuild a vocabulary from ``(token, id)`` entries.
    ///
    /// ## Arguments
    /// * `entries` - entries in id order; ids must be exactly ``0..len``.
    ///
    /// ## Returns
    /// The vocabulary, or [`BytePairError::VocabConflict`] for non-dense ids or duplicate tokens.
    pub fn from_entries<I, S>(entries: I) -> BPResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for (token, id) in entries {
            let token = token.as_ref();
            let expected = vocab.len();
            if id.to_usize() != Some(expected) {
                return Err(BytePairError::VocabConflict(format!(
                    "vocab entry {token:?} has id {id}, expected {expected}"
                )));
            }
            if vocab.contains(token) {
                return Err(BytePairError::VocabConflict(format!(
                    "duplicate vocab entry {token:?} at id {id}"
                )));
            }
            vocab.add_token(token)?;
        }
        Ok(vocab)
    }

    /// Register a token.
    ///
    /// Idempotent: a present token returns its existing id.
    ///
    /// ## Arguments
    /// * `token` - the token to register.
    ///
    /// ## Returns
    /// The token's id, or [`BytePairError::VocabSizeOverflow`] if `T` has no id left.
    pub fn add_token(
        &mut self,
        token: &str,
    ) -> BPResult<T> {
        if let Some(&id) = self.ids.get(token) {
            return Ok(id);
        }

        let size = self.entries.len();
        let id = T::from_usize(size).ok_or(BytePairError::VocabSizeOverflow { size: size + 1 })?;

        let token = Token::from(token);
        self.ids.insert(token.clone(), id);
        self.entries.push((token, id));

        Ok(id)
    }

    /// Look up the id of a token.
    #[inline]
    pub fn get_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.ids.get(token).copied()
    }

    /// Look up the token of an id.
    #[inline]
    pub fn get_token(
        &self,
        id: T,
    ) -> Option<&Token> {
        self.entries.get(id.to_usize()?).map(|(token, _)| token)
    }

    /// Is this token registered?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.ids.contains_key(token)
    }

    /// The number of registered tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over ``(token, id)`` entries, in insertion (id) order.
    pub fn entries(&self) -> impl Iterator<Item = (&Token, T)> + '_ {
        self.entries.iter().map(|(token, id)| (token, *id))
    }

    /// Iterate over tokens, in id order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.entries.iter().map(|(token, _)| token)
    }
}

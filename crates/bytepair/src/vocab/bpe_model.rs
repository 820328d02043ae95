//! # BPE Model
//!
//! A [`TokenVocab`] paired with the [`MergeTable`] that built it.

use crate::{
    codec::canonical_byte_tokens,
    errors::{BPResult, BytePairError},
    types::{BPHashSet, IdType},
    vocab::{MergeTable, TokenVocab},
};

/// Validate that a [`TokenVocab`] and [`MergeTable`] are compatible.
///
/// - all 256 canonical byte tokens are in the vocab.
/// - for every ``(left, right) -> merged`` rule:
///   - `merged` is in the vocab,
///   - each parent is a byte token, or the target of an earlier rule.
///
/// ## Arguments
/// * `vocab` - The vocabulary to validate against.
/// * `merges` - The merge table to validate.
///
/// ## Returns
/// A `Result` indicating whether the two are compatible.
pub fn try_validate_merge_table<T: IdType>(
    vocab: &TokenVocab<T>,
    merges: &MergeTable,
) -> BPResult<()> {
    let mut defined: BPHashSet<&str> = BPHashSet::default();

    let byte_tokens = canonical_byte_tokens();
    for token in &byte_tokens {
        if !vocab.contains(token) {
            return Err(BytePairError::VocabConflict(format!(
                "byte token {token:?} is missing from the vocab"
            )));
        }
        defined.insert(token.as_str());
    }

    for (idx, rule) in merges.iter().enumerate() {
        for parent in [rule.left(), rule.right()] {
            if !defined.contains(parent.as_str()) {
                return Err(BytePairError::VocabConflict(format!(
                    "merge rule {idx} parent {parent:?} is not defined by an earlier rule"
                )));
            }
        }
        if !vocab.contains(rule.merged()) {
            return Err(BytePairError::VocabConflict(format!(
                "merge rule {idx} target {:?} is missing from the vocab",
                rule.merged()
            )));
        }
        defined.insert(rule.merged().as_str());
    }

    Ok(())
}

/// A trained vocabulary and its ordered merge table.
///
/// Immutable once built; share it with [`std::sync::Arc`] across encoders and decoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BpeModel<T: IdType = u32> {
    vocab: TokenVocab<T>,
    merges: MergeTable,
}

impl<T: IdType> BpeModel<T> {
    /// Initialize a [`BpeModel`].
    ///
    /// ## Arguments
    /// * `vocab` - The token vocabulary.
    /// * `merges` - The merge table, in training order.
    ///
    /// ## Returns
    /// A `Result` containing the model, or a [`BytePairError::VocabConflict`].
    pub fn init(
        vocab: TokenVocab<T>,
        merges: MergeTable,
    ) -> BPResult<Self> {
        try_validate_merge_table(&vocab, &merges)?;
        Ok(Self { vocab, merges })
    }

    /// Wrap the output of a training run; consistent by construction.
    pub(crate) fn from_trained(
        vocab: TokenVocab<T>,
        merges: MergeTable,
    ) -> Self {
        Self { vocab, merges }
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &TokenVocab<T> {
        &self.vocab
    }

    /// Get the merge table.
    pub fn merges(&self) -> &MergeTable {
        &self.merges
    }

    /// Split the model into its parts.
    pub fn into_parts(self) -> (TokenVocab<T>, MergeTable) {
        (self.vocab, self.merges)
    }
}

impl<T: IdType> AsRef<BpeModel<T>> for BpeModel<T> {
    fn as_ref(&self) -> &BpeModel<T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::MergeRule;

    fn byte_vocab() -> TokenVocab<u32> {
        TokenVocab::with_byte_tokens().unwrap()
    }

    #[test]
    fn test_valid_model() {
        let mut vocab = byte_vocab();
        let merges: MergeTable = [MergeRule::new("a", "b"), MergeRule::new("ab", "c")]
            .into_iter()
            .collect();
        for rule in &merges {
            vocab.add_token(rule.merged()).unwrap();
        }

        let model = BpeModel::init(vocab.clone(), merges.clone()).unwrap();
        assert_eq!(model.vocab(), &vocab);
        assert_eq!(model.merges(), &merges);

        let (v, m) = model.into_parts();
        assert_eq!(v, vocab);
        assert_eq!(m, merges);
    }

    #[test]
    fn test_missing_byte_tokens() {
        let vocab: TokenVocab<u32> = TokenVocab::from_entries(vec![("a", 0)]).unwrap();
        assert!(matches!(
            BpeModel::init(vocab, MergeTable::new()),
            Err(BytePairError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_missing_merge_target() {
        let merges: MergeTable = [MergeRule::new("a", "b")].into_iter().collect();
        assert!(matches!(
            BpeModel::init(byte_vocab(), merges),
            Err(BytePairError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_undefined_parent() {
        let mut vocab = byte_vocab();
        vocab.add_token("abc").unwrap();
        let merges: MergeTable = [MergeRule::new("ab", "c")].into_iter().collect();
        assert!(matches!(
            BpeModel::init(vocab, merges),
            Err(BytePairError::VocabConflict(_))
        ));
    }
}

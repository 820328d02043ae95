//! # Merge Selection and Rewriting

use core::cmp::Ordering;

use crate::{
    training::{PairCountTable, PairStats, TokenSeq},
    types::{Token, TokenPair},
};

/// A pair selected for merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The left token.
    pub left: Token,

    /// The right token.
    pub right: Token,

    /// The pair's count in the sequence it was selected from.
    pub count: usize,
}

/// Selection order; the greatest candidate is merged.
///
/// Highest count wins; ties go to the earliest first occurrence,
/// then to the lexicographically smallest ``(left, right)``.
fn candidate_order(
    a: (&TokenPair, &PairStats),
    b: (&TokenPair, &PairStats),
) -> Ordering {
    let (pair_a, stats_a) = a;
    let (pair_b, stats_b) = b;
    stats_a
        .count
        .cmp(&stats_b.count)
        .then_with(|| stats_b.first_index.cmp(&stats_a.first_index))
        .then_with(|| pair_b.cmp(pair_a))
}

/// Select the most frequent pair.
///
/// The selection is deterministic; it does not depend on hash map iteration order.
///
/// ## Returns
/// The selected pair and its count, or `None` for an empty table.
pub fn select_most_frequent_pair(pair_counts: &PairCountTable) -> Option<MergeCandidate> {
    pair_counts
        .iter()
        .max_by(|&a, &b| candidate_order(a, b))
        .map(|((left, right), stats)| MergeCandidate {
            left: left.clone(),
            right: right.clone(),
            count: stats.count,
        })
}

/// Rewrite a token sequence, replacing every non-overlapping ``(left, right)``
/// occurrence with `merged`, greedily from the left.
///
/// ``merge_pair(["a", "a", "a"], "a", "a", "aa") == ["aa", "a"]``.
pub fn merge_pair(
    tokens: &[Token],
    left: &str,
    right: &str,
    merged: &str,
) -> Vec<Token> {
    let mut seq = TokenSeq::from(tokens.to_vec());
    seq.merge_pair(left, right, &Token::from(merged));
    seq.into_tokens()
}

//! # Pair Count Table

use crate::types::{BPHashMap, Token, TokenPair, hash_map_with_capacity};

/// Occurrence statistics for one ``(left, right)`` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairStats {
    /// Number of adjacent windows equal to the pair.
    ///
    /// Overlapping windows are each counted; ``a a a`` holds ``(a, a)`` twice.
    pub count: usize,

    /// Index of the first window equal to the pair.
    pub first_index: usize,
}

/// A map from [`TokenPair`] to its [`PairStats`] within one token sequence.
///
/// Keys are structural ``(left, right)`` tuples; ``("a", "bc")`` and
/// ``("ab", "c")`` are distinct pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairCountTable {
    pairs: BPHashMap<TokenPair, PairStats>,
}

impl PairCountTable {
    /// Count every adjacent ``(tokens[i], tokens[i+1])`` window.
    ///
    /// # Arguments
    /// * `tokens` - a token sequence; fewer than two tokens yields an empty table.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(tokens)))]
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut pairs: BPHashMap<TokenPair, PairStats> =
            hash_map_with_capacity(tokens.len().saturating_sub(1).min(1 << 16));

        for (index, w) in tokens.windows(2).enumerate() {
            pairs
                .entry((w[0].clone(), w[1].clone()))
                .and_modify(|stats| stats.count += 1)
                .or_insert(PairStats {
                    count: 1,
                    first_index: index,
                });
        }

        Self { pairs }
    }

    /// Get the statistics of a pair.
    pub fn get(
        &self,
        left: &str,
        right: &str,
    ) -> Option<&PairStats> {
        self.pairs.get(&(Token::from(left), Token::from(right)))
    }

    /// Get the count of a pair; ``0`` if absent.
    pub fn count(
        &self,
        left: &str,
        right: &str,
    ) -> usize {
        self.get(left, right).map_or(0, |stats| stats.count)
    }

    /// The number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over ``(pair, stats)`` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&TokenPair, &PairStats)> + '_ {
        self.pairs.iter()
    }

    /// Project the table to a ``{ pair -> count }`` map.
    pub fn to_count_map(&self) -> BPHashMap<TokenPair, usize> {
        self.pairs
            .iter()
            .map(|(pair, stats)| (pair.clone(), stats.count))
            .collect()
    }
}

/// Count adjacent pair frequencies within a token sequence.
pub fn count_pairs(tokens: &[Token]) -> PairCountTable {
    PairCountTable::from_tokens(tokens)
}

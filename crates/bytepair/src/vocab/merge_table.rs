//! # Merge Table
//!
//! The ordered list of learned ``(left, right) -> merged`` rules.
//! Order is significant; encoders replay the rules in training order.

use crate::{
    errors::{BPResult, BytePairError},
    types::{Token, TokenPair},
};

/// A learned merge rule: ``left ++ right == merged``.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeRule {
    left: Token,
    right: Token,
    merged: Token,
}

impl MergeRule {
    /// Build the rule merging `left` and `right`.
    pub fn new(
        left: &str,
        right: &str,
    ) -> Self {
        let mut merged = Token::with_capacity(left.len() + right.len());
        merged.push_str(left);
        merged.push_str(right);
        Self {
            left: left.into(),
            right: right.into(),
            merged,
        }
    }

    /// Rebuild a rule from its parts.
    ///
    /// ## Returns
    /// The rule, or [`BytePairError::VocabConflict`] if ``left ++ right != merged``.
    pub fn from_parts(
        left: &str,
        right: &str,
        merged: &str,
    ) -> BPResult<Self> {
        let rule = Self::new(left, right);
        if rule.merged != merged {
            return Err(BytePairError::VocabConflict(format!(
                "merge rule ({left:?}, {right:?}) -> {merged:?} is not a concatenation"
            )));
        }
        Ok(rule)
    }

    /// The left token.
    pub fn left(&self) -> &Token {
        &self.left
    }

    /// The right token.
    pub fn right(&self) -> &Token {
        &self.right
    }

    /// The merged token.
    pub fn merged(&self) -> &Token {
        &self.merged
    }

    /// The ``(left, right)`` pair, cloned.
    pub fn pair(&self) -> TokenPair {
        (self.left.clone(), self.right.clone())
    }
}

/// Merge rules, in the order they were learned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeTable {
    rules: Vec<MergeRule>,
}

impl MergeTable {
    /// Create an empty merge table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn push(
        &mut self,
        rule: MergeRule,
    ) {
        self.rules.push(rule);
    }

    /// The rules, in training order.
    pub fn rules(&self) -> &[MergeRule] {
        &self.rules
    }

    /// Iterate over the rules, in training order.
    pub fn iter(&self) -> core::slice::Iter<'_, MergeRule> {
        self.rules.iter()
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<MergeRule> for MergeTable {
    fn from_iter<I: IntoIterator<Item = MergeRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MergeTable {
    type Item = &'a MergeRule;
    type IntoIter = core::slice::Iter<'a, MergeRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_rule() {
        let rule = MergeRule::new("h", "e");
        assert_eq!(rule.left(), "h");
        assert_eq!(rule.right(), "e");
        assert_eq!(rule.merged(), "he");
        assert_eq!(rule.pair(), ("h".into(), "e".into()));

        let rule = MergeRule::new("<0xe4>", "<0xb8>");
        assert_eq!(rule.merged(), "<0xe4><0xb8>");
    }

    #[test]
    fn test_merge_rule_from_parts() {
        assert_eq!(
            MergeRule::from_parts("a", "bc", "abc").unwrap(),
            MergeRule::new("a", "bc")
        );
        assert!(matches!(
            MergeRule::from_parts("a", "bc", "ab"),
            Err(BytePairError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_merge_table_order() {
        let table: MergeTable = [
            MergeRule::new("a", "b"),
            MergeRule::new("ab", "c"),
            MergeRule::new("x", "x"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());

        let merged: Vec<&str> = table.iter().map(|r| r.merged().as_str()).collect();
        assert_eq!(merged, vec!["ab", "abc", "xx"]);

        let mut pushed = MergeTable::new();
        for rule in &table {
            pushed.push(rule.clone());
        }
        assert_eq!(pushed, table);
        assert_eq!(pushed.rules(), table.rules());
    }
}

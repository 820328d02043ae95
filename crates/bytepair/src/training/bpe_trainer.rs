//! # BPE Vocab Trainer

use crate::{
    codec::U8_SIZE,
    errors::BPResult,
    training::{TokenSeq, count_pairs, select_most_frequent_pair},
    types::{IdType, Token, TokenPair},
    vocab::{BpeModel, MergeRule, MergeTable, TokenVocab, try_vocab_size},
};

/// Options for [`BpeTrainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BpeTrainerOptions {
    /// The target vocab size, including the 256 byte tokens.
    pub vocab_size: usize,

    /// Retain every [`TrainStep`] in [`TrainResults::steps`].
    ///
    /// Observers passed to [`BpeTrainer::train_with_observer`] see every step regardless.
    pub record_steps: bool,
}

impl BpeTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size.
    ///
    /// ## Returns
    /// A new `BpeTrainerOptions` instance, recording steps.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            record_steps: true,
        }
    }

    /// Sets the vocab size.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size; values <= 256 train no merges.
    ///
    /// ## Returns
    /// The updated `BpeTrainerOptions` instance.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets whether step records are retained.
    ///
    /// ## Returns
    /// The updated `BpeTrainerOptions` instance.
    pub fn with_record_steps(
        self,
        record_steps: bool,
    ) -> Self {
        Self {
            record_steps,
            ..self
        }
    }

    /// Initializes a [`BpeTrainer`] from these options.
    pub fn init(self) -> BpeTrainer {
        BpeTrainer::new(self)
    }
}

/// The record of one merge step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainStep {
    /// Zero-based step index; equal to the merge's index in the merge table.
    pub index: usize,

    /// The merged ``(left, right)`` pair.
    pub pair: TokenPair,

    /// The merged token, ``left ++ right``.
    pub merged: Token,

    /// The pair's count when it was selected.
    pub frequency: usize,

    /// The vocabulary size after this step.
    pub vocab_size: usize,

    /// The token sequence after this step.
    pub tokens: Vec<Token>,
}

/// Why training stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainOutcome {
    /// The vocabulary reached the target size.
    ReachedVocabSize,

    /// The sequence has no adjacent pairs left to merge.
    NoPairsRemaining,
}

/// Training results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainResults<T: IdType = u32> {
    /// The trained vocabulary; byte tokens first, then merged tokens in merge order.
    pub vocab: TokenVocab<T>,

    /// The learned merge rules, in training order.
    pub merges: MergeTable,

    /// The recorded step history; empty when steps are not recorded.
    pub steps: Vec<TrainStep>,

    /// Why training stopped.
    pub outcome: TrainOutcome,
}

impl<T: IdType> TrainResults<T> {
    /// Bundle the vocabulary and merge table as a [`BpeModel`].
    pub fn into_model(self) -> BpeModel<T> {
        BpeModel::from_trained(self.vocab, self.merges)
    }
}

/// Trainer for learning byte pair merges over one flat byte-token stream.
///
/// Text added with [`BpeTrainer::update_from_text`] is concatenated;
/// there is no pre-tokenization, so pairs may span sample boundaries.
#[derive(Debug, Clone)]
pub struct BpeTrainer {
    /// Trainer options.
    pub options: BpeTrainerOptions,

    /// The accumulated training text.
    text: String,
}

impl BpeTrainer {
    /// Initializes a [`BpeTrainer`].
    pub fn new(options: BpeTrainerOptions) -> Self {
        Self {
            options,
            text: String::new(),
        }
    }

    /// Append text to the training corpus.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        self.text.push_str(text.as_ref());
    }

    /// The accumulated training text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Trains a vocabulary and merge table.
    ///
    /// ## Returns
    /// A `Result` containing the [`TrainResults<T>`], or
    /// [`crate::errors::BytePairError::VocabSizeOverflow`] if `T` cannot hold the vocabulary.
    pub fn train<T: IdType>(self) -> BPResult<TrainResults<T>> {
        self.train_with_observer(|_| {})
    }

    /// Trains a vocabulary and merge table, reporting each step.
    ///
    /// Each iteration recounts all pairs of the current sequence, merges the
    /// most frequent one, and registers the merged token.
    ///
    /// ## Arguments
    /// * `on_step` - called synchronously with each [`TrainStep`], in order.
    ///
    /// ## Returns
    /// A `Result` containing the [`TrainResults<T>`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, on_step)))]
    pub fn train_with_observer<T, F>(
        self,
        mut on_step: F,
    ) -> BPResult<TrainResults<T>>
    where
        T: IdType,
        F: FnMut(&TrainStep),
    {
        let target = self.options.vocab_size;
        try_vocab_size::<T>(target.max(U8_SIZE))?;

        let mut vocab: TokenVocab<T> = TokenVocab::with_byte_tokens()?;
        let mut merges = MergeTable::new();
        let mut steps: Vec<TrainStep> = Vec::new();

        let num_merges = target.saturating_sub(vocab.len());
        log::info!(
            "Starting BPE training: {} bytes, {} merges to compute",
            self.text.len(),
            num_merges
        );

        let mut seq = TokenSeq::from_text(&self.text);
        let mut outcome = TrainOutcome::ReachedVocabSize;
        let mut last_log_percent = 0;

        while vocab.len() < target {
            let pair_counts = count_pairs(seq.tokens());
            let Some(candidate) = select_most_frequent_pair(&pair_counts) else {
                outcome = TrainOutcome::NoPairsRemaining;
                break;
            };

            let rule = MergeRule::new(&candidate.left, &candidate.right);

            let size_before = vocab.len();
            vocab.add_token(rule.merged())?;
            if vocab.len() == size_before {
                log::warn!(
                    "Merged token {:?} collides with an existing vocab entry",
                    rule.merged()
                );
            }

            seq.merge_pair(rule.left(), rule.right(), rule.merged());

            let step = TrainStep {
                index: merges.len(),
                pair: rule.pair(),
                merged: rule.merged().clone(),
                frequency: candidate.count,
                vocab_size: vocab.len(),
                tokens: seq.tokens().to_vec(),
            };
            merges.push(rule);

            log::debug!(
                "Merge {}: {:?} + {:?} -> {:?} (frequency: {})",
                step.index,
                step.pair.0,
                step.pair.1,
                step.merged,
                step.frequency
            );

            on_step(&step);

            // Log progress every 1%
            let added = vocab.len() - U8_SIZE;
            let current_percent = progress_percent(added, num_merges);
            if current_percent > last_log_percent {
                log::info!(
                    "Progress: {}% ({}/{} tokens added) - Last merge: {:?} (frequency: {})",
                    current_percent,
                    added,
                    num_merges,
                    step.merged,
                    step.frequency
                );
                last_log_percent = current_percent;
            }

            if self.options.record_steps {
                steps.push(step);
            }
        }

        log::info!(
            "Finished training: {} merges completed, vocab size {} ({:?})",
            merges.len(),
            vocab.len(),
            outcome
        );

        Ok(TrainResults {
            vocab,
            merges,
            steps,
            outcome,
        })
    }
}

/// Percent of the token budget filled; colliding merges add nothing.
fn progress_percent(
    added: usize,
    budget: usize,
) -> usize {
    if budget == 0 {
        return 100;
    }
    (added.min(budget) * 100) / budget
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codec::canonical_byte_tokens, errors::BytePairError};

    fn train(
        text: &str,
        vocab_size: usize,
    ) -> TrainResults<u32> {
        let mut trainer = BpeTrainerOptions::new(vocab_size).init();
        trainer.update_from_text(text);
        trainer.train().unwrap()
    }

    #[test]
    fn test_trainer_options() {
        let options = BpeTrainerOptions::new(1000);
        assert_eq!(options.vocab_size, 1000);
        assert!(options.record_steps);

        let options = options.with_vocab_size(2000).with_record_steps(false);
        assert_eq!(options.vocab_size, 2000);
        assert!(!options.record_steps);
    }

    #[test]
    fn test_train_aaabdaaabac() {
        let results = train("aaabdaaabac", 259);

        assert_eq!(results.outcome, TrainOutcome::ReachedVocabSize);
        assert_eq!(results.vocab.len(), 259);

        // Step 1: ("a", "a") occurs 4 times.
        // Step 2: ("aa", "a") and ("a", "b") tie at 2; ("aa", "a") occurs first.
        let merged: Vec<&str> = results.merges.iter().map(|r| r.merged().as_str()).collect();
        assert_eq!(merged, vec!["aa", "aaa", "aaab"]);

        assert_eq!(results.steps.len(), 3);
        assert_eq!(results.steps[0].frequency, 4);
        assert_eq!(results.steps[0].tokens, vec!["aa", "a", "b", "d", "aa", "a", "b", "a", "c"]);
        assert_eq!(results.steps[2].tokens, vec!["aaab", "d", "aaab", "a", "c"]);

        assert_eq!(results.vocab.get_id("aa"), Some(256));
        assert_eq!(results.vocab.get_id("aaa"), Some(257));
        assert_eq!(results.vocab.get_id("aaab"), Some(258));
    }

    #[test]
    fn test_step_records() {
        let results = train("hello hello hello", 300);

        for (idx, (step, rule)) in results.steps.iter().zip(results.merges.iter()).enumerate() {
            assert_eq!(step.index, idx);
            assert_eq!(&step.pair, &rule.pair());
            assert_eq!(&step.merged, rule.merged());
            assert_eq!(step.vocab_size, U8_SIZE + idx + 1);
            assert!(step.frequency >= 1);
        }

        let last = results.steps.last().unwrap();
        assert_eq!(last.tokens, vec!["hello hello hello"]);
        assert_eq!(results.outcome, TrainOutcome::NoPairsRemaining);
    }

    #[test]
    fn test_byte_coverage() {
        let results = train("abcabc", 1000);
        for token in canonical_byte_tokens() {
            assert!(results.vocab.contains(&token));
        }
    }

    #[test]
    fn test_early_termination() {
        let results = train("a", 1000);
        assert!(results.merges.is_empty());
        assert!(results.steps.is_empty());
        assert_eq!(results.vocab.len(), U8_SIZE);
        assert_eq!(results.outcome, TrainOutcome::NoPairsRemaining);

        let results = train("", 1000);
        assert!(results.merges.is_empty());
        assert_eq!(results.vocab.len(), U8_SIZE);
    }

    #[test]
    fn test_small_target() {
        let results = train("abababab", 10);
        assert!(results.merges.is_empty());
        assert_eq!(results.vocab.len(), U8_SIZE);
        assert_eq!(results.outcome, TrainOutcome::ReachedVocabSize);
    }

    #[test]
    fn test_observer_sees_every_step() {
        let mut trainer = BpeTrainerOptions::new(270)
            .with_record_steps(false)
            .init();
        trainer.update_from_text("the cat sat on the mat; ");
        trainer.update_from_text("the cat sat on the mat");
        assert_eq!(trainer.text().len(), 46);

        let mut seen: Vec<TrainStep> = Vec::new();
        let results: TrainResults<u32> = trainer
            .train_with_observer(|step| seen.push(step.clone()))
            .unwrap();

        assert!(results.steps.is_empty());
        assert_eq!(seen.len(), results.merges.len());
        for (idx, step) in seen.iter().enumerate() {
            assert_eq!(step.index, idx);
        }
    }

    #[test]
    fn test_id_type_overflow() {
        let mut trainer = BpeTrainerOptions::new(300).init();
        trainer.update_from_text("abab");
        assert!(matches!(
            trainer.train::<u8>(),
            Err(BytePairError::VocabSizeOverflow { size: 300 })
        ));
    }

    #[test]
    fn test_into_model() {
        let results = train("banana bandana", 270);
        let merges = results.merges.clone();
        let model = results.into_model();
        assert_eq!(model.merges(), &merges);
        assert!(BpeModel::init(model.vocab().clone(), merges).is_ok());
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 10), 0);
        assert_eq!(progress_percent(5, 10), 50);
        assert_eq!(progress_percent(10, 10), 100);
        assert_eq!(progress_percent(12, 10), 100);
        assert_eq!(progress_percent(0, 0), 100);
    }

    #[test]
    fn test_colliding_merge_is_recorded() {
        // "<0x0a" + ">" spells the canonical token of byte 0x0A.
        let results = train(&"<0x0a>".repeat(4), 300);

        let merged: Vec<&str> = results.merges.iter().map(|r| r.merged().as_str()).collect();
        assert_eq!(
            merged,
            vec![
                "<0",
                "<0x",
                "<0x0",
                "<0x0a",
                "<0x0a>",
                "<0x0a><0x0a>",
                "<0x0a><0x0a><0x0a><0x0a>",
            ]
        );

        let step = &results.steps[4];
        assert_eq!(step.pair.0, "<0x0a");
        assert_eq!(step.pair.1, ">");
        assert_eq!(step.frequency, 4);
        assert_eq!(step.vocab_size, 260);
        assert_eq!(results.steps[3].vocab_size, 260);
        assert_eq!(results.steps[5].vocab_size, 261);

        assert_eq!(results.vocab.get_id("<0x0a>"), Some(10));
        assert_eq!(results.vocab.len(), 262);
        assert_eq!(results.outcome, TrainOutcome::NoPairsRemaining);
    }

    #[test]
    fn test_distinct_pairs_same_merged_token() {
        assert_eq!(
            MergeRule::new("a", "bc").merged(),
            MergeRule::new("ab", "c").merged()
        );

        let text = format!("{}{}{}", "<0x0a>x".repeat(4), "\nx".repeat(5), " >x".repeat(5));
        let results = train(&text, 400);

        let rules: Vec<&MergeRule> = results
            .merges
            .iter()
            .filter(|r| r.merged() == "<0x0a>x")
            .collect();
        assert_eq!(rules.len(), 2);
        assert_eq!((rules[0].left().as_str(), rules[0].right().as_str()), ("<0x0a>", "x"));
        assert_eq!((rules[1].left().as_str(), rules[1].right().as_str()), ("<0x0a", ">x"));

        // The second rule registers nothing new.
        assert_eq!(results.steps[1].merged, "<0x0a>x");
        assert_eq!(results.steps[7].merged, "<0x0a>x");
        assert_eq!(results.steps[7].vocab_size, results.steps[6].vocab_size);
        assert_eq!(results.vocab.get_id("<0x0a>x"), Some(257));
    }

    #[test]
    fn test_escape_text_decodes_as_bytes() {
        let text = "<0x41><0x41> <0x41>";
        let results = train(text, 262);
        assert_eq!(results.outcome, TrainOutcome::ReachedVocabSize);

        let details = crate::encode_with_details(text, &results.vocab, &results.merges).unwrap();
        assert_eq!(details.tokens, vec!["<0x41><0x41>", " ", "<0x41>"]);

        // Literal escape text decodes to the byte it names.
        assert_eq!(crate::decode(&details.ids, &results.vocab).unwrap(), "AA A");
    }
}

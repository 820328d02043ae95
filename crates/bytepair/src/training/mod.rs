//! # Vocabulary Training
//!
//! Training runs over one flat stream of byte tokens; there is no
//! pre-tokenization. Each step:
//! 1. counts all adjacent pairs of the current sequence ([`count_pairs`]),
//! 2. selects the most frequent pair ([`select_most_frequent_pair`]),
//! 3. registers ``left ++ right`` and records the [`crate::vocab::MergeRule`],
//! 4. rewrites the sequence ([`TokenSeq::merge_pair`]),
//! 5. reports a [`TrainStep`].
//!
//! Training stops when the vocabulary reaches the target size,
//! or when no adjacent pairs remain.
//!
//! ## Training Example
//!
//! ```rust
//! use bytepair::training::BpeTrainerOptions;
//!
//! let mut trainer = BpeTrainerOptions::new(300).init();
//! trainer.update_from_text("hello hello world");
//!
//! let results = trainer
//!     .train_with_observer::<u32, _>(|step| {
//!         println!("{}: {:?} ({})", step.index, step.merged, step.frequency);
//!     })
//!     .expect("training failed");
//!
//! assert!(results.vocab.len() > 256);
//! let model = results.into_model();
//! assert_eq!(model.vocab().get_id("a"), Some(97));
//! ```

mod bpe_trainer;
mod merge_engine;
mod pair_stats;
mod token_seq;

#[doc(inline)]
pub use bpe_trainer::{BpeTrainer, BpeTrainerOptions, TrainOutcome, TrainResults, TrainStep};
#[doc(inline)]
pub use merge_engine::{MergeCandidate, merge_pair, select_most_frequent_pair};
#[doc(inline)]
pub use pair_stats::{PairCountTable, PairStats, count_pairs};
#[doc(inline)]
pub use token_seq::TokenSeq;

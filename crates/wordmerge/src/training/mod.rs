//! # Merge Training
//!
//! Support for training symbol vocabularies by iterative pair merging.
//!
//! Training proceeds as:
//! * [`collect_frequencies`] - count each whitespace-delimited word, and
//!   segment it with a [`crate::segmentation::WordSegmenter`].
//! * [`MergeTrainer::train`] - repeatedly count pairs ([`count_pairs`]),
//!   select the winning [`MergeCandidate`], and merge it into every word.
//! * [`crate::vocab::SymbolVocab::build`] - assign ids to every symbol.
//!
//! ## Training Example
//!
//! ```rust
//! use wordmerge::{
//!     segmentation::WordSegmenter,
//!     training::{MergeTrainerOptions, WordFrequencyMap, collect_frequencies},
//!     vocab::SymbolVocab,
//! };
//!
//! let segmenter = WordSegmenter::new(None, Some("</w>")).unwrap();
//! let freqs: WordFrequencyMap<u64> =
//!     collect_frequencies("low lower lowest low", &segmenter).unwrap();
//!
//! let results = MergeTrainerOptions::new(4).init().train(freqs);
//! assert_eq!(results.merges.len(), 4);
//!
//! let vocab: SymbolVocab<u32> =
//!     SymbolVocab::build(&results.word_frequencies, "<unk>").unwrap();
//! assert!(vocab.lookup_token("<unk>").is_some());
//! ```

pub mod utility;

mod merge_trainer;
mod training_types;

#[doc(inline)]
pub use merge_trainer::{
    MergeCandidate,
    MergeRecord,
    MergeTrainer,
    MergeTrainerOptions,
    TrainResults,
    select_merge,
    train,
};
#[doc(inline)]
pub use training_types::CountType;
#[doc(inline)]
pub use utility::{WordFrequencyMap, collect_frequencies, count_pairs};

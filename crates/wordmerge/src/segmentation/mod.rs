//! # Word Segmentation
//!
//! Text is split on whitespace into words; each word becomes a
//! [`SegmentedWord`] of single-character symbols, optionally bracketed by
//! start-of-word / end-of-word markers.
//!
//! ```rust
//! use wordmerge::segmentation::WordSegmenter;
//!
//! let segmenter = WordSegmenter::new(Some("_"), Some("#")).unwrap();
//! let word = segmenter.prepare_word("cat");
//! assert_eq!(word.concat(), "_cat#");
//! assert_eq!(word.len(), 5);
//! ```

pub mod segmented_word;
pub mod word_segmenter;

#[doc(inline)]
pub use segmented_word::SegmentedWord;
#[doc(inline)]
pub use word_segmenter::{WordSegmenter, prepare_word};

//! # Token Encoders
//!
//! Encoder clients should use:
//!
//! * `LongestMatchEncoder` - the greedy longest-match `TokenEncoder`.
//! * `ParallelRayonEncoder` - a batch parallelism wrapper around any `TokenEncoder`.
//!
//! ## Example
//!
//! ```rust
//! use wordmerge::{
//!     encoders::{LongestMatchEncoder, TokenEncoder},
//!     segmentation::WordSegmenter,
//!     training::MergeTrainerOptions,
//!     vocab::SymbolVocab,
//! };
//!
//! let segmenter = WordSegmenter::new(None, Some("</w>")).unwrap();
//! let vocab: SymbolVocab<u32> = MergeTrainerOptions::new(8)
//!     .init()
//!     .train_vocab("low lower lowest", &segmenter, "<unk>")
//!     .unwrap();
//!
//! let encoder = LongestMatchEncoder::new(vocab, segmenter, "<unk>").unwrap();
//!
//! #[cfg(feature = "rayon")]
//! let encoder = wordmerge::rayon::ParallelRayonEncoder::new(encoder);
//!
//! let tokens = encoder.encode("low lowest");
//! assert!(!tokens.is_empty());
//! ```

pub mod longest_match_encoder;
pub mod token_encoder;

#[doc(inline)]
pub use longest_match_encoder::LongestMatchEncoder;
#[doc(inline)]
pub use token_encoder::TokenEncoder;

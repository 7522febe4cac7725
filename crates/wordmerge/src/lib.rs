//! # `wordmerge` Subword Tokenizer
//!
//! A pair-merge (BPE-style) subword tokenizer over characters, with a
//! BLEU-style character n-gram metric for scoring generated text.
//!
//! See:
//! * [`segmentation`] to split words into symbols.
//! * [`training`] to learn merges and build a [`vocab::SymbolVocab`].
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`vocab`] to manage vocabularies and vocab io.
//! * [`metrics`] to score text against a reference.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all `HashMap`/`HashSet` implementations for ``ahash``.
//!
//! This is done by the ``types::WMHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel pair counting during training, and the
//! ``wordmerge::rayon`` batch parallelism wrappers.
//! Results are identical with or without it.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Training, Encoding, Decoding
//!
//! ```rust
//! use wordmerge::{
//!     decoders::{DecoderOptions, DictionaryDecoder, TokenDecoder},
//!     encoders::{LongestMatchEncoder, TokenEncoder},
//!     segmentation::WordSegmenter,
//!     training::MergeTrainerOptions,
//!     vocab::SymbolVocab,
//! };
//!
//! type T = u32;
//!
//! let segmenter = WordSegmenter::new(None, Some("</w>"))?;
//! let vocab: SymbolVocab<T> = MergeTrainerOptions::new(16)
//!     .init()
//!     .train_vocab("low lower lowest newer newest", &segmenter, "<unk>")?;
//!
//! let decoder = DictionaryDecoder::from_vocab(&vocab, &segmenter, DecoderOptions::default());
//! let encoder = LongestMatchEncoder::new(vocab, segmenter, "<unk>")?;
//!
//! let tokens = encoder.encode("lower newest");
//! assert_eq!(decoder.try_decode_to_string(&tokens)?, "lower newest ");
//! # Ok::<(), wordmerge::WordmergeError>(())
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod metrics;
pub mod segmentation;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{WMResult, WordmergeError};
#[doc(inline)]
pub use types::{Symbol, TokenType};

//! # Token Decoders
//!
//! Decoder clients should use:
//!
//! * `DictionaryDecoder` - the `TokenDecoder` over a `SymbolVocab`.
//! * `ParallelRayonDecoder` - a batch parallelism wrapper around any `TokenDecoder`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordmerge::{
//!     decoders::{DecoderOptions, DictionaryDecoder, TokenDecoder},
//!     segmentation::WordSegmenter,
//!     types::TokenType,
//!     vocab::SymbolVocab,
//! };
//!
//! fn example<T: TokenType>(
//!     vocab: &SymbolVocab<T>,
//!     segmenter: &WordSegmenter,
//!     batch: &[&[T]],
//! ) -> Vec<String> {
//!     let decoder = DictionaryDecoder::from_vocab(vocab, segmenter, DecoderOptions::default());
//!
//!     #[cfg(feature = "rayon")]
//!     let decoder = wordmerge::rayon::ParallelRayonDecoder::new(decoder);
//!
//!     decoder.try_decode_batch(batch).unwrap()
//! }
//! ```

pub mod decoder_options;
pub mod dictionary_decoder;
pub mod token_decoder;

#[doc(inline)]
pub use decoder_options::{DecoderOptions, UnknownTokenPolicy};
#[doc(inline)]
pub use dictionary_decoder::DictionaryDecoder;
#[doc(inline)]
pub use token_decoder::TokenDecoder;

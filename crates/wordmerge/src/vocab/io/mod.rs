//! # Vocabulary IO
//!
//! Vocabularies persist as a JSON object mapping symbol strings to ids.
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use wordmerge::{
//!     decoders::{DecoderOptions, DictionaryDecoder},
//!     encoders::LongestMatchEncoder,
//!     segmentation::WordSegmenter,
//!     vocab::{SymbolVocab, io::load_json_vocab_path},
//! };
//!
//! fn example() -> wordmerge::WMResult<(LongestMatchEncoder<u32>, DictionaryDecoder<u32>)> {
//!     type T = u32;
//!     let vocab: SymbolVocab<T> = load_json_vocab_path("vocab.json")?;
//!     let segmenter = WordSegmenter::new(None, Some("</w>"))?;
//!
//!     let decoder = DictionaryDecoder::from_vocab(&vocab, &segmenter, DecoderOptions::default());
//!     let encoder = LongestMatchEncoder::new(vocab, segmenter, "<unk>")?;
//!
//!     Ok((encoder, decoder))
//! }
//! ```

mod json_vocab;

#[doc(inline)]
pub use json_vocab::*;

//! # Token Encoder Trait

use crate::{
    segmentation::{SegmentedWord, WordSegmenter},
    types::TokenType,
};

/// Expected average number of tokens per whitespace-delimited word.
const EXPECTED_TOKENS_PER_WORD: usize = 3;

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached word segmenter.
    fn segmenter(&self) -> &WordSegmenter;

    /// Encode one segmented word, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `word` - The segmented word to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_word(
        &self,
        word: &SegmentedWord,
        tokens: &mut Vec<T>,
    );

    /// Encode text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        for (_, word) in self.segmenter().split_words(text) {
            self.encode_append_word(&word, tokens);
        }
    }

    /// Encode text into tokens.
    ///
    /// Each whitespace-delimited word is segmented and encoded in turn;
    /// the per-word results are concatenated.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A vector of tokens.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        let words = text.split_whitespace().count();
        let mut tokens = Vec::with_capacity(words * EXPECTED_TOKENS_PER_WORD);
        self.encode_append(text, &mut tokens);
        tokens
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A vector of token vectors.
    fn encode_batch(
        &self,
        batch: &[String],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }
}

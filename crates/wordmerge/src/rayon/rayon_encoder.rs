//! # Parallel Encoder

use crate::{
    encoders::TokenEncoder,
    segmentation::{SegmentedWord, WordSegmenter},
    types::TokenType,
};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches when available.
#[derive(Clone)]
pub struct ParallelRayonEncoder<T: TokenType, E: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: std::marker::PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonEncoder` instance.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn segmenter(&self) -> &WordSegmenter {
        self.inner.segmenter()
    }

    fn encode_append_word(
        &self,
        word: &SegmentedWord,
        tokens: &mut Vec<T>,
    ) {
        self.inner.encode_append_word(word, tokens)
    }

    fn encode_batch(
        &self,
        batch: &[String],
    ) -> Vec<Vec<T>> {
        use rayon::prelude::*;
        batch.par_iter().map(|text| self.encode(text)).collect()
    }
}

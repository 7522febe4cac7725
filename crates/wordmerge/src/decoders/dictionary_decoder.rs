//! # Dictionary ``{ T -> String }`` Token Decoder

use crate::{
    decoders::{DecoderOptions, TokenDecoder, UnknownTokenPolicy},
    errors::{WMResult, WordmergeError},
    segmentation::WordSegmenter,
    types::{TokenType, WMHashMap},
    vocab::SymbolVocab,
};

/// A token dictionary [`TokenDecoder<T>`].
///
/// Each token's text is precomputed from its symbol, with every embedded
/// end-of-word marker rendered as a single space.
#[derive(Debug, Clone)]
pub struct DictionaryDecoder<T: TokenType> {
    /// Token to rendered text mapping.
    pub token_to_text: WMHashMap<T, String>,

    options: DecoderOptions,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Build a [`DictionaryDecoder`] from a [`SymbolVocab`].
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary to invert.
    /// * `segmenter` - The segmenter the vocabulary was trained with; supplies the end marker.
    /// * `options` - Decoder options.
    ///
    /// ## Returns
    /// A new `DictionaryDecoder` instance.
    pub fn from_vocab(
        vocab: &SymbolVocab<T>,
        segmenter: &WordSegmenter,
        options: DecoderOptions,
    ) -> Self {
        let end_marker = segmenter.end_marker();
        let token_to_text = vocab
            .iter()
            .map(|(symbol, token)| {
                let text = match end_marker {
                    Some(marker) => symbol.replace(marker, " "),
                    None => symbol.to_string(),
                };
                (token, text)
            })
            .collect();

        Self::init(token_to_text, options)
    }

    /// Creates a new Decoder.
    ///
    /// ## Arguments
    /// * `token_to_text` - The token to rendered text mapping.
    /// * `options` - Decoder options.
    pub fn init(
        token_to_text: WMHashMap<T, String>,
        options: DecoderOptions,
    ) -> Self {
        Self {
            token_to_text,
            options,
        }
    }

    /// The decoder options.
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, buf)))]
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut String,
    ) -> WMResult<()> {
        for token in tokens {
            if let Some(text) = self.token_to_text.get(token) {
                buf.push_str(text);
                continue;
            }

            match &self.options.unknown_policy {
                UnknownTokenPolicy::Skip => {
                    log::trace!("skipping unknown token {token}");
                }
                UnknownTokenPolicy::Strict => {
                    return Err(WordmergeError::UnknownToken(
                        token.to_u64().unwrap_or(u64::MAX),
                    ));
                }
                UnknownTokenPolicy::Emit(text) => buf.push_str(text),
            }
        }
        Ok(())
    }
}

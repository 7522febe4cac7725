//! # Token Decoder Trait

use crate::{errors::WMResult, types::TokenType};

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens, appending to a target string.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `buf` - The target string to append to.
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut String,
    ) -> WMResult<()>;

    /// Decodes tokens into a string.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// A `WMResult<String>`.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> WMResult<String> {
        let mut buf = String::with_capacity(tokens.len() * 4);
        self.try_decode_append(tokens, &mut buf)?;
        Ok(buf)
    }

    /// Decodes a batch of tokens.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    ///
    /// ## Returns
    /// A `WMResult<Vec<String>>`.
    fn try_decode_batch(
        &self,
        batch: &[&[T]],
    ) -> WMResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}

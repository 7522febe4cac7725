//! # Character n-grams

use crate::errors::{WMResult, WordmergeError};

/// Extract every sliding window of `order` characters from `text`.
///
/// Windows are returned left to right, with duplicates.
///
/// ## Arguments
/// * `text` - the source text; windows include whitespace.
/// * `order` - the window length in characters.
///
/// ## Returns
/// An empty vector if `order` exceeds the character length of `text`,
/// or an error if `order` is zero.
pub fn collect_ngrams(
    text: &str,
    order: usize,
) -> WMResult<Vec<&str>> {
    if order == 0 {
        return Err(WordmergeError::InvalidOrder(
            "n-gram order must be at least 1".to_string(),
        ));
    }

    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain([text.len()])
        .collect();
    let n = bounds.len() - 1;
    if order > n {
        return Ok(Vec::new());
    }

    Ok((0..=n - order)
        .map(|i| &text[bounds[i]..bounds[i + order]])
        .collect())
}

//! # Word Segmenter

use crate::{
    errors::{WMResult, WordmergeError},
    segmentation::SegmentedWord,
    types::Symbol,
};

/// Validate that a configured symbol is usable.
pub(crate) fn check_symbol(
    role: &'static str,
    symbol: &str,
) -> WMResult<()> {
    if symbol.is_empty() {
        return Err(WordmergeError::EmptySymbol { role });
    }
    Ok(())
}

/// Splits raw words into [`SegmentedWord`]s of single-character symbols.
///
/// Each word is optionally bracketed by a start-of-word and/or
/// end-of-word marker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordSegmenter {
    start_marker: Option<Symbol>,
    end_marker: Option<Symbol>,
}

impl WordSegmenter {
    /// Create a new segmenter.
    ///
    /// ## Arguments
    /// * `start_marker` - optional symbol prepended to every word.
    /// * `end_marker` - optional symbol appended to every word.
    ///
    /// ## Returns
    /// An error if either marker is the empty string.
    pub fn new(
        start_marker: Option<&str>,
        end_marker: Option<&str>,
    ) -> WMResult<Self> {
        Self::default()
            .with_start_marker(start_marker)?
            .with_end_marker(end_marker)
    }

    /// Sets the start-of-word marker.
    pub fn with_start_marker(
        self,
        start_marker: Option<&str>,
    ) -> WMResult<Self> {
        if let Some(marker) = start_marker {
            check_symbol("start-of-word", marker)?;
        }
        Ok(Self {
            start_marker: start_marker.map(Symbol::from),
            ..self
        })
    }

    /// Sets the end-of-word marker.
    pub fn with_end_marker(
        self,
        end_marker: Option<&str>,
    ) -> WMResult<Self> {
        if let Some(marker) = end_marker {
            check_symbol("end-of-word", marker)?;
        }
        Ok(Self {
            end_marker: end_marker.map(Symbol::from),
            ..self
        })
    }

    /// The start-of-word marker, if any.
    pub fn start_marker(&self) -> Option<&str> {
        self.start_marker.as_deref()
    }

    /// The end-of-word marker, if any.
    pub fn end_marker(&self) -> Option<&str> {
        self.end_marker.as_deref()
    }

    /// Segment one raw word.
    ///
    /// Produces one symbol per character of `raw_word`, in order, bracketed
    /// by the configured markers. An empty word yields only the markers.
    pub fn prepare_word(
        &self,
        raw_word: &str,
    ) -> SegmentedWord {
        let mut symbols: Vec<Symbol> = Vec::with_capacity(raw_word.len() + 2);
        if let Some(marker) = &self.start_marker {
            symbols.push(marker.clone());
        }
        let mut buf = [0u8; 4];
        symbols.extend(raw_word.chars().map(|c| Symbol::from(&*c.encode_utf8(&mut buf))));
        if let Some(marker) = &self.end_marker {
            symbols.push(marker.clone());
        }
        symbols.into()
    }

    /// Split `text` on whitespace and segment each word.
    pub fn split_words<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (&'a str, SegmentedWord)> + 'a {
        text.split_whitespace()
            .map(move |word| (word, self.prepare_word(word)))
    }
}

/// Segment one raw word with the given markers.
///
/// See [`WordSegmenter::prepare_word`].
pub fn prepare_word(
    raw_word: &str,
    start_marker: Option<&str>,
    end_marker: Option<&str>,
) -> WMResult<SegmentedWord> {
    Ok(WordSegmenter::new(start_marker, end_marker)?.prepare_word(raw_word))
}

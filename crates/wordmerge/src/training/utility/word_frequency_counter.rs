//! # Word Frequency Counter

use crate::{
    errors::{WMResult, WordmergeError},
    segmentation::{SegmentedWord, WordSegmenter},
    training::CountType,
    types::{Symbol, SymbolPair, WMHashMap, WMHashSet, hash_map_with_capacity},
};

/// Expected number of distinct surface words in a training corpus.
/// Used when pre-allocating maps.
const EXPECTED_DISTINCT_WORDS: usize = 4_096;

/// A map from [`SegmentedWord`] to its occurrence count in a corpus.
///
/// Keys are always fully segmented; merging rewrites keys but never
/// changes the aggregate counts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WordFrequencyMap<C: CountType = u64> {
    word_counts: WMHashMap<SegmentedWord, C>,
}

impl<C: CountType> FromIterator<(SegmentedWord, C)> for WordFrequencyMap<C> {
    fn from_iter<I: IntoIterator<Item = (SegmentedWord, C)>>(iter: I) -> Self {
        let mut freqs = Self::default();
        for (word, count) in iter {
            *freqs.word_counts.entry(word).or_default() += count;
        }
        freqs
    }
}

impl<C: CountType> WordFrequencyMap<C> {
    /// The number of distinct segmented words.
    pub fn len(&self) -> usize {
        self.word_counts.len()
    }

    /// Is the map empty?
    pub fn is_empty(&self) -> bool {
        self.word_counts.is_empty()
    }

    /// The count for a segmented word, if present.
    pub fn get(
        &self,
        word: &SegmentedWord,
    ) -> Option<C> {
        self.word_counts.get(word).copied()
    }

    /// Iterate over ``(word, count)`` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&SegmentedWord, C)> + '_ {
        self.word_counts.iter().map(|(w, &c)| (w, c))
    }

    /// The entries sorted by word; useful for stable reporting.
    pub fn sorted_entries(&self) -> Vec<(&SegmentedWord, C)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort();
        entries
    }

    /// The sum of all word counts.
    pub fn total_count(&self) -> C {
        self.word_counts
            .values()
            .fold(C::zero(), |acc, &c| acc + c)
    }

    /// The set of distinct symbols appearing in any word.
    pub fn distinct_symbols(&self) -> WMHashSet<&Symbol> {
        self.word_counts
            .keys()
            .flat_map(|w| w.symbols().iter())
            .collect()
    }

    /// Release the underlying map.
    pub fn into_inner(self) -> WMHashMap<SegmentedWord, C> {
        self.word_counts
    }

    /// Rewrite every word, replacing each adjacent occurrence of `pair`
    /// with the concatenated symbol.
    ///
    /// Words without the pair are copied unchanged.
    pub fn merge_pair(
        &self,
        pair: &SymbolPair,
    ) -> Self {
        self.word_counts
            .iter()
            .map(|(word, &count)| match word.merge_pair(pair) {
                Some(merged) => (merged, count),
                None => (word.clone(), count),
            })
            .collect()
    }
}

/// Accumulates surface-word counts from whitespace-delimited text.
///
/// Counts are keyed by the exact surface string; segmentation happens once
/// per distinct word in [`WordFrequencyCounter::to_word_frequencies`].
#[derive(Debug, Clone)]
pub struct WordFrequencyCounter<C: CountType = u64> {
    /// The surface word counts.
    pub word_counts: WMHashMap<Symbol, C>,
}

impl<C: CountType> Default for WordFrequencyCounter<C> {
    fn default() -> Self {
        Self {
            word_counts: hash_map_with_capacity(EXPECTED_DISTINCT_WORDS),
        }
    }
}

impl<C: CountType> WordFrequencyCounter<C> {
    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        for word in text.as_ref().split_whitespace() {
            *self.word_counts.entry(word.into()).or_default() += C::one();
        }
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Segment every counted word into a [`WordFrequencyMap`].
    ///
    /// ## Arguments
    /// * `segmenter` - the segmenter; it must carry an end-of-word marker.
    pub fn to_word_frequencies(
        &self,
        segmenter: &WordSegmenter,
    ) -> WMResult<WordFrequencyMap<C>> {
        if segmenter.end_marker().is_none() {
            return Err(WordmergeError::MissingEndMarker);
        }
        Ok(self
            .word_counts
            .iter()
            .map(|(word, &count)| (segmenter.prepare_word(word), count))
            .collect())
    }
}

/// Count each whitespace-delimited word of `text` and segment it.
///
/// See [`WordFrequencyCounter`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(text, segmenter)))]
pub fn collect_frequencies<C: CountType>(
    text: &str,
    segmenter: &WordSegmenter,
) -> WMResult<WordFrequencyMap<C>> {
    let mut counter = WordFrequencyCounter::<C>::default();
    counter.update_from_text(text);
    counter.to_word_frequencies(segmenter)
}

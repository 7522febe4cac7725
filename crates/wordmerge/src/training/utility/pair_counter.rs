//! # Pair Counter

use crate::{
    training::{CountType, utility::WordFrequencyMap},
    types::{Symbol, WMHashMap},
};

/// A borrowed adjacent symbol pair.
pub type PairRef<'a> = (&'a Symbol, &'a Symbol);

/// A map from [`PairRef`] to its aggregated occurrence count.
///
/// ``sum(words[i].pair_windows(pair) * counts[i]) for all i``
pub type PairCountMap<'a, C> = WMHashMap<PairRef<'a>, C>;

/// Count every adjacent symbol pair, weighted by word count.
///
/// A pair appearing twice inside one word contributes that word's count twice.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(freqs)))]
pub fn count_pairs<'a, C: CountType>(freqs: &'a WordFrequencyMap<C>) -> PairCountMap<'a, C> {
    let mut pair_counts = PairCountMap::default();
    for (word, count) in freqs.iter() {
        accumulate_word_pairs(&mut pair_counts, word.symbols(), count);
    }
    pair_counts
}

fn accumulate_word_pairs<'a, C: CountType>(
    pair_counts: &mut PairCountMap<'a, C>,
    symbols: &'a [Symbol],
    count: C,
) {
    // Zero-count words still register their pairs.
    for w in symbols.windows(2) {
        *pair_counts.entry((&w[0], &w[1])).or_default() += count;
    }
}

/// Parallel [`count_pairs`].
///
/// Partial counts are summed before they are returned, so the result is
/// identical to the serial count.
#[cfg(feature = "rayon")]
#[cfg_attr(feature = "tracing", tracing::instrument(skip(freqs)))]
pub fn par_count_pairs<'a, C: CountType>(freqs: &'a WordFrequencyMap<C>) -> PairCountMap<'a, C> {
    use rayon::prelude::*;

    let entries: Vec<(&'a [Symbol], C)> = freqs.iter().map(|(w, c)| (w.symbols(), c)).collect();

    entries
        .par_iter()
        .fold(PairCountMap::default, |mut acc, &(symbols, count)| {
            accumulate_word_pairs(&mut acc, symbols, count);
            acc
        })
        .reduce(PairCountMap::default, |a, b| {
            // Fold the smaller map into the larger one.
            if a.len() < b.len() {
                merge_counts(b, a)
            } else {
                merge_counts(a, b)
            }
        })
}

#[cfg(feature = "rayon")]
fn merge_counts<'a, C: CountType>(
    mut into: PairCountMap<'a, C>,
    from: PairCountMap<'a, C>,
) -> PairCountMap<'a, C> {
    for (pair, count) in from {
        *into.entry(pair).or_default() += count;
    }
    into
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        segmentation::{SegmentedWord, WordSegmenter},
        training::utility::collect_frequencies,
    };

    fn owned_counts<C: CountType>(counts: &PairCountMap<'_, C>) -> Vec<((String, String), C)> {
        let mut owned: Vec<_> = counts
            .iter()
            .map(|(&(a, b), &c)| ((a.to_string(), b.to_string()), c))
            .collect();
        owned.sort();
        owned
    }

    fn pair(
        a: &str,
        b: &str,
        c: u32,
    ) -> ((String, String), u32) {
        ((a.to_string(), b.to_string()), c)
    }

    #[test]
    fn test_count_pairs() {
        let segmenter = WordSegmenter::new(None, Some("#")).unwrap();
        let freqs: WordFrequencyMap<u32> =
            collect_frequencies("hello world help help help", &segmenter).unwrap();

        let counts = count_pairs(&freqs);
        assert_eq!(
            owned_counts(&counts),
            vec![
                pair("d", "#", 1), // 1 worl[d#]
                pair("e", "l", 4), // 1 h[el]lo, 3 h[el]p
                pair("h", "e", 4), // 1 [he]llo, 3 [he]lp
                pair("l", "d", 1), // 1 wor[ld]
                pair("l", "l", 1), // 1 he[ll]o
                pair("l", "o", 1), // 1 hel[lo]
                pair("l", "p", 3), // 3 he[lp]
                pair("o", "#", 1), // 1 hell[o#]
                pair("o", "r", 1), // 1 w[or]ld
                pair("p", "#", 3), // 3 hel[p#]
                pair("r", "l", 1), // 1 wo[rl]d
                pair("w", "o", 1), // 1 [wo]rld
            ]
        );
    }

    #[test]
    fn test_count_pairs_repeated_within_word() {
        let segmenter = WordSegmenter::new(None, Some("#")).unwrap();
        let freqs: WordFrequencyMap<u32> = collect_frequencies("aaa aaa", &segmenter).unwrap();

        let counts = count_pairs(&freqs);
        assert_eq!(
            owned_counts(&counts),
            vec![pair("a", "#", 2), pair("a", "a", 4)]
        );
    }

    #[test]
    fn test_count_pairs_keeps_zero_count_words() {
        let freqs: WordFrequencyMap<u32> = [
            (SegmentedWord::from_iter(["a", "b"]), 1),
            (SegmentedWord::from_iter(["c", "d"]), 0),
        ]
        .into_iter()
        .collect();

        let counts = count_pairs(&freqs);
        assert_eq!(
            owned_counts(&counts),
            vec![pair("a", "b", 1), pair("c", "d", 0)]
        );
    }

    #[test]
    fn test_count_pairs_empty() {
        let freqs: WordFrequencyMap<u32> = WordFrequencyMap::default();
        assert!(count_pairs(&freqs).is_empty());

        let segmenter = WordSegmenter::new(None, Some("#")).unwrap();
        let single: WordFrequencyMap<u32> = [(segmenter.prepare_word(""), 5)].into_iter().collect();
        assert!(count_pairs(&single).is_empty());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_par_count_pairs_matches_serial() {
        let segmenter = WordSegmenter::new(Some("_"), Some("#")).unwrap();
        let text = "the quick brown fox jumps over the lazy dog the end of the story";
        let freqs: WordFrequencyMap<u64> = collect_frequencies(text, &segmenter).unwrap();

        assert_eq!(
            owned_counts(&count_pairs(&freqs)),
            owned_counts(&par_count_pairs(&freqs))
        );
    }
}

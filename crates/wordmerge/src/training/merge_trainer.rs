//! # Merge Trainer

use core::cmp::Ordering;

use crate::{
    errors::WMResult,
    segmentation::WordSegmenter,
    training::{
        CountType,
        utility::{PairCountMap, PairRef, WordFrequencyMap, collect_frequencies, count_pairs},
    },
    types::{SymbolPair, TokenType},
    vocab::SymbolVocab,
};

/// Options for [`MergeTrainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTrainerOptions {
    /// The requested number of merges.
    pub num_merges: usize,

    /// Count pairs in parallel, when the ``rayon`` feature is enabled.
    ///
    /// This never changes the result.
    pub parallel: bool,
}

impl MergeTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `num_merges` - The requested number of merges.
    pub fn new(num_merges: usize) -> Self {
        Self {
            num_merges,
            parallel: false,
        }
    }

    /// Sets the number of merges.
    pub fn with_num_merges(
        self,
        num_merges: usize,
    ) -> Self {
        Self { num_merges, ..self }
    }

    /// Sets parallel pair counting.
    pub fn with_parallel(
        self,
        parallel: bool,
    ) -> Self {
        Self { parallel, ..self }
    }

    /// Initializes a [`MergeTrainer`] from these options.
    pub fn init(self) -> MergeTrainer {
        MergeTrainer::new(self)
    }
}

/// A candidate pair for the next merge.
///
/// Candidates are totally ordered; the maximum is the winner:
/// * highest count;
/// * then the longer concatenated string;
/// * then the lexicographically smaller concatenated string;
/// * then the lexicographically smaller ``(left, right)`` pair.
///
/// The last rule only separates pairs like ``(ab, c)`` / ``(a, bc)``
/// that concatenate identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCandidate<'a, C: CountType> {
    /// The pair to merge.
    pub pair: PairRef<'a>,

    /// The number of instances of this pair in the corpus.
    pub count: C,
}

impl<C: CountType> MergeCandidate<'_, C> {
    /// Character length of the concatenated pair.
    pub fn merged_len(&self) -> usize {
        self.pair.0.chars().count() + self.pair.1.chars().count()
    }

    fn merged_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.pair.0.bytes().chain(self.pair.1.bytes())
    }
}

impl<C: CountType> PartialOrd for MergeCandidate<'_, C> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: CountType> Ord for MergeCandidate<'_, C> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        // UTF-8 byte order is code point order.
        self.count
            .cmp(&other.count)
            .then_with(|| self.merged_len().cmp(&other.merged_len()))
            .then_with(|| other.merged_bytes().cmp(self.merged_bytes()))
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

/// Select the winning pair from a pair count map.
///
/// Returns `None` when there are no pairs.
pub fn select_merge<'a, C: CountType>(
    pair_counts: &PairCountMap<'a, C>
) -> Option<MergeCandidate<'a, C>> {
    pair_counts
        .iter()
        .map(|(&pair, &count)| MergeCandidate { pair, count })
        .max()
}

/// One applied merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRecord<C: CountType> {
    /// The merged pair.
    pub pair: SymbolPair,

    /// The pair's count when it was selected.
    pub count: C,
}

/// Merge training results.
#[derive(Debug, Clone)]
pub struct TrainResults<C: CountType> {
    /// The word frequencies with all merges applied.
    pub word_frequencies: WordFrequencyMap<C>,

    /// The applied merges, in order.
    pub merges: Vec<MergeRecord<C>>,
}

/// Trainer for learning pair merges over a [`WordFrequencyMap`].
///
/// Each step recounts all pairs, selects the maximal [`MergeCandidate`],
/// and rewrites every word containing it. Training is deterministic.
#[derive(Debug, Clone)]
pub struct MergeTrainer {
    /// Trainer options.
    pub options: MergeTrainerOptions,
}

impl MergeTrainer {
    /// Initializes a [`MergeTrainer`].
    pub fn new(options: MergeTrainerOptions) -> Self {
        Self { options }
    }

    fn count_pairs<'a, C: CountType>(
        &self,
        freqs: &'a WordFrequencyMap<C>,
    ) -> PairCountMap<'a, C> {
        #[cfg(feature = "rayon")]
        if self.options.parallel {
            return crate::training::utility::par_count_pairs(freqs);
        }
        count_pairs(freqs)
    }

    /// Apply up to `num_merges` merges to `freqs`.
    ///
    /// Stops early when no pairs remain. Before each step the remaining
    /// budget is clamped to the number of distinct pairs available.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, freqs)))]
    pub fn train<C: CountType>(
        &self,
        freqs: WordFrequencyMap<C>,
    ) -> TrainResults<C> {
        let requested = self.options.num_merges;
        log::info!(
            "Starting merge training: {} merges requested over {} distinct words",
            requested,
            freqs.len()
        );

        let mut freqs = freqs;
        let mut merges: Vec<MergeRecord<C>> = Vec::with_capacity(requested.min(1 << 16));
        let mut remaining = requested;
        let mut last_log_decile = 0;

        while remaining > 0 {
            let (record, distinct_pairs) = {
                let pair_counts = self.count_pairs(&freqs);
                let Some(best) = select_merge(&pair_counts) else {
                    log::debug!("No pairs remain; stopping");
                    break;
                };
                let (a, b) = best.pair;
                (
                    MergeRecord {
                        pair: (a.clone(), b.clone()),
                        count: best.count,
                    },
                    pair_counts.len(),
                )
            };

            if remaining > distinct_pairs {
                log::debug!(
                    "Clamping merge budget from {} to {} distinct pairs",
                    remaining,
                    distinct_pairs
                );
                remaining = distinct_pairs;
            }

            freqs = freqs.merge_pair(&record.pair);
            log::debug!(
                "Merge {}: {:?} + {:?} (frequency: {})",
                merges.len() + 1,
                record.pair.0,
                record.pair.1,
                record.count
            );
            merges.push(record);
            remaining -= 1;

            let planned = merges.len() + remaining;
            let decile = progress_decile(merges.len(), planned);
            if decile > last_log_decile {
                log::info!(
                    "Progress: {}% ({}/{} merges)",
                    decile * 10,
                    merges.len(),
                    planned
                );
                last_log_decile = decile;
            }
        }

        log::info!("Finished training: {} merges completed", merges.len());
        TrainResults {
            word_frequencies: freqs,
            merges,
        }
    }

    /// Collect frequencies from `text`, train, and build a vocabulary.
    ///
    /// ## Arguments
    /// * `text` - the training corpus.
    /// * `segmenter` - the word segmenter; it must carry an end-of-word marker.
    /// * `unknown_token` - the unknown-token symbol to reserve.
    pub fn train_vocab<T: TokenType>(
        &self,
        text: &str,
        segmenter: &WordSegmenter,
        unknown_token: &str,
    ) -> WMResult<SymbolVocab<T>> {
        let freqs: WordFrequencyMap<u64> = collect_frequencies(text, segmenter)?;
        let results = self.train(freqs);
        SymbolVocab::build(&results.word_frequencies, unknown_token)
    }
}

/// Completed tenths of the planned merges; `planned` is the clamped budget.
fn progress_decile(
    completed: usize,
    planned: usize,
) -> usize {
    if planned == 0 {
        return 10;
    }
    (completed * 10) / planned
}

/// Apply up to `num_merges` merges to `freqs`.
///
/// See [`MergeTrainer::train`].
pub fn train<C: CountType>(
    freqs: WordFrequencyMap<C>,
    num_merges: usize,
) -> WordFrequencyMap<C> {
    MergeTrainerOptions::new(num_merges)
        .init()
        .train(freqs)
        .word_frequencies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        segmentation::SegmentedWord,
        types::{Symbol, WMHashMap},
    };

    fn word(symbols: &[&str]) -> SegmentedWord {
        symbols.iter().copied().collect()
    }

    fn freqs_of(text: &str) -> WordFrequencyMap<u32> {
        let segmenter = WordSegmenter::new(None, Some("#")).unwrap();
        collect_frequencies(text, &segmenter).unwrap()
    }

    fn merged_pairs(merges: &[MergeRecord<u32>]) -> Vec<(&str, &str, u32)> {
        merges
            .iter()
            .map(|m| (m.pair.0.as_str(), m.pair.1.as_str(), m.count))
            .collect()
    }

    #[test]
    fn test_options() {
        let options = MergeTrainerOptions::new(10);
        assert_eq!(options.num_merges, 10);
        assert!(!options.parallel);

        let options = options.with_num_merges(20).with_parallel(true);
        assert_eq!(options.num_merges, 20);
        assert!(options.parallel);
    }

    #[test]
    fn test_candidate_order_by_count() {
        let (a, b, c) = (Symbol::from("a"), Symbol::from("b"), Symbol::from("c"));
        let low = MergeCandidate {
            pair: (&a, &b),
            count: 1u32,
        };
        let high = MergeCandidate {
            pair: (&b, &c),
            count: 2u32,
        };
        assert_eq!(high.cmp(&low), Ordering::Greater);
        assert_eq!(low.partial_cmp(&high), Some(Ordering::Less));
    }

    #[test]
    fn test_candidate_tie_break_prefers_longer() {
        let (ab, c, x, y) = (
            Symbol::from("ab"),
            Symbol::from("c"),
            Symbol::from("x"),
            Symbol::from("y"),
        );
        let long = MergeCandidate {
            pair: (&ab, &c),
            count: 3u32,
        };
        let short = MergeCandidate {
            pair: (&x, &y),
            count: 3u32,
        };
        assert_eq!(long.merged_len(), 3);
        assert!(long > short);
    }

    #[test]
    fn test_candidate_tie_break_prefers_lexicographically_smaller() {
        let (a, b, c, d) = (
            Symbol::from("a"),
            Symbol::from("b"),
            Symbol::from("c"),
            Symbol::from("d"),
        );
        let ab = MergeCandidate {
            pair: (&a, &b),
            count: 3u32,
        };
        let cd = MergeCandidate {
            pair: (&c, &d),
            count: 3u32,
        };
        assert!(ab > cd);
    }

    #[test]
    fn test_candidate_tie_break_same_concatenation() {
        let (ab, c, a, bc) = (
            Symbol::from("ab"),
            Symbol::from("c"),
            Symbol::from("a"),
            Symbol::from("bc"),
        );
        let left_heavy = MergeCandidate {
            pair: (&ab, &c),
            count: 1u32,
        };
        let right_heavy = MergeCandidate {
            pair: (&a, &bc),
            count: 1u32,
        };
        // "a" < "ab", so (a, bc) wins.
        assert!(right_heavy > left_heavy);
        assert_ne!(left_heavy.cmp(&right_heavy), Ordering::Equal);
    }

    #[test]
    fn test_select_merge() {
        let (a, b, c) = (Symbol::from("a"), Symbol::from("b"), Symbol::from("c"));
        let mut counts: PairCountMap<u32> = WMHashMap::default();
        assert!(select_merge(&counts).is_none());

        counts.insert((&b, &c), 2);
        counts.insert((&a, &b), 2);
        counts.insert((&c, &a), 1);

        let best = select_merge(&counts).unwrap();
        assert_eq!(best.pair, (&a, &b));
        assert_eq!(best.count, 2);
    }

    #[test]
    fn test_train_one_merge() {
        let trained = train(freqs_of("cat cat dog"), 1);

        // (c, a), (a, t), (t, #) all have count 2; "at" < "ca" < "t#".
        assert_eq!(trained.get(&word(&["c", "at", "#"])), Some(2));
        assert_eq!(trained.get(&word(&["d", "o", "g", "#"])), Some(1));
        assert_eq!(trained.len(), 2);
    }

    #[test]
    fn test_train_merge_history() {
        let results = MergeTrainerOptions::new(3)
            .init()
            .train(freqs_of("cat cat dog"));

        // (at, #) and (c, at) tie on count and length; "at#" < "cat".
        assert_eq!(
            merged_pairs(&results.merges),
            vec![("a", "t", 2), ("at", "#", 2), ("c", "at#", 2)]
        );
        assert_eq!(
            results.word_frequencies.get(&word(&["cat#"])),
            Some(2)
        );
    }

    #[test]
    fn test_train_prefers_longer_on_tie() {
        // After (l, o) the pairs (lo, w) and (w, #) tie at count 2;
        // "low" is longer than "w#".
        let results = MergeTrainerOptions::new(2)
            .init()
            .train(freqs_of("low low"));

        assert_eq!(
            merged_pairs(&results.merges),
            vec![("l", "o", 2), ("lo", "w", 2)]
        );
    }

    #[test]
    fn test_train_stops_when_pairs_exhausted() {
        let results = MergeTrainerOptions::new(100)
            .init()
            .train(freqs_of("ab ab"));

        assert_eq!(
            merged_pairs(&results.merges),
            vec![("a", "b", 2), ("ab", "#", 2)]
        );
        assert_eq!(results.word_frequencies.get(&word(&["ab#"])), Some(2));
    }

    #[test]
    fn test_train_clamps_budget_to_distinct_pairs() {
        // Three distinct pairs at the start: (a, b), (b, c), (c, #).
        // A budget of 5 is clamped to 3, and all three merges are applied.
        let results = MergeTrainerOptions::new(5)
            .init()
            .train(freqs_of("abc"));
        assert_eq!(results.merges.len(), 3);
        assert_eq!(results.word_frequencies.get(&word(&["abc#"])), Some(1));
    }

    #[test]
    fn test_train_merges_zero_count_words() {
        let freqs: WordFrequencyMap<u32> = [(word(&["a", "b"]), 1), (word(&["c", "d"]), 0)]
            .into_iter()
            .collect();

        let results = MergeTrainerOptions::new(5).init().train(freqs);
        assert_eq!(
            merged_pairs(&results.merges),
            vec![("a", "b", 1), ("c", "d", 0)]
        );
        assert_eq!(results.word_frequencies.get(&word(&["ab"])), Some(1));
        assert_eq!(results.word_frequencies.get(&word(&["cd"])), Some(0));

        let vocab: SymbolVocab<u32> =
            SymbolVocab::build(&results.word_frequencies, "<unk>").unwrap();
        assert!(vocab.lookup_token("cd").is_some());
    }

    #[test]
    fn test_progress_decile() {
        assert_eq!(progress_decile(0, 0), 10);
        assert_eq!(progress_decile(1, 10), 1);
        assert_eq!(progress_decile(9, 10), 9);
        assert_eq!(progress_decile(10, 10), 10);
    }

    #[test]
    fn test_progress_reaches_completion_under_clamped_budget() {
        // A budget of 1000 over "ab ab" is clamped to the 2 merges available;
        // the final merge is reported as complete.
        let results = MergeTrainerOptions::new(1000)
            .init()
            .train(freqs_of("ab ab"));
        let completed = results.merges.len();
        assert_eq!(completed, 2);
        assert_eq!(progress_decile(completed, completed), 10);
        assert_eq!(progress_decile(completed, 1000), 0);
    }

    #[test]
    fn test_train_zero_merges() {
        let freqs = freqs_of("cat dog");
        let trained = train(freqs.clone(), 0);
        assert_eq!(trained, freqs);
    }

    #[test]
    fn test_train_is_deterministic() {
        let text = "the quick brown fox jumps over the lazy dog then the fox sleeps";
        let a = MergeTrainerOptions::new(25).init().train(freqs_of(text));
        let b = MergeTrainerOptions::new(25)
            .with_parallel(true)
            .init()
            .train(freqs_of(text));

        assert_eq!(a.merges, b.merges);
        assert_eq!(a.word_frequencies, b.word_frequencies);
    }

    #[test]
    fn test_train_vocab() {
        let segmenter = WordSegmenter::new(None, Some("#")).unwrap();
        let vocab: SymbolVocab<u32> = MergeTrainerOptions::new(3)
            .init()
            .train_vocab("cat cat dog", &segmenter, "<unk>")
            .unwrap();

        assert_eq!(vocab.lookup_token("<unk>"), Some(0));
        assert_eq!(vocab.lookup_token("cat#"), Some(1));
        assert!(vocab.lookup_token("c").is_some());
        assert!(vocab.lookup_token("g").is_some());
    }
}

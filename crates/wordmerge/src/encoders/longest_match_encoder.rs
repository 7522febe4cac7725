//! # Longest-Match ``{ Symbol -> T }`` Encoder

use std::sync::Arc;

use crate::{
    encoders::TokenEncoder,
    errors::{WMResult, WordmergeError},
    segmentation::{SegmentedWord, WordSegmenter},
    types::{Symbol, TokenType},
    vocab::SymbolVocab,
};

/// A greedy longest-match [`TokenEncoder`].
///
/// Each word's symbols are joined back into one string, and vocabulary
/// symbols claim non-overlapping spans of it in the vocabulary's
/// [`crate::vocab::symbol_order`]: every length from longest to shortest,
/// and within one length, symbols in lexicographic order, each claiming its
/// occurrences left to right. Characters no symbol claims become the
/// unknown token.
#[derive(Debug, Clone)]
pub struct LongestMatchEncoder<T: TokenType> {
    vocab: Arc<SymbolVocab<T>>,
    segmenter: WordSegmenter,
    unknown_token: T,
}

impl<T: TokenType> LongestMatchEncoder<T> {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary.
    /// * `segmenter` - The word segmenter; markers must match training.
    /// * `unknown_token` - The unknown-token symbol.
    ///
    /// ## Returns
    /// An error if `unknown_token` is not in the vocabulary.
    pub fn new<V>(
        vocab: V,
        segmenter: WordSegmenter,
        unknown_token: &str,
    ) -> WMResult<Self>
    where
        V: Into<Arc<SymbolVocab<T>>>,
    {
        let vocab = vocab.into();
        let unknown = vocab
            .lookup_token(unknown_token)
            .ok_or_else(|| WordmergeError::UnknownTokenMissing(Symbol::from(unknown_token)))?;

        Ok(Self {
            vocab,
            segmenter,
            unknown_token: unknown,
        })
    }

    /// The attached vocabulary.
    pub fn vocab(&self) -> &Arc<SymbolVocab<T>> {
        &self.vocab
    }

    /// The unknown-token id.
    pub fn unknown_token(&self) -> T {
        self.unknown_token
    }
}

impl<T: TokenType> TokenEncoder<T> for LongestMatchEncoder<T> {
    fn segmenter(&self) -> &WordSegmenter {
        &self.segmenter
    }

    fn encode_append_word(
        &self,
        word: &SegmentedWord,
        tokens: &mut Vec<T>,
    ) {
        let text = word.concat();

        // bounds[i] is the byte offset of char i; bounds[n] == text.len().
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(idx, _)| idx)
            .chain([text.len()])
            .collect();
        let n = bounds.len() - 1;

        let mut covered = vec![false; n];
        let mut starts: Vec<Option<T>> = vec![None; n];

        let max_len = self.vocab.max_symbol_len().min(n);
        for len in (1..=max_len).rev() {
            let mut candidates: Vec<(&str, usize, T)> = (0..=n - len)
                .filter(|&i| !covered[i..i + len].contains(&true))
                .filter_map(|i| {
                    let span = &text[bounds[i]..bounds[i + len]];
                    self.vocab.lookup_token(span).map(|token| (span, i, token))
                })
                .collect();

            // Symbols in lexicographic order; each symbol's occurrences left to right.
            candidates.sort_unstable_by(|a, b| a.0.cmp(b.0).then(a.1.cmp(&b.1)));

            for (_, i, token) in candidates {
                let span = &mut covered[i..i + len];
                if span.contains(&true) {
                    continue;
                }
                span.fill(true);
                starts[i] = Some(token);
            }
        }

        for (i, start) in starts.into_iter().enumerate() {
            match start {
                Some(token) => tokens.push(token),
                None if !covered[i] => tokens.push(self.unknown_token),
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        training::MergeTrainerOptions,
        types::WMHashMap,
    };

    fn vocab_of(entries: &[(&str, u32)]) -> SymbolVocab<u32> {
        let map: WMHashMap<Symbol, u32> = entries
            .iter()
            .map(|&(s, t)| (Symbol::from(s), t))
            .collect();
        SymbolVocab::from_symbol_map(map).unwrap()
    }

    #[test]
    fn test_new_requires_unknown_token() {
        let vocab = vocab_of(&[("a", 0)]);
        let segmenter = WordSegmenter::new(None, Some("#")).unwrap();
        assert!(matches!(
            LongestMatchEncoder::new(vocab, segmenter, "<unk>"),
            Err(WordmergeError::UnknownTokenMissing(_))
        ));
    }

    #[test]
    fn test_longest_match() {
        let vocab = vocab_of(&[
            ("<unk>", 0),
            ("cat#", 1),
            ("at", 2),
            ("#", 3),
            ("a", 4),
            ("c", 5),
            ("t", 6),
        ]);
        let segmenter = WordSegmenter::new(None, Some("#")).unwrap();
        let encoder = LongestMatchEncoder::new(vocab, segmenter, "<unk>").unwrap();
        assert_eq!(encoder.unknown_token(), 0);

        assert_eq!(encoder.encode("cat"), vec![1]);
        assert_eq!(encoder.encode("tact"), vec![6, 4, 5, 6, 3]);
        assert_eq!(encoder.encode("bat"), vec![0, 2, 3]);
        assert_eq!(encoder.encode("cat bat"), vec![1, 0, 2, 3]);
        assert_eq!(encoder.encode("  "), Vec::<u32>::new());
    }

    #[test]
    fn test_same_length_lexicographic_priority() {
        // "ab" and "bc" overlap in "abc"; "ab" sorts first and claims "b".
        let vocab = vocab_of(&[("?", 0), ("ab", 1), ("bc", 2), ("a", 3), ("b", 4), ("c", 5)]);
        let encoder = LongestMatchEncoder::new(vocab, WordSegmenter::default(), "?").unwrap();
        assert_eq!(encoder.encode("abc"), vec![1, 5]);

        // Occurrences of one symbol are claimed left to right.
        let vocab = vocab_of(&[("?", 0), ("aa", 1), ("a", 2)]);
        let encoder = LongestMatchEncoder::new(vocab, WordSegmenter::default(), "?").unwrap();
        assert_eq!(encoder.encode("aaa"), vec![1, 2]);
    }

    #[test]
    fn test_unknown_characters() {
        let vocab = vocab_of(&[("<unk>", 0), ("a", 1)]);
        let encoder = LongestMatchEncoder::new(vocab, WordSegmenter::default(), "<unk>").unwrap();
        assert_eq!(encoder.encode("aéza"), vec![1, 0, 0, 1]);
    }

    #[test]
    fn test_encode_trained_vocab() {
        let segmenter = WordSegmenter::new(None, Some("</w>")).unwrap();
        let vocab: SymbolVocab<u32> = MergeTrainerOptions::new(10)
            .init()
            .train_vocab("lower lower newest widest", &segmenter, "<unk>")
            .unwrap();
        let encoder = LongestMatchEncoder::new(vocab, segmenter, "<unk>").unwrap();

        let lower = encoder.vocab().lookup_token("lower</w>").unwrap();
        assert_eq!(encoder.encode("lower"), vec![lower]);

        let batch = encoder.encode_batch(&["lower".to_string(), "lower lower".to_string()]);
        assert_eq!(batch, vec![vec![lower], vec![lower, lower]]);
    }
}

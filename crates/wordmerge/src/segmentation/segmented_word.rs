//! # Segmented Word

use core::fmt;

use crate::types::{Symbol, SymbolPair};

/// An ordered sequence of [`Symbol`]s; one word's current tokenization state.
///
/// Merges never edit a word in place; [`SegmentedWord::merge_pair`] builds the
/// rewritten word, so a partially merged state is never observable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SegmentedWord {
    symbols: Vec<Symbol>,
}

impl<S: Into<Symbol>> FromIterator<S> for SegmentedWord {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<Symbol>> for SegmentedWord {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl fmt::Display for SegmentedWord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "(")?;
        for (idx, symbol) in self.symbols.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
        }
        write!(f, ")")
    }
}

impl SegmentedWord {
    /// View the symbols as a slice.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Get the number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is this word empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols joined back into one string.
    pub fn concat(&self) -> String {
        self.symbols.iter().map(Symbol::as_str).collect()
    }

    /// Get an iterator over adjacent symbol pair windows of this word.
    ///
    /// Overlapping windows are all reported; ``a a a`` yields ``(a, a)`` twice.
    pub fn pairs(&self) -> impl Iterator<Item = (&Symbol, &Symbol)> + '_ {
        self.symbols.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Does this word contain `pair` as adjacent symbols?
    pub fn contains_pair(
        &self,
        pair: &SymbolPair,
    ) -> bool {
        self.pairs().any(|(a, b)| *a == pair.0 && *b == pair.1)
    }

    /// Merge all non-overlapping occurrences of `pair` into one concatenated symbol.
    ///
    /// A single left-to-right pass; a merged symbol is never re-merged
    /// within the same pass.
    ///
    /// # Arguments
    /// * `pair` - the pair to merge.
    ///
    /// # Returns
    /// `None` if the pair does not occur; otherwise the rewritten word.
    pub fn merge_pair(
        &self,
        pair: &SymbolPair,
    ) -> Option<Self> {
        if !self.contains_pair(pair) {
            return None;
        }

        let (a, b) = pair;
        let mut replacement = a.clone();
        replacement.push_str(b);

        let n = self.symbols.len();
        let mut merged: Vec<Symbol> = Vec::with_capacity(n);

        let mut i = 0;
        while i < n {
            let current = &self.symbols[i];
            if i + 1 < n && current == a && &self.symbols[i + 1] == b {
                merged.push(replacement.clone());
                // Skip 'a' and 'b'.
                i += 2;
            } else {
                merged.push(current.clone());
                i += 1;
            }
        }

        Some(Self { symbols: merged })
    }
}

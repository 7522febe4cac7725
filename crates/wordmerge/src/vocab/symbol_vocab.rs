//! # Symbol ``{ Symbol <-> T }`` Vocabulary

use core::cmp::Ordering;

use crate::{
    errors::{WMResult, WordmergeError},
    segmentation::word_segmenter::check_symbol,
    training::{CountType, WordFrequencyMap},
    types::{Symbol, TokenType, WMHashMap, WMHashSet},
};

/// The vocabulary's total symbol order.
///
/// Descending character length, then ascending lexicographic order.
/// Ids are assigned in this order, and encoders try symbols in this order.
pub fn symbol_order(
    a: &str,
    b: &str,
) -> Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

/// An immutable bijection between [`Symbol`]s and dense token ids.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolVocab<T: TokenType> {
    symbol_to_token: WMHashMap<Symbol, T>,
    token_to_symbol: WMHashMap<T, Symbol>,

    /// Entries in [`symbol_order`].
    ordered: Vec<(Symbol, T)>,

    /// The longest symbol, in characters.
    max_symbol_len: usize,
}

impl<T: TokenType> SymbolVocab<T> {
    /// Build a vocabulary from trained word frequencies.
    ///
    /// Collects every symbol of every word, every character of every such
    /// symbol, and `unknown_token`; sorts them by [`symbol_order`] and assigns
    /// ids ``0, 1, 2, ...`` in that order.
    ///
    /// ## Arguments
    /// * `freqs` - the trained word frequencies.
    /// * `unknown_token` - the unknown-token symbol.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(freqs)))]
    pub fn build<C: CountType>(
        freqs: &WordFrequencyMap<C>,
        unknown_token: &str,
    ) -> WMResult<Self> {
        check_symbol("unknown-token", unknown_token)?;

        let mut symbols: WMHashSet<Symbol> = WMHashSet::default();
        let mut buf = [0u8; 4];
        for symbol in freqs.distinct_symbols() {
            symbols.insert(symbol.clone());
            for c in symbol.chars() {
                symbols.insert(Symbol::from(&*c.encode_utf8(&mut buf)));
            }
        }
        symbols.insert(unknown_token.into());

        let mut symbols: Vec<Symbol> = symbols.into_iter().collect();
        symbols.sort_by(|a, b| symbol_order(a, b));

        let size = symbols.len();
        let ordered = symbols
            .into_iter()
            .enumerate()
            .map(|(idx, symbol)| {
                T::from_usize(idx)
                    .map(|token| (symbol, token))
                    .ok_or(WordmergeError::VocabSizeOverflow { size })
            })
            .collect::<WMResult<Vec<_>>>()?;

        log::debug!("Built vocabulary of {} symbols", size);
        Self::from_ordered(ordered)
    }

    /// Build a vocabulary from an existing ``{ Symbol -> T }`` map.
    ///
    /// ## Returns
    /// An error if any symbol is empty, or two symbols share an id.
    pub fn from_symbol_map(symbol_map: WMHashMap<Symbol, T>) -> WMResult<Self> {
        let mut ordered: Vec<(Symbol, T)> = symbol_map.into_iter().collect();
        ordered.sort_by(|(a, _), (b, _)| symbol_order(a, b));
        Self::from_ordered(ordered)
    }

    fn from_ordered(ordered: Vec<(Symbol, T)>) -> WMResult<Self> {
        let mut symbol_to_token: WMHashMap<Symbol, T> = WMHashMap::with_capacity(ordered.len());
        let mut token_to_symbol: WMHashMap<T, Symbol> = WMHashMap::with_capacity(ordered.len());
        let mut max_symbol_len = 0;

        for (symbol, token) in &ordered {
            if symbol.is_empty() {
                return Err(WordmergeError::VocabConflict(format!(
                    "empty symbol for token {token}"
                )));
            }
            if let Some(other) = token_to_symbol.insert(*token, symbol.clone()) {
                return Err(WordmergeError::VocabConflict(format!(
                    "token {token} maps to both {other:?} and {symbol:?}"
                )));
            }
            symbol_to_token.insert(symbol.clone(), *token);
            max_symbol_len = max_symbol_len.max(symbol.chars().count());
        }

        Ok(Self {
            symbol_to_token,
            token_to_symbol,
            ordered,
            max_symbol_len,
        })
    }

    /// The number of symbols in the vocabulary.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// The longest symbol length, in characters.
    pub fn max_symbol_len(&self) -> usize {
        self.max_symbol_len
    }

    /// Return the associated token for the symbol, if any.
    pub fn lookup_token(
        &self,
        symbol: &str,
    ) -> Option<T> {
        self.symbol_to_token.get(symbol).copied()
    }

    /// Return the associated symbol for the token, if any.
    pub fn lookup_symbol(
        &self,
        token: T,
    ) -> Option<&Symbol> {
        self.token_to_symbol.get(&token)
    }

    /// Iterate over ``(symbol, token)`` entries in [`symbol_order`].
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, T)> + '_ {
        self.ordered.iter().map(|(s, t)| (s, *t))
    }

    /// The ``{ Symbol -> T }`` map.
    pub fn symbol_map(&self) -> &WMHashMap<Symbol, T> {
        &self.symbol_to_token
    }

    /// The ``{ T -> Symbol }`` map.
    pub fn token_map(&self) -> &WMHashMap<T, Symbol> {
        &self.token_to_symbol
    }
}

/// Build a vocabulary from trained word frequencies.
///
/// See [`SymbolVocab::build`].
pub fn build_vocabulary<T: TokenType, C: CountType>(
    freqs: &WordFrequencyMap<C>,
    unknown_token: &str,
) -> WMResult<SymbolVocab<T>> {
    SymbolVocab::build(freqs, unknown_token)
}

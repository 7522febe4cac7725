//! # Vocabulary
//!
//! This module provides the vocabulary and related io mechanisms.
//!
//! The primary vocabulary is [`SymbolVocab`], an immutable bijection
//! between symbols and dense token ids, assigned in [`symbol_order`]:
//! longer symbols first, then lexicographic. Retraining produces a new
//! vocabulary; an existing one is never mutated.
pub mod io;

pub mod symbol_vocab;

#[doc(inline)]
pub use symbol_vocab::{SymbolVocab, build_vocabulary, symbol_order};

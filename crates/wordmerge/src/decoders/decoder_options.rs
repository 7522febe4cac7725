//! Token Decoder Options
//!
//! Options for building a [`crate::decoders::DictionaryDecoder`].

use crate::types::Symbol;

/// What a decoder does with a token id that has no symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UnknownTokenPolicy {
    /// Drop the id silently.
    #[default]
    Skip,

    /// Fail with [`crate::WordmergeError::UnknownToken`].
    Strict,

    /// Emit the given text in place of the id.
    Emit(Symbol),
}

/// Options for configuring a [`crate::decoders::TokenDecoder`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecoderOptions {
    /// The unknown id policy.
    pub unknown_policy: UnknownTokenPolicy,
}

impl DecoderOptions {
    /// Gets the configured unknown id policy.
    pub fn unknown_policy(&self) -> &UnknownTokenPolicy {
        &self.unknown_policy
    }

    /// Sets the configured unknown id policy.
    pub fn set_unknown_policy(
        &mut self,
        unknown_policy: UnknownTokenPolicy,
    ) {
        self.unknown_policy = unknown_policy;
    }

    /// Sets the configured unknown id policy.
    pub fn with_unknown_policy(
        mut self,
        unknown_policy: UnknownTokenPolicy,
    ) -> Self {
        self.set_unknown_policy(unknown_policy);
        self
    }
}

//! # Trainer Implementation Utilities

mod pair_counter;
#[cfg(feature = "rayon")]
#[doc(inline)]
pub use pair_counter::par_count_pairs;
#[doc(inline)]
pub use pair_counter::{PairCountMap, PairRef, count_pairs};

mod word_frequency_counter;
#[doc(inline)]
pub use word_frequency_counter::{WordFrequencyCounter, WordFrequencyMap, collect_frequencies};

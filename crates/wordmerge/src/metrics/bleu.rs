//! # BLEU-style Text Similarity
//!
//! Precision here is the number of *distinct* n-grams of `actual` that also
//! occur in `reference`, divided by the larger of the two distinct-set sizes.
//! This is not the clipped-count precision of textbook BLEU, and there is no
//! brevity penalty; scores are not comparable with standard BLEU tooling.

use core::hash::Hash;

use crate::{
    errors::{WMResult, WordmergeError},
    metrics::collect_ngrams,
    types::WMHashSet,
};

/// The default maximum n-gram order for [`calculate_bleu`].
pub const DEFAULT_MAX_ORDER: usize = 3;

/// Computes the distinct-set overlap precision of two n-gram sequences.
///
/// # Examples
///
/// ```
/// use wordmerge::metrics::calculate_precision;
///
/// let actual = [("a", "b"), ("b", "c")];
/// let reference = [("a", "b")];
/// assert_eq!(calculate_precision(&actual, &reference), 0.5);
/// ```
///
/// Returns `0.0` when `actual` is empty.
#[must_use]
pub fn calculate_precision<N: Eq + Hash>(
    actual: &[N],
    reference: &[N],
) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }

    let actual: WMHashSet<&N> = actual.iter().collect();
    let reference: WMHashSet<&N> = reference.iter().collect();

    let matches = actual.intersection(&reference).count();
    let denominator = actual.len().max(reference.len());

    matches as f64 / denominator as f64
}

/// Computes the geometric mean of the first `max_order` precisions.
///
/// Returns `0.0` if any of those precisions is negative.
///
/// # Errors
///
/// [`WordmergeError::InvalidOrder`] if `max_order` is zero or exceeds
/// `precisions.len()`.
pub fn geo_mean(
    precisions: &[f64],
    max_order: usize,
) -> WMResult<f64> {
    if max_order == 0 || max_order > precisions.len() {
        return Err(WordmergeError::InvalidOrder(format!(
            "max order {max_order} needs between 1 and {} precisions",
            precisions.len()
        )));
    }

    let precisions = &precisions[..max_order];
    if precisions.iter().any(|p| *p < 0.0) {
        return Ok(0.0);
    }

    let product: f64 = precisions.iter().product();
    Ok(product.powf(1.0 / max_order as f64))
}

/// Scores `actual` against `reference` on a `[0, 100]` scale.
///
/// Character n-gram precisions for orders ``1..=max_order`` are combined
/// with [`geo_mean`] and scaled by 100.
///
/// # Examples
///
/// ```
/// use wordmerge::metrics::{calculate_bleu, DEFAULT_MAX_ORDER};
///
/// let score = calculate_bleu("the cat", "the cat", DEFAULT_MAX_ORDER).unwrap();
/// assert_eq!(score, 100.0);
///
/// let score = calculate_bleu("", "the cat", DEFAULT_MAX_ORDER).unwrap();
/// assert_eq!(score, 0.0);
/// ```
///
/// # Errors
///
/// [`WordmergeError::InvalidOrder`] if `max_order` is zero.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(actual, reference)))]
pub fn calculate_bleu(
    actual: &str,
    reference: &str,
    max_order: usize,
) -> WMResult<f64> {
    if max_order == 0 {
        return Err(WordmergeError::InvalidOrder(
            "max order must be at least 1".to_string(),
        ));
    }

    let precisions = (1..=max_order)
        .map(|order| {
            let actual = collect_ngrams(actual, order)?;
            let reference = collect_ngrams(reference, order)?;
            Ok(calculate_precision(&actual, &reference))
        })
        .collect::<WMResult<Vec<f64>>>()?;

    log::trace!("n-gram precisions: {precisions:?}");

    Ok(geo_mean(&precisions, max_order)? * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_precision() {
        assert_eq!(calculate_precision(&["ab", "bc"], &["ab"]), 0.5);
        assert_eq!(calculate_precision(&["ab"], &["ab", "bc"]), 0.5);
        assert_eq!(calculate_precision::<&str>(&[], &["ab"]), 0.0);
        assert_eq!(calculate_precision(&["ab"], &[]), 0.0);

        // Duplicates collapse before counting.
        assert_eq!(calculate_precision(&["a", "a", "b"], &["a", "b", "b"]), 1.0);
        assert_eq!(calculate_precision(&["a", "a", "a"], &["a", "c"]), 0.5);
    }

    #[test]
    fn test_geo_mean() {
        assert_eq!(geo_mean(&[1.0, 1.0, 1.0], 3).unwrap(), 1.0);
        assert!((geo_mean(&[0.5, 0.5], 2).unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(geo_mean(&[0.5, 0.0, 1.0], 3).unwrap(), 0.0);
        assert_eq!(geo_mean(&[0.5, -1.0], 2).unwrap(), 0.0);

        // Only the first `max_order` values take part.
        assert_eq!(geo_mean(&[0.25, -1.0], 1).unwrap(), 0.25);

        assert!(matches!(
            geo_mean(&[0.5], 0),
            Err(WordmergeError::InvalidOrder(_))
        ));
        assert!(matches!(
            geo_mean(&[0.5], 2),
            Err(WordmergeError::InvalidOrder(_))
        ));
    }

    #[test]
    fn test_calculate_bleu_bounds() {
        assert_eq!(calculate_bleu("hello world", "hello world", 3).unwrap(), 100.0);
        assert_eq!(calculate_bleu("", "hello world", 3).unwrap(), 0.0);
        assert_eq!(calculate_bleu("abc", "xyz", 1).unwrap(), 0.0);

        // Order 3 is not achievable for a two-character text.
        assert_eq!(calculate_bleu("ab", "ab", 3).unwrap(), 0.0);
    }

    #[test]
    fn test_calculate_bleu_partial() {
        // Order 1: {a, b} vs {a, c}: 1 / 2.
        // Order 2: {ab} vs {ac}: 0 / 1.
        assert_eq!(calculate_bleu("ab", "ac", 1).unwrap(), 50.0);
        assert_eq!(calculate_bleu("ab", "ac", 2).unwrap(), 0.0);

        // Order 1: {a, b, c} vs {a, b, d}: 2 / 3.
        // Order 2: {ab, bc} vs {ab, bd}: 1 / 2.
        let score = calculate_bleu("abc", "abd", 2).unwrap();
        assert!((score - 100.0 * (1.0f64 / 3.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_bleu_invalid_order() {
        assert!(matches!(
            calculate_bleu("a", "a", 0),
            Err(WordmergeError::InvalidOrder(_))
        ));
    }
}

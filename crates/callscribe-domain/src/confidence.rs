//! Confidence arithmetic for extracted events

/// Confidence assigned when the model omits a score or supplies something
/// that is not a number
pub const DEFAULT_CONFIDENCE: f64 = 0.7;

/// Clamp a confidence score into [0, 1]
///
/// NaN has no meaningful ordering, so it maps to [`DEFAULT_CONFIDENCE`]
/// rather than poisoning downstream means.
pub fn clamp(score: f64) -> f64 {
    if score.is_nan() {
        return DEFAULT_CONFIDENCE;
    }
    score.clamp(0.0, 1.0)
}

/// Arithmetic mean of a set of confidence scores
///
/// Returns 0.0 for an empty slice: a call with no extracted events has no
/// aggregate confidence, which is not an error.
pub fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: clamp output is always in [0, 1]
        #[test]
        fn test_clamp_always_in_unit_interval(score in proptest::num::f64::ANY) {
            let clamped = clamp(score);
            prop_assert!((0.0..=1.0).contains(&clamped));
        }

        /// Property: the mean of n copies of x equals x
        #[test]
        fn test_mean_of_constant(x in 0.0f64..=1.0, n in 1usize..50) {
            let scores = vec![x; n];
            let m = mean(&scores);
            prop_assert!((m - x).abs() < 1e-9);
        }

        /// Property: the mean of clamped scores stays in [0, 1]
        #[test]
        fn test_mean_of_clamped_in_unit_interval(scores in proptest::collection::vec(proptest::num::f64::ANY, 0..20)) {
            let clamped: Vec<f64> = scores.into_iter().map(clamp).collect();
            let m = mean(&clamped);
            prop_assert!((0.0..=1.0).contains(&m));
        }
    }
}

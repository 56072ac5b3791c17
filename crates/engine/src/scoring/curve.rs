//! The log-normal scoring curve.

use super::{inverse_normal_cdf, normal_cdf};
use webperf_audit_domain::ScoreParameters;

/// Score earned exactly at the point of diminishing returns.
///
/// Calibration constant: together with the 0.5 score pinned to the median
/// threshold, it fully determines the curve's shape. Tunable, but changing
/// it reshapes every score computed from existing threshold calibrations.
pub const PODR_SCORE: f64 = 0.9;

/// Score a timing against a calibrated parameter pair.
///
/// The curve is the complementary CDF of a log-normal distribution whose
/// location comes from the median threshold and whose shape is derived from
/// the low/median ratio via the standard-normal quantile at `1 - PODR_SCORE`.
/// Exact calibration points: `score(low) == PODR_SCORE`,
/// `score(median) == 0.5`. Monotonically non-increasing in `timing_ms`;
/// a timing of 0 scores ~1 and timing → ∞ scores → 0.
///
/// Out-of-range timings are not an error: the CDF naturally confines the
/// result to [0, 1]. A zero timing (instant paint) is clamped to the
/// smallest positive float before the log transform, so no NaN or division
/// by zero can occur. Callers are expected to have validated `params`
/// (see [`ScoreParameters::validate`]); the curve itself assumes
/// `0 < low < median`.
pub fn log_normal_score(timing_ms: f64, params: &ScoreParameters) -> f64 {
    let timing = timing_ms.max(f64::MIN_POSITIVE);

    let location = params.median_threshold_ms.ln();
    let log_ratio = (params.low_threshold_ms / params.median_threshold_ms).ln();
    let shape = log_ratio / inverse_normal_cdf(1.0 - PODR_SCORE);

    let standardized = (timing.ln() - location) / shape;
    (1.0 - normal_cdf(standardized)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mobile_defaults() -> ScoreParameters {
        ScoreParameters::new(2000.0, 4000.0).unwrap()
    }

    #[test]
    fn median_threshold_scores_exactly_half() {
        let params = mobile_defaults();
        assert!((log_normal_score(4000.0, &params) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn low_threshold_scores_at_the_podr_constant() {
        let params = mobile_defaults();
        assert!((log_normal_score(2000.0, &params) - PODR_SCORE).abs() < 1e-6);
    }

    #[test]
    fn zero_timing_is_finite_and_near_one() {
        let params = mobile_defaults();
        let score = log_normal_score(0.0, &params);
        assert!(score.is_finite());
        assert!(score > 0.999);
    }

    #[test]
    fn huge_timing_approaches_zero() {
        let params = mobile_defaults();
        assert!(log_normal_score(1.0e9, &params) < 1e-6);
    }

    #[test]
    fn desktop_calibration_points() {
        let params = ScoreParameters::new(800.0, 1600.0).unwrap();
        assert!((log_normal_score(800.0, &params) - 0.9).abs() < 1e-6);
        assert!((log_normal_score(1600.0, &params) - 0.5).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn score_stays_in_unit_interval(
            timing in 0.0f64..1.0e8,
            low in 1.0f64..50_000.0,
            spread in 1.01f64..20.0,
        ) {
            let params = ScoreParameters::new(low, low * spread).unwrap();
            let score = log_normal_score(timing, &params);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn score_never_increases_with_timing(
            timing in 0.0f64..1.0e7,
            delta in 0.0f64..1.0e7,
            low in 1.0f64..50_000.0,
            spread in 1.01f64..20.0,
        ) {
            let params = ScoreParameters::new(low, low * spread).unwrap();
            let earlier = log_normal_score(timing, &params);
            let later = log_normal_score(timing + delta, &params);
            // Small slack absorbs noise from the erf approximation.
            prop_assert!(later <= earlier + 1e-7);
        }
    }
}

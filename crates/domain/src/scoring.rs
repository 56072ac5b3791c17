//! Score calibration parameters and per-device resolution.

use crate::errors::AuditError;
use serde::{Deserialize, Serialize};

/// Calibration points for the log-normal scoring curve of one metric.
///
/// `low_threshold_ms` is the point of diminishing returns: timings at or
/// below it earn a score near the top of the range. `median_threshold_ms`
/// is the timing scored exactly at 0.5, calibrated from real-world
/// percentile data. The pair must satisfy `0 < low < median`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreParameters {
    /// Point-of-diminishing-returns threshold, milliseconds.
    pub low_threshold_ms: f64,
    /// Median threshold (scored at 0.5), milliseconds.
    pub median_threshold_ms: f64,
}

impl ScoreParameters {
    /// Create a parameter pair, enforcing the threshold invariant.
    pub fn new(low_threshold_ms: f64, median_threshold_ms: f64) -> Result<Self, AuditError> {
        let params = Self {
            low_threshold_ms,
            median_threshold_ms,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check that both thresholds are positive, finite, and ordered.
    ///
    /// A violation is a configuration bug in the host, not a runtime
    /// condition: it is rejected here instead of producing a degenerate
    /// curve downstream.
    pub fn validate(&self) -> Result<(), AuditError> {
        if !self.low_threshold_ms.is_finite() || self.low_threshold_ms <= 0.0 {
            return Err(AuditError::InvalidConfiguration(format!(
                "low threshold must be a positive number, got {}",
                self.low_threshold_ms
            )));
        }
        if !self.median_threshold_ms.is_finite() || self.median_threshold_ms <= 0.0 {
            return Err(AuditError::InvalidConfiguration(format!(
                "median threshold must be a positive number, got {}",
                self.median_threshold_ms
            )));
        }
        if self.low_threshold_ms >= self.median_threshold_ms {
            return Err(AuditError::InvalidConfiguration(format!(
                "low threshold ({}) must be below the median threshold ({})",
                self.low_threshold_ms, self.median_threshold_ms
            )));
        }
        Ok(())
    }
}

/// Per-device calibration for one metric, overridable by the host
/// configuration layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScoringOptions {
    /// Calibration applied to mobile page loads.
    pub mobile: ScoreParameters,
    /// Calibration applied to desktop page loads.
    pub desktop: ScoreParameters,
}

impl MetricScoringOptions {
    /// Select the parameter pair for a device classification.
    ///
    /// Only an explicit desktop classification (`Some(false)`) selects the
    /// desktop calibration; mobile is the fallback when the classification
    /// is absent. The selected pair is validated before it is handed out.
    pub fn resolve(&self, is_mobile_device: Option<bool>) -> Result<&ScoreParameters, AuditError> {
        let params = match is_mobile_device {
            Some(false) => &self.desktop,
            _ => &self.mobile,
        };
        params.validate()?;
        Ok(params)
    }
}

impl Default for MetricScoringOptions {
    fn default() -> Self {
        Self {
            mobile: ScoreParameters {
                low_threshold_ms: 2000.0,
                median_threshold_ms: 4000.0,
            },
            desktop: ScoreParameters {
                low_threshold_ms: 800.0,
                median_threshold_ms: 1600.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_calibration_is_valid() {
        let options = MetricScoringOptions::default();
        assert!(options.mobile.validate().is_ok());
        assert!(options.desktop.validate().is_ok());
    }

    #[test]
    fn resolves_desktop_only_when_explicit() {
        let options = MetricScoringOptions::default();

        let desktop = options.resolve(Some(false)).unwrap();
        assert_eq!(*desktop, options.desktop);

        let mobile = options.resolve(Some(true)).unwrap();
        assert_eq!(*mobile, options.mobile);

        // Absent classification falls back to mobile.
        let fallback = options.resolve(None).unwrap();
        assert_eq!(*fallback, options.mobile);
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let err = ScoreParameters::new(4000.0, 2000.0).unwrap_err();
        assert!(matches!(err, AuditError::InvalidConfiguration(_)));

        let err = ScoreParameters::new(2000.0, 2000.0).unwrap_err();
        assert!(matches!(err, AuditError::InvalidConfiguration(_)));
    }

    #[test]
    fn rejects_non_positive_thresholds() {
        assert!(ScoreParameters::new(0.0, 1600.0).is_err());
        assert!(ScoreParameters::new(-800.0, 1600.0).is_err());
        assert!(ScoreParameters::new(800.0, f64::NAN).is_err());
    }

    #[test]
    fn resolution_validates_the_selected_pair() {
        let options = MetricScoringOptions {
            mobile: ScoreParameters {
                low_threshold_ms: 2000.0,
                median_threshold_ms: 4000.0,
            },
            desktop: ScoreParameters {
                low_threshold_ms: 1600.0,
                median_threshold_ms: 800.0,
            },
        };

        // The broken desktop pair only surfaces when desktop is selected.
        assert!(options.resolve(None).is_ok());
        assert!(options.resolve(Some(false)).is_err());
    }

    #[test]
    fn options_deserialize_from_host_configuration() {
        let json = r#"{
            "mobile": { "low_threshold_ms": 1500, "median_threshold_ms": 3500 },
            "desktop": { "low_threshold_ms": 700, "median_threshold_ms": 1400 }
        }"#;
        let options: MetricScoringOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.mobile.low_threshold_ms, 1500.0);
        assert_eq!(options.desktop.median_threshold_ms, 1400.0);
    }
}

//! Timing values extracted from browser instrumentation.

use crate::errors::AuditError;
use serde::{Deserialize, Serialize};

/// A paint/event timing in milliseconds, relative to navigation start.
///
/// Produced once per evaluation context by the computed-metric layer and
/// immutable afterwards. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimingValue(f64);

impl TimingValue {
    /// Create a timing value, rejecting NaN, infinities, and negatives.
    pub fn new(millis: f64) -> Result<Self, AuditError> {
        if !millis.is_finite() || millis < 0.0 {
            return Err(AuditError::UpstreamComputation(format!(
                "metric produced an invalid timing: {millis}"
            )));
        }
        Ok(Self(millis))
    }

    /// The timing in milliseconds.
    pub fn as_millis(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for TimingValue {
    type Error = AuditError;

    fn try_from(millis: f64) -> Result<Self, Self::Error> {
        Self::new(millis)
    }
}

impl std::fmt::Display for TimingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

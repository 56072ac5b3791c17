//! The upstream computed-metric provider interface.

use async_trait::async_trait;
use webperf_audit_domain::{AuditError, AuditSettings, DevtoolsLog, TimingValue, Trace};

/// Inputs handed to a metric computation.
///
/// Cloned out of the artifacts and context at request time so the
/// computation can run detached from the borrowed audit invocation.
#[derive(Debug, Clone)]
pub struct MetricInput {
    /// Browser trace of the designated collection pass.
    pub trace: Trace,
    /// DevTools network log of the designated collection pass.
    pub devtools_log: DevtoolsLog,
    /// Host settings forwarded to the provider.
    pub settings: AuditSettings,
}

/// The value produced by a metric computation.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricValue {
    /// When the metric's event occurred, relative to navigation start.
    pub timing: TimingValue,
}

/// An upstream provider that derives one timing metric from trace data.
///
/// Implementations do the actual trace analysis; the engine only requests
/// values through [`super::ComputedMetricCache`], which enforces the
/// at-most-once-per-context guarantee. A provider failure (malformed trace,
/// missing required event) is returned as
/// [`AuditError::UpstreamComputation`] and propagated unchanged; the engine
/// performs no recovery and never substitutes a default timing.
#[async_trait]
pub trait ComputedMetric: Send + Sync {
    /// Stable key identifying this metric, used as the cache key.
    fn key(&self) -> &'static str;

    /// Analyze the trace and produce the metric's timing.
    async fn compute(&self, input: &MetricInput) -> Result<MetricValue, AuditError>;
}

//! The per-run evaluation context.

use crate::metrics::{ComputedMetric, ComputedMetricCache, MetricInput, MetricValue};
use std::sync::Arc;
use webperf_audit_domain::{Artifacts, AuditError, AuditSettings};

/// State shared by every audit within one assessment run.
///
/// Owns the computed-metric cache, so two audits requesting the same metric
/// against the same context trigger a single trace analysis. Created by the
/// host per run and dropped with it; audits only borrow it.
#[derive(Debug, Default)]
pub struct EvaluationContext {
    /// Host settings forwarded to metric providers.
    pub settings: AuditSettings,
    metric_cache: ComputedMetricCache,
}

impl EvaluationContext {
    /// Create a context with the given settings and an empty metric cache.
    pub fn new(settings: AuditSettings) -> Self {
        Self {
            settings,
            metric_cache: ComputedMetricCache::new(),
        }
    }

    /// Request a metric for the given artifacts through this context's cache.
    ///
    /// Performs the cheap artifact shape check (trace and network log must
    /// be present) before any computation is started; a missing artifact
    /// surfaces as [`AuditError::MissingArtifact`] without touching the
    /// cache.
    pub async fn request_metric(
        &self,
        metric: Arc<dyn ComputedMetric>,
        artifacts: &Artifacts,
    ) -> Result<MetricValue, AuditError> {
        let input = MetricInput {
            trace: artifacts.require_trace()?.clone(),
            devtools_log: artifacts.require_devtools_log()?.clone(),
            settings: self.settings.clone(),
        };
        self.metric_cache.request(metric, input).await
    }

    /// The context's metric cache.
    pub fn metric_cache(&self) -> &ComputedMetricCache {
        &self.metric_cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use webperf_audit_domain::{DevtoolsLog, TimingValue, Trace};

    struct FixedMetric;

    #[async_trait]
    impl ComputedMetric for FixedMetric {
        fn key(&self) -> &'static str {
            "fixed-metric"
        }

        async fn compute(&self, _input: &MetricInput) -> Result<MetricValue, AuditError> {
            Ok(MetricValue {
                timing: TimingValue::new(42.0)?,
            })
        }
    }

    #[tokio::test]
    async fn missing_artifacts_fail_before_any_computation() {
        let context = EvaluationContext::default();
        let err = context
            .request_metric(Arc::new(FixedMetric), &Artifacts::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AuditError::MissingArtifact(_)));
        assert!(context.metric_cache().is_empty());
    }

    #[tokio::test]
    async fn complete_artifacts_reach_the_provider() {
        let context = EvaluationContext::default();
        let artifacts = Artifacts {
            trace: Some(Trace(serde_json::json!({ "traceEvents": [] }))),
            devtools_log: Some(DevtoolsLog(serde_json::json!([]))),
            is_mobile_device: None,
        };

        let value = context
            .request_metric(Arc::new(FixedMetric), &artifacts)
            .await
            .unwrap();
        assert_eq!(value.timing.as_millis(), 42.0);
        assert_eq!(context.metric_cache().len(), 1);
    }
}

//! The First Meaningful Paint audit.

use super::AuditRunner;
use crate::context::EvaluationContext;
use crate::i18n::{message_ids, MessageBundle};
use crate::metrics::ComputedMetric;
use crate::scoring::log_normal_score;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};
use webperf_audit_domain::{
    artifacts::{DEVTOOLS_LOG_ARTIFACT, TRACE_ARTIFACT},
    Artifacts, AuditDescriptor, AuditError, AuditResult, MetricScoringOptions, NumericUnit,
    ScoreDisplayMode,
};

/// Stable id of the First Meaningful Paint audit.
pub const FMP_AUDIT_ID: &str = "first-meaningful-paint";

/// Stable key of the upstream First Meaningful Paint metric computation.
pub const FMP_METRIC_KEY: &str = "first-meaningful-paint";

/// Scores how quickly a page paints its primary content.
///
/// The timing itself comes from an upstream [`ComputedMetric`] provider;
/// this audit requests it through the context's cache, resolves the
/// per-device calibration, and maps the timing onto the log-normal curve.
pub struct FirstMeaningfulPaintAudit {
    metric: Arc<dyn ComputedMetric>,
    options: MetricScoringOptions,
}

impl FirstMeaningfulPaintAudit {
    /// Create the audit with the default calibration.
    pub fn new(metric: Arc<dyn ComputedMetric>) -> Self {
        Self::with_options(metric, MetricScoringOptions::default())
    }

    /// Create the audit with host-supplied calibration.
    pub fn with_options(metric: Arc<dyn ComputedMetric>, options: MetricScoringOptions) -> Self {
        Self { metric, options }
    }

    /// Static metadata consumed by the host reporting framework.
    pub fn descriptor() -> AuditDescriptor {
        AuditDescriptor {
            id: FMP_AUDIT_ID.to_string(),
            title_id: message_ids::FMP_TITLE.to_string(),
            description_id: message_ids::FMP_DESCRIPTION.to_string(),
            score_display_mode: ScoreDisplayMode::Numeric,
            required_artifacts: vec![
                TRACE_ARTIFACT.to_string(),
                DEVTOOLS_LOG_ARTIFACT.to_string(),
            ],
        }
    }
}

#[async_trait]
impl AuditRunner for FirstMeaningfulPaintAudit {
    #[instrument(skip_all, fields(audit = FMP_AUDIT_ID))]
    async fn run(
        &self,
        artifacts: &Artifacts,
        context: &EvaluationContext,
        bundle: &MessageBundle,
    ) -> Result<AuditResult, AuditError> {
        // Suspends here while the provider analyzes the trace; scoring only
        // ever runs against a successfully retrieved timing.
        let value = context.request_metric(self.metric.clone(), artifacts).await?;

        let params = self.options.resolve(artifacts.is_mobile_device)?;
        let score = log_normal_score(value.timing.as_millis(), params);
        let display_value = bundle.format_ms(message_ids::SECONDS_DISPLAY, value.timing.as_millis())?;

        info!(
            timing_ms = value.timing.as_millis(),
            score,
            "first meaningful paint scored"
        );

        Ok(AuditResult {
            score,
            numeric_value: value.timing,
            numeric_unit: NumericUnit::Millisecond,
            display_value,
        })
    }
}

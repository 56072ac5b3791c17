//! Audit runners and the audit registry.
//!
//! An audit is a data-driven [`AuditDescriptor`] paired with a runner
//! implementing [`AuditRunner`]; the registry maps audit ids to those pairs.
//! Metadata lives in plain structs rather than on the runner type, so hosts
//! can enumerate and render audits without invoking them.

mod first_meaningful_paint;
mod registry;

pub use first_meaningful_paint::{FirstMeaningfulPaintAudit, FMP_AUDIT_ID, FMP_METRIC_KEY};
pub use registry::{AuditRegistry, RegisteredAudit};

use crate::context::EvaluationContext;
use crate::i18n::MessageBundle;
use async_trait::async_trait;
use webperf_audit_domain::{Artifacts, AuditError, AuditResult};

/// One audit's run function.
///
/// A single-pass, stateless pipeline per invocation: request the metric,
/// resolve calibration, score, package. Implementations must not mutate the
/// artifacts or any context state beyond what the metric cache does
/// internally, so running an audit twice against one context yields an
/// identical result.
#[async_trait]
pub trait AuditRunner: Send + Sync {
    /// Produce the audit result for one invocation.
    async fn run(
        &self,
        artifacts: &Artifacts,
        context: &EvaluationContext,
        bundle: &MessageBundle,
    ) -> Result<AuditResult, AuditError>;
}

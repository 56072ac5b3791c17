//! Webperf Audit Engine
//!
//! Library-level scoring engine invoked by a host audit runner. It turns a
//! raw millisecond timing extracted from a browser trace into a calibrated
//! 0–1 quality score and packages it as a reportable audit result.
//!
//! ## Architecture
//!
//! - `scoring` - Log-normal scoring curve and its numeric underpinnings
//! - `metrics` - Computed-metric provider boundary and single-flight cache
//! - `context` - Per-run evaluation context shared across audits
//! - `i18n` - Explicit message bundles for display strings
//! - `audits` - Audit runners, descriptors, and the audit registry
//! - `telemetry` - Tracing bootstrap for hosts and tests
//!
//! The engine owns no wire protocol, file format, or CLI surface. Trace
//! parsing and paint-timing heuristics live behind the [`metrics::ComputedMetric`]
//! boundary; report rendering belongs to the host.

pub mod audits;
pub mod context;
pub mod i18n;
pub mod metrics;
pub mod scoring;
pub mod telemetry;

// Re-export commonly used types
pub use audits::{AuditRegistry, AuditRunner, FirstMeaningfulPaintAudit};
pub use context::EvaluationContext;
pub use i18n::MessageBundle;
pub use metrics::{ComputedMetric, ComputedMetricCache, MetricInput, MetricValue};
pub use scoring::{log_normal_score, PODR_SCORE};

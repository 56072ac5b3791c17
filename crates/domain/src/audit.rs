//! Audit metadata descriptors and the result record handed to reporters.

use crate::timing::TimingValue;
use serde::{Deserialize, Serialize};

/// How the host reporting framework should render an audit's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreDisplayMode {
    /// Continuous score in [0, 1], rendered on a gauge.
    Numeric,
    /// Pass/fail.
    Binary,
    /// No score; the numeric value is shown for information only.
    Informative,
    /// The audit did not apply to this page.
    NotApplicable,
}

/// Unit of an audit's numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericUnit {
    /// Milliseconds.
    Millisecond,
    /// Bytes.
    Byte,
    /// Dimensionless count or ratio.
    Unitless,
}

/// Static metadata for one audit, consumed by the host reporting framework.
///
/// Plain data rather than behavior: the registry pairs a descriptor with the
/// function that implements the audit, so no inheritance hierarchy is needed
/// to carry metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditDescriptor {
    /// Stable audit identifier, e.g. `"first-meaningful-paint"`.
    pub id: String,
    /// Message-bundle id of the human-readable title.
    pub title_id: String,
    /// Message-bundle id of the description shown under the title.
    pub description_id: String,
    /// How the score is rendered.
    pub score_display_mode: ScoreDisplayMode,
    /// Artifact names the host must gather before invoking the audit.
    pub required_artifacts: Vec<String>,
}

/// The record produced by one audit invocation.
///
/// Constructed fresh on every run; the engine keeps no state between
/// invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    /// Normalized quality score in [0, 1].
    pub score: f64,
    /// The raw metric value the score was derived from.
    pub numeric_value: TimingValue,
    /// Unit of `numeric_value`.
    pub numeric_unit: NumericUnit,
    /// Localized, human-readable rendering of the metric value.
    pub display_value: String,
}

//! Artifacts collected by the host runner before audits execute.
//!
//! The engine treats traces and network logs as opaque payloads: extracting
//! timings from them is the job of the upstream computed-metric providers.
//! Only cheap shape checks (presence of required artifacts) happen here.

use crate::errors::AuditError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical artifact name for the browser trace of the default pass.
pub const TRACE_ARTIFACT: &str = "traces";

/// Canonical artifact name for the DevTools network log of the default pass.
pub const DEVTOOLS_LOG_ARTIFACT: &str = "devtoolsLogs";

/// An opaque browser trace payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace(pub serde_json::Value);

/// An opaque DevTools protocol network log payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DevtoolsLog(pub serde_json::Value);

/// The artifact bag handed to an audit invocation by the host framework.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artifacts {
    /// Browser trace of the designated collection pass, if gathered.
    pub trace: Option<Trace>,
    /// Network log of the designated collection pass, if gathered.
    pub devtools_log: Option<DevtoolsLog>,
    /// Device classification: `Some(true)` mobile, `Some(false)` desktop,
    /// `None` when the host did not classify the run.
    pub is_mobile_device: Option<bool>,
}

impl Artifacts {
    /// The trace, or `MissingArtifact` when the host failed to supply one.
    pub fn require_trace(&self) -> Result<&Trace, AuditError> {
        self.trace
            .as_ref()
            .ok_or(AuditError::MissingArtifact(TRACE_ARTIFACT))
    }

    /// The network log, or `MissingArtifact` when the host failed to supply one.
    pub fn require_devtools_log(&self) -> Result<&DevtoolsLog, AuditError> {
        self.devtools_log
            .as_ref()
            .ok_or(AuditError::MissingArtifact(DEVTOOLS_LOG_ARTIFACT))
    }
}

/// Host-provided settings forwarded to computed-metric providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSettings {
    /// BCP 47 locale tag used for display formatting downstream.
    pub locale: String,
    /// Provider-specific settings the engine forwards without inspecting.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            extra: HashMap::new(),
        }
    }
}

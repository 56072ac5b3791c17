//! Error taxonomy surfaced to the invoking framework.
//!
//! Every failure is surfaced as a rejected computation; none are converted
//! into a default numeric score. A missing or failed metric must never
//! silently render as a perfect or zero score.

/// Errors produced by the audit engine.
///
/// `Clone` so a failure cached by the computed-metric layer can be fanned
/// out unchanged to every audit awaiting the same computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditError {
    /// The upstream metric provider could not produce a timing, e.g. the
    /// trace lacks a required event. Propagated unchanged, no retry.
    #[error("metric computation failed: {0}")]
    UpstreamComputation(String),

    /// Score calibration violated the threshold invariant. A host
    /// configuration bug, rejected at resolution time.
    #[error("invalid scoring configuration: {0}")]
    InvalidConfiguration(String),

    /// A required artifact was absent from the invocation.
    #[error("required artifact missing: {0}")]
    MissingArtifact(&'static str),

    /// A message id was not present in the supplied bundle.
    #[error("unknown message id: {0}")]
    MissingMessage(String),

    /// No audit registered under the requested id.
    #[error("unknown audit id: {0}")]
    UnknownAudit(String),
}

impl AuditError {
    /// Stable error code for host reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UpstreamComputation(_) => "UPSTREAM_COMPUTATION",
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            Self::MissingArtifact(_) => "MISSING_ARTIFACT",
            Self::MissingMessage(_) => "MISSING_MESSAGE",
            Self::UnknownAudit(_) => "UNKNOWN_AUDIT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            AuditError::UpstreamComputation("no FMP event".into()).error_code(),
            "UPSTREAM_COMPUTATION"
        );
        assert_eq!(
            AuditError::MissingArtifact("traces").error_code(),
            "MISSING_ARTIFACT"
        );
    }

    #[test]
    fn errors_carry_their_cause_in_the_message() {
        let err = AuditError::UpstreamComputation("trace lacks navigationStart".into());
        assert!(err.to_string().contains("navigationStart"));
    }
}

//! Explicit message bundles for display strings.
//!
//! Display strings are resolved through a bundle passed into the audit
//! runner, keyed by stable string identifiers. There is no process-global
//! registration table: hosts construct (or extend) a bundle per locale and
//! hand it to each invocation.

use std::collections::HashMap;
use webperf_audit_domain::AuditError;

/// Stable message identifiers used by the built-in audits.
pub mod message_ids {
    /// Title of the First Meaningful Paint audit.
    pub const FMP_TITLE: &str = "firstMeaningfulPaint.title";
    /// Description of the First Meaningful Paint audit.
    pub const FMP_DESCRIPTION: &str = "firstMeaningfulPaint.description";
    /// Template rendering a millisecond timing as seconds.
    pub const SECONDS_DISPLAY: &str = "core.seconds";
}

/// Placeholder substituted by [`MessageBundle::format_ms`].
const TIME_IN_MS_PLACEHOLDER: &str = "{timeInMs}";

/// A locale's messages, keyed by stable string id.
#[derive(Debug, Clone, Default)]
pub struct MessageBundle {
    messages: HashMap<String, String>,
}

impl MessageBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in en-US bundle covering the shipped audits.
    pub fn en_us() -> Self {
        let mut bundle = Self::new();
        bundle.insert(message_ids::FMP_TITLE, "First Meaningful Paint");
        bundle.insert(
            message_ids::FMP_DESCRIPTION,
            "First Meaningful Paint measures when the primary content of a \
             page is visible.",
        );
        bundle.insert(message_ids::SECONDS_DISPLAY, "{timeInMs}\u{a0}s");
        bundle
    }

    /// Add or replace a message.
    pub fn insert(&mut self, id: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(id.into(), template.into());
    }

    /// Resolve a fixed string.
    pub fn format(&self, id: &str) -> Result<String, AuditError> {
        self.template(id).map(str::to_string)
    }

    /// Resolve a timing template, rendering `time_in_ms` as seconds with one
    /// decimal in place of the `{timeInMs}` placeholder.
    pub fn format_ms(&self, id: &str, time_in_ms: f64) -> Result<String, AuditError> {
        let seconds = format!("{:.1}", time_in_ms / 1000.0);
        Ok(self.template(id)?.replace(TIME_IN_MS_PLACEHOLDER, &seconds))
    }

    fn template(&self, id: &str) -> Result<&str, AuditError> {
        self.messages
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| AuditError::MissingMessage(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bundle_carries_the_fmp_strings() {
        let bundle = MessageBundle::en_us();
        assert_eq!(
            bundle.format(message_ids::FMP_TITLE).unwrap(),
            "First Meaningful Paint"
        );
        assert!(bundle.format(message_ids::FMP_DESCRIPTION).is_ok());
    }

    #[test]
    fn timings_render_as_seconds() {
        let bundle = MessageBundle::en_us();
        assert_eq!(
            bundle.format_ms(message_ids::SECONDS_DISPLAY, 2000.0).unwrap(),
            "2.0\u{a0}s"
        );
        assert_eq!(
            bundle.format_ms(message_ids::SECONDS_DISPLAY, 3567.0).unwrap(),
            "3.6\u{a0}s"
        );
        assert_eq!(
            bundle.format_ms(message_ids::SECONDS_DISPLAY, 0.0).unwrap(),
            "0.0\u{a0}s"
        );
    }

    #[test]
    fn unknown_ids_are_an_error_not_a_fallback() {
        let bundle = MessageBundle::en_us();
        let err = bundle.format("no.such.message").unwrap_err();
        assert_eq!(err, AuditError::MissingMessage("no.such.message".into()));
    }

    #[test]
    fn hosts_can_override_messages() {
        let mut bundle = MessageBundle::en_us();
        bundle.insert(message_ids::SECONDS_DISPLAY, "{timeInMs} Sekunden");
        assert_eq!(
            bundle.format_ms(message_ids::SECONDS_DISPLAY, 1500.0).unwrap(),
            "1.5 Sekunden"
        );
    }
}

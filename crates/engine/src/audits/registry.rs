//! The audit registry.

use super::{AuditRunner, FirstMeaningfulPaintAudit};
use crate::context::EvaluationContext;
use crate::i18n::MessageBundle;
use crate::metrics::ComputedMetric;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;
use webperf_audit_domain::{Artifacts, AuditDescriptor, AuditError, AuditResult};

/// A descriptor paired with the runner that implements it.
#[derive(Clone)]
pub struct RegisteredAudit {
    /// Static metadata for the host reporting framework.
    pub descriptor: AuditDescriptor,
    runner: Arc<dyn AuditRunner>,
}

impl RegisteredAudit {
    /// The audit's runner.
    pub fn runner(&self) -> &Arc<dyn AuditRunner> {
        &self.runner
    }
}

/// Maps audit ids to `(descriptor, runner)` pairs.
///
/// Hosts enumerate descriptors to drive artifact gathering and report
/// layout, then run audits by id against a shared evaluation context.
#[derive(Default)]
pub struct AuditRegistry {
    audits: HashMap<String, RegisteredAudit>,
}

impl AuditRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in audits, wired to the given
    /// First Meaningful Paint metric provider.
    pub fn with_defaults(fmp_metric: Arc<dyn ComputedMetric>) -> Self {
        let mut registry = Self::new();
        registry.register(
            FirstMeaningfulPaintAudit::descriptor(),
            Arc::new(FirstMeaningfulPaintAudit::new(fmp_metric)),
        );
        registry
    }

    /// Register an audit under its descriptor's id, replacing any previous
    /// registration.
    pub fn register(&mut self, descriptor: AuditDescriptor, runner: Arc<dyn AuditRunner>) {
        let id = descriptor.id.clone();
        if self
            .audits
            .insert(id.clone(), RegisteredAudit { descriptor, runner })
            .is_some()
        {
            warn!(audit = %id, "replaced an existing audit registration");
        }
    }

    /// Look up a registered audit.
    pub fn get(&self, id: &str) -> Option<&RegisteredAudit> {
        self.audits.get(id)
    }

    /// Ids of all registered audits.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.audits.keys().map(String::as_str)
    }

    /// Run a registered audit by id.
    pub async fn run(
        &self,
        id: &str,
        artifacts: &Artifacts,
        context: &EvaluationContext,
        bundle: &MessageBundle,
    ) -> Result<AuditResult, AuditError> {
        let audit = self
            .get(id)
            .ok_or_else(|| AuditError::UnknownAudit(id.to_string()))?;
        audit.runner.run(artifacts, context, bundle).await
    }
}

impl std::fmt::Debug for AuditRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditRegistry")
            .field("audits", &self.audits.keys().collect::<Vec<_>>())
            .finish()
    }
}

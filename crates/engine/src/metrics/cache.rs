//! Single-flight memoization of metric computations.

use super::{ComputedMetric, MetricInput, MetricValue};
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};
use webperf_audit_domain::AuditError;

type SharedComputation = Shared<BoxFuture<'static, Result<MetricValue, AuditError>>>;

/// Per-context cache mapping metric keys to in-flight or completed
/// computations.
///
/// The first requester of a key inserts a shared future under the lock;
/// every concurrent or later requester awaits a clone of that same future.
/// The provider therefore runs at most once per (key, context), and its
/// outcome - value or failure - is fanned out unchanged to all waiters.
/// Failed computations stay cached: a metric that could not be extracted
/// once will not be extracted on retry within the same context.
///
/// If the host drops the context (or every waiter) mid-computation, the
/// shared future is dropped with it and the suspended request resolves as
/// cancelled for the host, never as a stale or default score.
#[derive(Default)]
pub struct ComputedMetricCache {
    computations: Mutex<HashMap<&'static str, SharedComputation>>,
}

impl ComputedMetricCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a metric value, computing it only if no prior request for
    /// the same key exists in this cache.
    #[instrument(skip_all, fields(metric = metric.key()))]
    pub async fn request(
        &self,
        metric: Arc<dyn ComputedMetric>,
        input: MetricInput,
    ) -> Result<MetricValue, AuditError> {
        let computation = {
            let mut computations = self.computations.lock();
            match computations.get(metric.key()) {
                Some(existing) => {
                    debug!("joining existing metric computation");
                    existing.clone()
                }
                None => {
                    debug!("starting metric computation");
                    let key = metric.key();
                    let fresh: SharedComputation = async move { metric.compute(&input).await }
                        .boxed()
                        .shared();
                    computations.insert(key, fresh.clone());
                    fresh
                }
            }
        };

        // Awaited outside the lock so concurrent requesters for other keys
        // are never serialized behind a slow trace analysis.
        computation.await
    }

    /// Number of distinct metric keys requested so far.
    pub fn len(&self) -> usize {
        self.computations.lock().len()
    }

    /// Whether any metric has been requested.
    pub fn is_empty(&self) -> bool {
        self.computations.lock().is_empty()
    }
}

impl std::fmt::Debug for ComputedMetricCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputedMetricCache")
            .field("entries", &self.len())
            .finish()
    }
}

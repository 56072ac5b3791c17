//! Computed-metric provider boundary and the per-context memoization cache.
//!
//! Extracting a timing from a trace is expensive and is performed by an
//! upstream provider behind the [`ComputedMetric`] trait. The engine's side
//! of the contract is the at-most-once guarantee: within one evaluation
//! context, every request for the same metric key awaits a single shared
//! computation instead of re-running the provider.

mod cache;
mod provider;

pub use cache::ComputedMetricCache;
pub use provider::{ComputedMetric, MetricInput, MetricValue};

//! Webperf Audit Domain Types
//!
//! This crate provides the core domain model for the webperf audit engine.
//! It defines the value objects exchanged between the metric layer, the
//! scoring engine, and the host reporting framework, along with the error
//! taxonomy shared by all of them.
//!
//! ## Architecture
//!
//! The domain layer is organized into the following modules:
//!
//! - **timing**: Millisecond timing values extracted from browser traces
//! - **scoring**: Score calibration parameters and their per-device resolution
//! - **artifacts**: Opaque trace/network-log payloads collected by the host
//! - **audit**: Audit descriptors and the result record handed to reporters
//! - **errors**: Error types surfaced to the invoking framework

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifacts;
pub mod audit;
pub mod errors;
pub mod scoring;
pub mod timing;

// Re-export commonly used types
pub use artifacts::{Artifacts, AuditSettings, DevtoolsLog, Trace};
pub use audit::{AuditDescriptor, AuditResult, NumericUnit, ScoreDisplayMode};
pub use errors::AuditError;
pub use scoring::{MetricScoringOptions, ScoreParameters};
pub use timing::TimingValue;

// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod api;
pub mod client;
pub mod config;
pub mod evaluation;
pub mod metrics;
pub mod phone;
pub mod samples;
pub mod scoring;
pub mod telemetry;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::client::{EvaluationClient, RemoteError, RemoteScorer};
pub use crate::config::ClientConfig;
pub use crate::evaluation::{Evaluation, Metrics, PerformanceCategory};
pub use crate::phone::{Battery, ExpandableStorage, SmartphoneSpecification, ValidationError};
pub use crate::scoring::{score, score_with_weights, SubScores, Weights};

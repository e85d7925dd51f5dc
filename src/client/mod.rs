//! Evaluation client: remote scoring API first, local scoring engine on any failure.
//!
//! `evaluate` and `fetch_samples` never return an error. Transport, status and parse
//! failures are logged and replaced by `scoring::score` / `samples::builtin`. The
//! returned `Evaluation` carries no marker of which path produced it.

pub mod error;
pub mod http;

use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use error::RemoteError;
pub use http::HttpScorer;

use crate::config::ClientConfig;
use crate::evaluation::Evaluation;
use crate::metrics::{record_evaluation, record_samples, Source};
use crate::phone::SmartphoneSpecification;
use crate::samples;
use crate::scoring::{self, Weights};

/// A remote scoring service. Separated so tests can plug in canned responses.
#[async_trait]
pub trait RemoteScorer: Send + Sync {
    async fn evaluate(&self, spec: &SmartphoneSpecification) -> Result<Evaluation, RemoteError>;
    async fn samples(&self) -> Result<Vec<SmartphoneSpecification>, RemoteError>;
    /// Name for diagnostics.
    fn name(&self) -> &'static str;
}

pub type DynRemoteScorer = Arc<dyn RemoteScorer>;

#[derive(Clone)]
pub struct EvaluationClient {
    /// `None`: remote disabled, every call is scored locally.
    remote: Option<DynRemoteScorer>,
    weights: Weights,
}

impl EvaluationClient {
    pub fn new(remote: DynRemoteScorer) -> Self {
        Self {
            remote: Some(remote),
            weights: Weights::default(),
        }
    }

    /// Local-only client.
    pub fn offline() -> Self {
        Self {
            remote: None,
            weights: Weights::default(),
        }
    }

    /// Weights used by the local fallback.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Client for `cfg`; the local fallback uses `Weights::default()`.
    pub fn from_config(cfg: &ClientConfig) -> Result<Self, RemoteError> {
        if !cfg.remote_enabled {
            info!("remote scoring disabled; using local engine only");
            return Ok(Self::offline());
        }
        let http = HttpScorer::new(cfg)?;
        info!(base_url = %http.base_url(), "remote scoring enabled");
        Ok(Self::new(Arc::new(http)))
    }

    /// Client and fallback weights from the environment, the same sources the server reads,
    /// so a local fallback scores exactly like the configured scoring API.
    pub fn from_env() -> anyhow::Result<Self> {
        let cfg = ClientConfig::from_env()?;
        let weights = scoring::load_weights_default()?;
        Ok(Self::from_config(&cfg)?.with_weights(weights))
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn is_offline(&self) -> bool {
        self.remote.is_none()
    }

    /// Remote evaluation, or the local engine if the remote is unusable.
    pub async fn evaluate(&self, spec: &SmartphoneSpecification) -> Evaluation {
        let Some(remote) = &self.remote else {
            record_evaluation(Source::Local);
            return scoring::score_with_weights(spec, &self.weights);
        };

        match remote.evaluate(spec).await.and_then(checked) {
            Ok(evaluation) => {
                debug!(provider = remote.name(), id = %evaluation.id, "remote evaluation");
                record_evaluation(Source::Remote);
                evaluation
            }
            Err(err) => {
                warn!(
                    provider = remote.name(),
                    kind = err.kind(),
                    error = %err,
                    "remote evaluation failed, scoring locally"
                );
                record_evaluation(Source::Local);
                scoring::score_with_weights(spec, &self.weights)
            }
        }
    }

    /// All evaluations are issued at once and awaited together; output follows input order.
    pub async fn evaluate_all(&self, specs: &[SmartphoneSpecification]) -> Vec<Evaluation> {
        join_all(specs.iter().map(|spec| self.evaluate(spec))).await
    }

    /// Remote sample list, or the three built-in samples.
    pub async fn fetch_samples(&self) -> Vec<SmartphoneSpecification> {
        let Some(remote) = &self.remote else {
            record_samples(Source::Local);
            return samples::builtin();
        };

        match remote.samples().await {
            Ok(list) => {
                debug!(provider = remote.name(), count = list.len(), "remote samples");
                record_samples(Source::Remote);
                list
            }
            Err(err) => {
                warn!(
                    provider = remote.name(),
                    kind = err.kind(),
                    error = %err,
                    "fetching samples failed, using built-in list"
                );
                record_samples(Source::Local);
                samples::builtin()
            }
        }
    }
}

fn checked(evaluation: Evaluation) -> Result<Evaluation, RemoteError> {
    if evaluation.is_in_range() {
        Ok(evaluation)
    } else {
        Err(RemoteError::Parse(format!(
            "scores out of range (overall_score={})",
            evaluation.overall_score
        )))
    }
}

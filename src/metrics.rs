use anyhow::{Context, Result};
use axum::{routing::get, Router};
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Remote,
    Local,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Remote => "remote",
            Source::Local => "local",
        }
    }
}

/// No-op until a recorder is installed (tests, library users without Prometheus).
pub fn record_evaluation(source: Source) {
    counter!("phone_score_evaluations_total", "source" => source.as_str()).increment(1);
}

pub fn record_samples(source: Source) {
    counter!("phone_score_samples_total", "source" => source.as_str()).increment(1);
}

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Call once per process.
    pub fn init() -> Result<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("prometheus: install recorder")?;
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

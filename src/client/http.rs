//! reqwest-backed scorer for the phone scoring API.
//!
//! - `POST {base}/smartphones/evaluate`  spec JSON in, evaluation JSON out
//! - `GET  {base}/smartphones/samples`   array of specs

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{RemoteError, RemoteScorer};
use crate::config::ClientConfig;
use crate::evaluation::Evaluation;
use crate::phone::SmartphoneSpecification;

pub const EVALUATE_PATH: &str = "/smartphones/evaluate";
pub const SAMPLES_PATH: &str = "/smartphones/samples";

#[derive(Clone)]
pub struct HttpScorer {
    http: reqwest::Client,
    base_url: String,
}

impl HttpScorer {
    /// Single attempt per call; the timeout is only set when configured.
    pub fn new(cfg: &ClientConfig) -> Result<Self, RemoteError> {
        let mut builder = reqwest::Client::builder().user_agent(cfg.user_agent.clone());
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, RemoteError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(RemoteError::Response {
            status: status.as_u16(),
        });
    }
    let body = resp.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl RemoteScorer for HttpScorer {
    async fn evaluate(&self, spec: &SmartphoneSpecification) -> Result<Evaluation, RemoteError> {
        let resp = self.http.post(self.url(EVALUATE_PATH)).json(spec).send().await?;
        read_json(resp).await
    }

    async fn samples(&self) -> Result<Vec<SmartphoneSpecification>, RemoteError> {
        let resp = self.http.get(self.url(SAMPLES_PATH)).send().await?;
        read_json(resp).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

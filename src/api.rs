//! HTTP surface of the scoring API, backed by the local engine.
//!
//! Serves the same contract `client::HttpScorer` consumes, so one instance can be the
//! remote for another (and for the dashboard).

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::evaluation::Evaluation;
use crate::phone::{SmartphoneSpecification, ValidationError};
use crate::samples;
use crate::scoring::{self, Weights};

#[derive(Clone, Default)]
pub struct AppState {
    weights: Arc<Weights>,
}

impl AppState {
    pub fn new(weights: Weights) -> Self {
        Self {
            weights: Arc::new(weights),
        }
    }

    /// Weights from $PHONE_SCORE_WEIGHTS_PATH / `config/weights.json`, defaults if absent.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(scoring::load_weights_default()?))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/smartphones/evaluate", post(evaluate))
        .route("/smartphones/evaluate/batch", post(evaluate_batch))
        .route("/smartphones/samples", get(sample_list))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug)]
pub enum ApiError {
    Invalid {
        index: Option<usize>,
        error: ValidationError,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid { index, error } => {
                let body = Json(json!({
                    "error": error.to_string(),
                    "field": error.field,
                    "index": index,
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
        }
    }
}

async fn evaluate(
    State(state): State<AppState>,
    Json(spec): Json<SmartphoneSpecification>,
) -> Result<Json<Evaluation>, ApiError> {
    spec.validate()
        .map_err(|error| ApiError::Invalid { index: None, error })?;
    let evaluation = scoring::score_with_weights(&spec, &state.weights);
    debug!(id = %evaluation.id, overall = evaluation.overall_score, "evaluated");
    Ok(Json(evaluation))
}

async fn evaluate_batch(
    State(state): State<AppState>,
    Json(specs): Json<Vec<SmartphoneSpecification>>,
) -> Result<Json<Vec<Evaluation>>, ApiError> {
    for (i, spec) in specs.iter().enumerate() {
        spec.validate().map_err(|error| ApiError::Invalid {
            index: Some(i),
            error,
        })?;
    }
    let out = specs
        .iter()
        .map(|spec| scoring::score_with_weights(spec, &state.weights))
        .collect();
    Ok(Json(out))
}

async fn sample_list() -> Json<Vec<SmartphoneSpecification>> {
    Json(samples::builtin())
}

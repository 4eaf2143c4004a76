//! Gateway error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use krishi_core::CoreError;
use serde_json::json;
use thiserror::Error;

/// Gateway-level errors
///
/// Everything that ends a request with a non-2xx response. Degraded adapter
/// outcomes that still produce a usable partial result (a failed weather
/// call, a missing rainfall row) are not errors here — they ride on 200
/// responses as a `status` field.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("model artifacts not loaded")]
    ModelNotLoaded,

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("invalid season: {0}")]
    InvalidSeason(String),

    #[error("incomplete features: {0}")]
    IncompleteFeatures(String),

    #[error("no district resolved for the given coordinates")]
    DistrictNotResolved,

    #[error("reference store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CoreError> for GatewayError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidSeason(s) => GatewayError::InvalidSeason(s),
            CoreError::IncompleteFeatures { field } => {
                GatewayError::IncompleteFeatures(field.to_string())
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            GatewayError::ModelNotLoaded => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MODEL_NOT_LOADED",
                "Model artifacts not loaded correctly.".to_string(),
            ),
            GatewayError::InvalidQuery(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_QUERY", msg.clone())
            }
            GatewayError::InvalidSeason(season) => (
                StatusCode::BAD_REQUEST,
                "INVALID_SEASON",
                format!("invalid season '{}': expected kharif, rabi or zaid", season),
            ),
            GatewayError::IncompleteFeatures(field) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INCOMPLETE_FEATURES",
                format!("missing required feature '{}'", field),
            ),
            GatewayError::DistrictNotResolved => (
                StatusCode::NOT_FOUND,
                "DISTRICT_NOT_RESOLVED",
                "District not found for given coordinates".to_string(),
            ),
            GatewayError::StoreUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "STORE_UNAVAILABLE",
                msg.clone(),
            ),
            GatewayError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

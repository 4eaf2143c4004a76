//! Crop recommendation endpoint
//!
//! POST /predict_top_crops/?top_n={k} - rank candidate crops by predicted
//! suitability for the given soil chemistry, weather and crop season.

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use krishi_core::{FeatureVector, Season, rank_top_k};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::error::GatewayError;
use crate::state::AppState;

/// Request body for POST /predict_top_crops/
#[derive(Debug, Deserialize)]
pub struct InputFeatures {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub rainfall: f64,
    pub temperature: f64,
    /// Crop season, e.g. 'kharif', 'rabi'.
    #[serde(rename = "Crop_Type")]
    pub crop_type: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    #[serde(default = "default_top_n")]
    pub top_n: i64,
}

fn default_top_n() -> i64 {
    5
}

/// POST /predict_top_crops/
///
/// Scores the input features with the loaded pipeline and returns the top
/// `top_n` crops as a label → confidence mapping, ordered by descending
/// confidence (ties by label index). Fails with `MODEL_NOT_LOADED` when the
/// artifacts were not available at startup.
pub async fn predict_top_crops(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecommendQuery>,
    Json(body): Json<InputFeatures>,
) -> Result<impl IntoResponse, GatewayError> {
    let model = state.model.as_ref().ok_or(GatewayError::ModelNotLoaded)?;

    let season: Season = body
        .crop_type
        .parse()
        .map_err(GatewayError::from)?;

    // All numeric fields are required by the body schema; assembly is the
    // single construction path for the classifier input shape.
    let features = FeatureVector::assemble(
        Some(body.n),
        Some(body.p),
        Some(body.k),
        Some(body.ph),
        Some(body.rainfall),
        Some(body.temperature),
        season,
    )?;

    let probs = model.score(&features);
    let ranked = rank_top_k(&probs, model.labels(), query.top_n);

    tracing::info!(
        top_n = query.top_n,
        returned = ranked.len(),
        season = %season,
        "crop recommendation served"
    );

    // serde_json is built with preserve_order, so the object keeps the
    // ranking order.
    let mut recommendations = serde_json::Map::new();
    for entry in ranked {
        recommendations.insert(entry.label, Value::String(entry.confidence));
    }

    Ok(Json(json!({ "top_recommendations": recommendations })))
}

/// Build the recommendation router sub-tree
pub fn recommend_router() -> axum::Router<Arc<AppState>> {
    use axum::routing::post;
    axum::Router::new().route("/predict_top_crops/", post(predict_top_crops))
}

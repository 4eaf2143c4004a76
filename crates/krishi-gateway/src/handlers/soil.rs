//! Soil reference lookup endpoint
//!
//! GET /get_soil_data_by_district/?district=&state= - join the normalized
//! identifier against the static soil table.

use axum::{
    Json,
    extract::{Query, State},
};
use krishi_core::geo::{normalize, title_case};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::GatewayError;
use crate::state::AppState;
use crate::store::StoreError;

#[derive(Debug, Deserialize)]
pub struct SoilQuery {
    pub district: String,
    pub state: String,
}

/// Nullable soil averages as exposed on the wire.
#[derive(Debug, Serialize)]
pub struct SoilDataDto {
    #[serde(rename = "N")]
    pub n: Option<f64>,
    #[serde(rename = "P")]
    pub p: Option<f64>,
    #[serde(rename = "K")]
    pub k: Option<f64>,
    #[serde(rename = "pH")]
    pub ph: Option<f64>,
}

#[derive(Debug, Serialize)]
pub enum SoilStatus {
    #[serde(rename = "OK")]
    Ok,
    DistrictOrStateNotFoundInDB,
}

#[derive(Debug, Serialize)]
pub struct SoilResponse {
    pub district: String,
    pub state: String,
    pub soil_data: SoilDataDto,
    pub status: SoilStatus,
}

/// GET /get_soil_data_by_district/
///
/// A missing row is a normal outcome: 200 with status
/// `DistrictOrStateNotFoundInDB` and null soil fields. Only an unreachable
/// store is an HTTP failure (503). The echoed district/state keep the
/// caller's wording, trimmed and title-cased.
pub async fn get_soil_data_by_district(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SoilQuery>,
) -> Result<Json<SoilResponse>, GatewayError> {
    let store = state
        .soil
        .as_ref()
        .ok_or_else(|| GatewayError::StoreUnavailable("soil store not connected".to_string()))?;

    let geo = normalize(&query.district, &query.state);
    let record = store.lookup(&geo).await.map_err(|e| match e {
        StoreError::Unavailable(msg) => GatewayError::StoreUnavailable(msg),
        StoreError::Query(msg) => GatewayError::Internal(msg),
    })?;

    let (soil_data, status) = match record {
        Some(r) => (
            SoilDataDto {
                n: r.n_avg,
                p: r.p_avg,
                k: r.k_avg,
                ph: r.ph_avg,
            },
            SoilStatus::Ok,
        ),
        None => {
            tracing::info!(
                district = %geo.district,
                state = %geo.state,
                "soil data not found"
            );
            (
                SoilDataDto {
                    n: None,
                    p: None,
                    k: None,
                    ph: None,
                },
                SoilStatus::DistrictOrStateNotFoundInDB,
            )
        }
    };

    Ok(Json(SoilResponse {
        district: title_case(&query.district),
        state: title_case(&query.state),
        soil_data,
        status,
    }))
}

/// Build the soil router sub-tree
pub fn soil_router() -> axum::Router<Arc<AppState>> {
    use axum::routing::get;
    axum::Router::new().route("/get_soil_data_by_district/", get(get_soil_data_by_district))
}

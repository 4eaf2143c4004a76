//! Combined weather endpoint
//!
//! GET /get_combined_weather/?lat=&lon=&season= - resolve the district by
//! reverse geocoding, then join live weather with the seasonal rainfall
//! reference table.

use axum::{
    Json,
    extract::{Query, State},
};
use krishi_core::{Season, normalize};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::error::GatewayError;
use crate::signal::{GeoLookup, LiveWeather, SignalError};
use crate::state::AppState;
use crate::store::StoreError;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: f64,
    pub lon: f64,
    pub season: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeatherStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "APIKeyMissing")]
    ApiKeyMissing,
    #[serde(rename = "APIError")]
    ApiError,
    RainfallDataNotFound,
}

#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub state: Option<String>,
    pub district: Option<String>,
    pub temperature_celsius: Option<f64>,
    pub humidity_percent: Option<f64>,
    pub avg_seasonal_rainfall_mm: Option<f64>,
    pub status: WeatherStatus,
}

/// GET /get_combined_weather/
///
/// The season is validated before any lookup: an unknown value is a 400,
/// distinct from a valid season with no matching rainfall row. Adapter
/// failures degrade the `status` field on a 200 response with whatever
/// partial data succeeded; only "no district resolves for the coordinates"
/// ends the request (404), since every sub-result is keyed on it.
pub async fn get_combined_weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherResponse>, GatewayError> {
    let season: Season = query.season.parse().map_err(GatewayError::from)?;

    let lookup = match state.geocoder.reverse(query.lat, query.lon).await {
        Ok(lookup) => lookup,
        Err(e) => {
            warn!(lat = query.lat, lon = query.lon, error = %e, "reverse geocoding failed");
            GeoLookup {
                district: None,
                state: None,
            }
        }
    };
    let Some(raw_district) = lookup.district else {
        return Err(GatewayError::DistrictNotResolved);
    };
    let geo = normalize(&raw_district, lookup.state.as_deref().unwrap_or(""));

    let (live, weather_status) = match state.weather.current(query.lat, query.lon).await {
        Ok(live) => (live, None),
        Err(SignalError::ApiKeyMissing) => (empty_weather(), Some(WeatherStatus::ApiKeyMissing)),
        Err(e @ SignalError::Request(_)) => {
            warn!(error = %e, "live weather call failed");
            (empty_weather(), Some(WeatherStatus::ApiError))
        }
    };

    let rainfall = lookup_rainfall(&state, &geo.district, season).await?;

    // Status precedence: adapter failure wins over a missing rainfall row,
    // which wins over OK.
    let status = weather_status.unwrap_or(if rainfall.is_none() {
        WeatherStatus::RainfallDataNotFound
    } else {
        WeatherStatus::Ok
    });

    Ok(Json(WeatherResponse {
        state: lookup.state,
        district: Some(geo.district),
        temperature_celsius: live.temperature_c,
        humidity_percent: live.humidity_percent,
        avg_seasonal_rainfall_mm: rainfall,
        status,
    }))
}

fn empty_weather() -> LiveWeather {
    LiveWeather {
        temperature_c: None,
        humidity_percent: None,
    }
}

async fn lookup_rainfall(
    state: &AppState,
    district: &str,
    season: Season,
) -> Result<Option<f64>, GatewayError> {
    let store = state.rainfall.as_ref().ok_or_else(|| {
        GatewayError::StoreUnavailable("rainfall store not connected".to_string())
    })?;
    store
        .seasonal_rainfall(district, season)
        .await
        .map_err(|e| match e {
            StoreError::Unavailable(msg) => GatewayError::StoreUnavailable(msg),
            StoreError::Query(msg) => GatewayError::Internal(msg),
        })
}

/// Build the weather router sub-tree
pub fn weather_router() -> axum::Router<Arc<AppState>> {
    use axum::routing::get;
    axum::Router::new().route("/get_combined_weather/", get(get_combined_weather))
}

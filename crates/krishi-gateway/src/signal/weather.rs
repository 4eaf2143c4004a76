//! Live-weather adapter (OpenWeatherMap current weather).
//!
//! A missing API key is detected before any request goes out and is a
//! distinct failure kind from a transport/HTTP error, so the handler can
//! report `APIKeyMissing` vs `APIError` in the response status.

use super::{SIGNAL_TIMEOUT, SignalError, SignalResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Current conditions at a coordinate pair, in metric units.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveWeather {
    pub temperature_c: Option<f64>,
    pub humidity_percent: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: Option<OwmMain>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: Option<f64>,
    humidity: Option<f64>,
}

/// Live-weather client against an OpenWeatherMap-compatible endpoint.
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    /// Create a new client. When `api_key` is `None` every call fails fast
    /// with [`SignalError::ApiKeyMissing`] without touching the network.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(SIGNAL_TIMEOUT)
            .build()
            .expect("failed to build reqwest client");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Fetch current temperature (°C) and relative humidity (%).
    pub async fn current(&self, lat: f64, lon: f64) -> SignalResult<LiveWeather> {
        let key = self.api_key.as_ref().ok_or(SignalError::ApiKeyMissing)?;

        let url = format!("{}/data/2.5/weather", self.base_url);
        debug!(lat, lon, "fetching live weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| SignalError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| SignalError::Request(e.to_string()))?;

        let body: OwmResponse = response
            .json()
            .await
            .map_err(|e| SignalError::Request(e.to_string()))?;

        let main = body.main;
        Ok(LiveWeather {
            temperature_c: main.as_ref().and_then(|m| m.temp),
            humidity_percent: main.as_ref().and_then(|m| m.humidity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        // Unroutable base URL: if the adapter tried the network this would
        // time out rather than return immediately.
        let client = OpenWeatherClient::new("http://192.0.2.1", None);
        let err = client.current(18.52, 73.85).await.err().unwrap();
        assert!(matches!(err, SignalError::ApiKeyMissing));
    }

    #[test]
    fn parses_metric_payload() {
        let body: OwmResponse = serde_json::from_str(
            r#"{"main": {"temp": 27.4, "humidity": 61.0, "pressure": 1008}}"#,
        )
        .unwrap();
        let main = body.main.unwrap();
        assert_eq!(main.temp, Some(27.4));
        assert_eq!(main.humidity, Some(61.0));
    }

    #[test]
    fn tolerates_missing_main_block() {
        let body: OwmResponse = serde_json::from_str(r#"{"cod": 200}"#).unwrap();
        assert!(body.main.is_none());
    }
}

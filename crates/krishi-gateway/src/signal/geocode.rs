//! Reverse-geocoding adapter (OpenStreetMap Nominatim).
//!
//! Resolves a coordinate pair to raw district/state names. The response is
//! mapped into a typed structure with explicit optional fields right here
//! at the boundary — nothing dict-shaped crosses into the core. The raw
//! names still need [`krishi_core::normalize`] before any store lookup.

use super::{SIGNAL_TIMEOUT, SignalError, SignalResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const USER_AGENT: &str = "krishi-gateway/0.1";

/// Raw (unnormalized) place names resolved for a coordinate pair. Either
/// field can be absent when the geocoder has no answer at that zoom level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoLookup {
    pub district: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    state_district: Option<String>,
    county: Option<String>,
    region: Option<String>,
    state: Option<String>,
}

impl NominatimAddress {
    /// District precedence: `state_district`, then `county`, then `region`.
    fn district(self) -> (Option<String>, Option<String>) {
        let district = self.state_district.or(self.county).or(self.region);
        (district, self.state)
    }
}

/// Reverse-geocoding client against a Nominatim-compatible endpoint.
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a new client. `base_url` e.g. `https://nominatim.openstreetmap.org`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(SIGNAL_TIMEOUT)
            .build()
            .expect("failed to build reqwest client");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve district and state for a coordinate pair.
    ///
    /// `zoom=10` asks Nominatim for district-level granularity.
    pub async fn reverse(&self, lat: f64, lon: f64) -> SignalResult<GeoLookup> {
        let url = format!("{}/reverse", self.base_url);
        debug!(lat, lon, "reverse geocoding");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("format", "json".to_string()),
                ("zoom", "10".to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .header("user-agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| SignalError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| SignalError::Request(e.to_string()))?;

        let body: NominatimResponse = response
            .json()
            .await
            .map_err(|e| SignalError::Request(e.to_string()))?;

        let (district, state) = body.address.district();
        Ok(GeoLookup { district, state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_district_takes_precedence() {
        let body: NominatimResponse = serde_json::from_str(
            r#"{"address": {"state_district": "Pune District", "county": "Haveli",
                "region": "Western Maharashtra", "state": "Maharashtra"}}"#,
        )
        .unwrap();
        let (district, state) = body.address.district();
        assert_eq!(district.as_deref(), Some("Pune District"));
        assert_eq!(state.as_deref(), Some("Maharashtra"));
    }

    #[test]
    fn falls_back_to_county_then_region() {
        let body: NominatimResponse = serde_json::from_str(
            r#"{"address": {"county": "Haveli", "region": "Western Maharashtra"}}"#,
        )
        .unwrap();
        assert_eq!(body.address.district().0.as_deref(), Some("Haveli"));

        let body: NominatimResponse =
            serde_json::from_str(r#"{"address": {"region": "Western Maharashtra"}}"#).unwrap();
        assert_eq!(
            body.address.district().0.as_deref(),
            Some("Western Maharashtra")
        );
    }

    #[test]
    fn missing_address_yields_nothing() {
        let body: NominatimResponse = serde_json::from_str(r#"{}"#).unwrap();
        let (district, state) = body.address.district();
        assert_eq!(district, None);
        assert_eq!(state, None);
    }
}

//! External signal adapters.
//!
//! Opaque network calls with typed failure modes: reverse geocoding
//! ([`geocode::NominatimClient`]) and live weather
//! ([`weather::OpenWeatherClient`]). Both are blocking on the wire but
//! bounded by a fixed timeout; a timeout or non-2xx response surfaces as
//! [`SignalError::Request`], never as an uncaught failure. No retries.

pub mod geocode;
pub mod weather;

pub use geocode::{GeoLookup, NominatimClient};
pub use weather::{LiveWeather, OpenWeatherClient};

use std::time::Duration;
use thiserror::Error;

/// Upper bound on any single external call.
pub(crate) const SIGNAL_TIMEOUT: Duration = Duration::from_secs(10);

/// Adapter failures for external signal calls.
#[derive(Debug, Error)]
pub enum SignalError {
    /// No API key configured — detected before any request is issued.
    #[error("API key missing")]
    ApiKeyMissing,

    /// Transport error, timeout, or non-2xx response.
    #[error("request failed: {0}")]
    Request(String),
}

pub type SignalResult<T> = Result<T, SignalError>;

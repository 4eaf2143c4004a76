//! Shared application state for the gateway.

use crate::inference::LoadedModel;
use crate::signal::{NominatimClient, OpenWeatherClient};
use crate::store::{RainfallStore, SoilStore};
use std::sync::Arc;

/// State shared across all request handlers.
///
/// Everything here is initialised once before the first request is served
/// and read-only thereafter — safe for concurrent reads without locking.
/// `None` means the handle failed to initialise at startup: the affected
/// endpoints answer with a structured error while the rest of the service
/// stays up.
#[derive(Clone)]
pub struct AppState {
    /// Loaded scoring pipeline, or `None` when artifacts failed to load.
    pub model: Option<Arc<LoadedModel>>,
    /// Soil reference store, or `None` when the database is unreachable.
    pub soil: Option<Arc<SoilStore>>,
    /// Rainfall reference store, or `None` when the database is unreachable.
    pub rainfall: Option<Arc<RainfallStore>>,
    /// Reverse-geocoding client.
    pub geocoder: Arc<NominatimClient>,
    /// Live-weather client.
    pub weather: Arc<OpenWeatherClient>,
}

impl AppState {
    pub fn new(
        model: Option<Arc<LoadedModel>>,
        soil: Option<Arc<SoilStore>>,
        rainfall: Option<Arc<RainfallStore>>,
        geocoder: Arc<NominatimClient>,
        weather: Arc<OpenWeatherClient>,
    ) -> Self {
        Self {
            model,
            soil,
            rainfall,
            geocoder,
            weather,
        }
    }
}

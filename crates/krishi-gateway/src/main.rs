//! Krishi decision-support gateway — entry point.
//!
//! Reads configuration from environment variables, initialises the
//! load-once handles (model artifacts, reference stores, signal clients)
//! and starts the axum HTTP service. A handle that fails to initialise
//! degrades only its own endpoints; the process stays up.
//!
//! # Environment variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `KRISHI_PORT` | `8000` | TCP port to listen on. |
//! | `MODEL_DIR` | `models` | Directory holding `crop_pipeline.json` and `label_encoder.json`. |
//! | `SOIL_DB_URL` | `sqlite://data/district_soil_db.sqlite?mode=ro` | Soil reference database. |
//! | `RAINFALL_DB_URL` | `sqlite://data/district_rainfall_db.sqlite?mode=ro` | Rainfall reference database. |
//! | `OPENWEATHERMAP_API_KEY` | *(none)* | Live-weather API key; absent key degrades the weather status. |
//! | `NOMINATIM_BASE_URL` | `https://nominatim.openstreetmap.org` | Reverse-geocoding endpoint. |
//! | `OPENWEATHER_BASE_URL` | `https://api.openweathermap.org` | Live-weather endpoint. |

use krishi_gateway::inference::LoadedModel;
use krishi_gateway::server::{Server, ServerConfig};
use krishi_gateway::signal::{NominatimClient, OpenWeatherClient};
use krishi_gateway::state::AppState;
use krishi_gateway::store::{RainfallStore, SoilStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("krishi_gateway=info".parse().unwrap()),
        )
        .init();

    let port: u16 = std::env::var("KRISHI_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);

    let model_dir = PathBuf::from(std::env::var("MODEL_DIR").unwrap_or_else(|_| "models".into()));
    let soil_db_url = std::env::var("SOIL_DB_URL")
        .unwrap_or_else(|_| "sqlite://data/district_soil_db.sqlite?mode=ro".to_string());
    let rainfall_db_url = std::env::var("RAINFALL_DB_URL")
        .unwrap_or_else(|_| "sqlite://data/district_rainfall_db.sqlite?mode=ro".to_string());

    let api_key = std::env::var("OPENWEATHERMAP_API_KEY").ok();
    let nominatim_base_url = std::env::var("NOMINATIM_BASE_URL")
        .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string());
    let openweather_base_url = std::env::var("OPENWEATHER_BASE_URL")
        .unwrap_or_else(|_| "https://api.openweathermap.org".to_string());

    if api_key.is_none() {
        warn!("OPENWEATHERMAP_API_KEY is not set — live weather is degraded to APIKeyMissing");
    }

    // Load-once handles. Failures degrade the affected endpoints only.
    let model = match LoadedModel::load(&model_dir) {
        Ok(model) => Some(Arc::new(model)),
        Err(e) => {
            error!(dir = %model_dir.display(), error = %e,
                "model artifacts failed to load — recommendations disabled until redeploy");
            None
        }
    };

    let soil = match SoilStore::connect(&soil_db_url).await {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            error!(url = %soil_db_url, error = %e, "soil store unavailable");
            None
        }
    };

    let rainfall = match RainfallStore::connect(&rainfall_db_url).await {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            error!(url = %rainfall_db_url, error = %e, "rainfall store unavailable");
            None
        }
    };

    let state = AppState::new(
        model,
        soil,
        rainfall,
        Arc::new(NominatimClient::new(nominatim_base_url)),
        Arc::new(OpenWeatherClient::new(openweather_base_url, api_key)),
    );

    info!(port, "Krishi gateway configuration loaded");

    let server = Server::new(ServerConfig { port });
    if let Err(e) = server.start(state).await {
        eprintln!("Gateway error: {e}");
        std::process::exit(1);
    }
}

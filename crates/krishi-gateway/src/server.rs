//! Axum-based HTTP server wiring.
//!
//! [`Server`] merges the per-endpoint routers over the shared
//! [`AppState`] and binds the listener.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Service banner. |
//! | `GET`  | `/health` | Liveness check — always `200 OK`. |
//! | `POST` | `/predict_top_crops/` | Top-K crop recommendation. |
//! | `GET`  | `/get_soil_data_by_district/` | Soil reference lookup. |
//! | `GET`  | `/get_combined_weather/` | Live weather + seasonal rainfall. |

use crate::handlers::{health_router, recommend_router, soil_router, weather_router};
use crate::state::AppState;
use axum::Router;
use std::sync::Arc;
use tracing::info;

/// Runtime configuration for [`Server`].
pub struct ServerConfig {
    /// TCP port to listen on (default: 8000).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8000 }
    }
}

/// High-level server encapsulating router construction and binding.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a new server from the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Build the axum [`Router`] over the shared state.
    ///
    /// Exposed separately from [`start()`](Self::start) so tests can drive
    /// the router in-process without binding a socket.
    pub fn build_app(&self, state: AppState) -> Router {
        let state = Arc::new(state);
        Router::new()
            .merge(health_router())
            .merge(recommend_router())
            .merge(soil_router())
            .merge(weather_router())
            .with_state(state)
    }

    /// Bind the server to `0.0.0.0:{port}` and serve until the process exits.
    pub async fn start(self, state: AppState) -> std::io::Result<()> {
        let app = self.build_app(state);
        let addr = format!("0.0.0.0:{}", self.config.port);
        info!(addr = %addr, "Krishi gateway starting");
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await
    }
}

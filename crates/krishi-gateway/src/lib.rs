//! `krishi-gateway` — agronomic decision-support HTTP service.
//!
//! Composes the pure domain logic from `krishi-core` with the adapter layer
//! into an axum service:
//!
//! | Concern | Module |
//! |---------|--------|
//! | Reference stores (soil, rainfall) over SQLite | [`store`] |
//! | External signals (reverse geocoding, live weather) | [`signal`] |
//! | Crop classifier artifact loading and scoring | [`inference`] |
//! | Request handlers per endpoint | [`handlers`] |
//! | Server wiring | [`server`] |
//!
//! The [`server::Server`] wires everything together; [`state::AppState`]
//! carries the load-once, read-only handles shared by all in-flight
//! requests.

pub mod error;
pub mod handlers;
pub mod inference;
pub mod server;
pub mod signal;
pub mod state;
pub mod store;

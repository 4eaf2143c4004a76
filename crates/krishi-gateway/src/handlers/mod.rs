//! Request handlers for the decision-support API

pub mod health;
pub mod recommend;
pub mod soil;
pub mod weather;

pub use health::health_router;
pub use recommend::recommend_router;
pub use soil::soil_router;
pub use weather::weather_router;

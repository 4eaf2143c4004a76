//! Reference store adapters.
//!
//! Read-only lookups against the static SQLite reference tables, keyed by
//! canonical geographic identifiers. "No matching row" is a normal,
//! representable outcome (`Ok(None)`), kept strictly apart from the store
//! being unreachable.

pub mod rainfall;
pub mod soil;

pub use rainfall::RainfallStore;
pub use soil::SoilStore;

use serde::Serialize;
use thiserror::Error;

/// Store-side failures. `Ok(None)` is the not-found channel; these variants
/// are for the store itself misbehaving.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No connection could be established — service-unavailable condition.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store answered but the statement failed.
    #[error("store query failed: {0}")]
    Query(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Average soil chemistry for one (district, state) key. Individual
/// averages can be null in the reference table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilRecord {
    pub n_avg: Option<f64>,
    pub p_avg: Option<f64>,
    pub k_avg: Option<f64>,
    pub ph_avg: Option<f64>,
}

//! Seasonal rainfall reference store.
//!
//! Wraps the `seasonal_rainfall` SQLite table: one row per District with a
//! per-season average-rainfall column. The column is selected from a static
//! mapping on [`Season`] — the season has already been validated by the
//! caller, so an unknown value can never reach the query.

use super::{StoreError, StoreResult};
use krishi_core::Season;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

const TABLE: &str = "seasonal_rainfall";

/// Read-only adapter over the rainfall reference table.
pub struct RainfallStore {
    pool: SqlitePool,
}

/// Static column name per season. Only these three strings ever reach the
/// SQL text.
fn rainfall_column(season: Season) -> &'static str {
    match season {
        Season::Kharif => "Avg_Rainfall_Kharif_mm",
        Season::Rabi => "Avg_Rainfall_Rabi_mm",
        Season::Zaid => "Avg_Rainfall_Zaid_mm",
    }
}

impl RainfallStore {
    /// Connect to the rainfall database. A missing file or refused
    /// connection is [`StoreError::Unavailable`].
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Average seasonal rainfall in mm for a canonical district, or
    /// `Ok(None)` when the district has no row (a normal empty result).
    pub async fn seasonal_rainfall(
        &self,
        district: &str,
        season: Season,
    ) -> StoreResult<Option<f64>> {
        let column = rainfall_column(season);
        let row = sqlx::query(&format!(
            "SELECT {column} FROM {TABLE} WHERE UPPER(District) = UPPER(?)"
        ))
        .bind(district)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        match row {
            None => Ok(None),
            Some(row) => row
                .try_get::<Option<f64>, _>(0)
                .map_err(|e| StoreError::Query(e.to_string())),
        }
    }
}

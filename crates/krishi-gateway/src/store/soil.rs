//! Soil reference store.
//!
//! Wraps the `soil_data` SQLite table: one row per (District, Region) with
//! N/P/K/pH averages. District matching is case-insensitive on the
//! canonical form; the Region (state) match is case-sensitive exact.

use super::{SoilRecord, StoreError, StoreResult};
use krishi_core::GeoIdentifier;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

const TABLE: &str = "soil_data";

/// Read-only adapter over the soil reference table.
pub struct SoilStore {
    pool: SqlitePool,
}

impl SoilStore {
    /// Connect to the soil database. A missing file or refused connection
    /// is [`StoreError::Unavailable`].
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

    /// Look up soil averages for a canonical (district, state) key.
    ///
    /// Connections are pool-scoped per call and released on every exit
    /// path. `Ok(None)` means no matching row — a normal empty result.
    pub async fn lookup(&self, geo: &GeoIdentifier) -> StoreResult<Option<SoilRecord>> {
        let row = sqlx::query(&format!(
            "SELECT N_avg, P_avg, K_avg, pH_avg FROM {TABLE} \
             WHERE UPPER(District) = UPPER(?) AND Region = ?"
        ))
        .bind(&geo.district)
        .bind(&geo.state)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        match row {
            None => Ok(None),
            Some(row) => Ok(Some(SoilRecord {
                n_avg: row.try_get(0).map_err(|e| StoreError::Query(e.to_string()))?,
                p_avg: row.try_get(1).map_err(|e| StoreError::Query(e.to_string()))?,
                k_avg: row.try_get(2).map_err(|e| StoreError::Query(e.to_string()))?,
                ph_avg: row.try_get(3).map_err(|e| StoreError::Query(e.to_string()))?,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_core::normalize;

    async fn store_with_fixture() -> SoilStore {
        // In-memory SQLite: a single pooled connection so the schema stays
        // visible across queries.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(
            "CREATE TABLE soil_data (
                District TEXT NOT NULL,
                Region TEXT NOT NULL,
                N_avg REAL,
                P_avg REAL,
                K_avg REAL,
                pH_avg REAL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO soil_data (District, Region, N_avg, P_avg, K_avg, pH_avg)
             VALUES ('Ludhiana', 'Punjab', 91.5, 44.2, 40.1, 6.8),
                    ('Nashik', 'Maharashtra', 80.0, NULL, 38.5, 7.1)",
        )
        .execute(&pool)
        .await
        .unwrap();
        SoilStore::from_pool(pool)
    }

    #[tokio::test]
    async fn finds_row_case_insensitively_on_district() {
        let store = store_with_fixture().await;
        let geo = normalize("LUDHIANA district", "punjab");
        let record = store.lookup(&geo).await.unwrap().unwrap();
        assert_eq!(record.n_avg, Some(91.5));
        assert_eq!(record.ph_avg, Some(6.8));
    }

    #[tokio::test]
    async fn state_match_is_exact_on_canonical_form() {
        let store = store_with_fixture().await;
        // Canonicalization title-cases the state, so lowercase input still
        // matches the stored 'Punjab'.
        let geo = normalize("Ludhiana", "PUNJAB");
        assert!(store.lookup(&geo).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn missing_row_is_ok_none() {
        let store = store_with_fixture().await;
        let geo = normalize("Ludhiana", "Haryana");
        assert!(store.lookup(&geo).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn null_columns_surface_as_none_fields() {
        let store = store_with_fixture().await;
        let geo = normalize("Nashik", "Maharashtra");
        let record = store.lookup(&geo).await.unwrap().unwrap();
        assert_eq!(record.p_avg, None);
        assert_eq!(record.n_avg, Some(80.0));
    }

    #[tokio::test]
    async fn unreachable_database_is_unavailable() {
        let err = SoilStore::connect("sqlite:///nonexistent/dir/soil.sqlite")
            .await
            .err()
            .unwrap();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}

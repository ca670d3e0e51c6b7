//! PostgreSQL catalog provider
//!
//! Reads directory entries and their `double precision[]` embedding column
//! through an r2d2 connection pool. Queries run on the blocking thread pool.

use std::time::Duration;

use async_trait::async_trait;
use r2d2::Pool;
use r2d2_postgres::PostgresConnectionManager;
use r2d2_postgres::postgres::{NoTls, Row};
use tracing::debug;
use ybs_domain::error::{Error, Result};
use ybs_domain::ports::CatalogProvider;
use ybs_domain::value_objects::CatalogEntry;

use crate::constants::{
    CATALOG_DEFAULT_CONNECTION_TIMEOUT_SECS, CATALOG_DEFAULT_MAX_CONNECTIONS,
    CATALOG_DEFAULT_TABLE,
};

/// Connection settings for [`PostgresCatalogProvider`]
#[derive(Debug, Clone)]
pub struct PostgresCatalogConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Table holding the entries
    pub table: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// How long to wait for a pooled connection
    pub connection_timeout: Duration,
}

impl PostgresCatalogConfig {
    /// Settings for `url` with default table and pool sizing
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            table: CATALOG_DEFAULT_TABLE.to_string(),
            max_connections: CATALOG_DEFAULT_MAX_CONNECTIONS,
            connection_timeout: Duration::from_secs(CATALOG_DEFAULT_CONNECTION_TIMEOUT_SECS),
        }
    }
}

/// Whether `name` is a plain SQL identifier safe to interpolate when quoted
pub fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Catalog provider reading from PostgreSQL
#[derive(Clone)]
pub struct PostgresCatalogProvider {
    pool: Pool<PostgresConnectionManager<NoTls>>,
    query: String,
    table: String,
}

impl PostgresCatalogProvider {
    /// Create the provider
    ///
    /// The pool connects lazily, so an unreachable database surfaces as a
    /// catalog error on the first search rather than at startup.
    pub fn new(config: &PostgresCatalogConfig) -> Result<Self> {
        if !is_valid_table_name(&config.table) {
            return Err(Error::config(format!(
                "Invalid catalog table name: {}",
                config.table
            )));
        }

        let pg_config = config
            .url
            .parse()
            .map_err(|e| Error::configuration_with_source("Invalid database URL", e))?;
        let manager = PostgresConnectionManager::new(pg_config, NoTls);

        let pool = Pool::builder()
            .max_size(config.max_connections)
            .min_idle(Some(0))
            .connection_timeout(config.connection_timeout)
            .build_unchecked(manager);

        Ok(Self {
            pool,
            query: candidate_query(&config.table),
            table: config.table.clone(),
        })
    }

    /// Table the provider reads from
    pub fn table(&self) -> &str {
        &self.table
    }
}

fn candidate_query(table: &str) -> String {
    format!(
        "SELECT id, name, summary, embedding FROM \"{table}\" \
         WHERE embedding IS NOT NULL AND array_length(embedding, 1) > 0 \
         LIMIT $1"
    )
}

fn row_to_entry(row: &Row) -> Result<CatalogEntry> {
    let column_error = |e| Error::catalog_with_source("Unexpected catalog row", e);

    let id: String = row.try_get("id").map_err(column_error)?;
    let name: String = row.try_get("name").map_err(column_error)?;
    let summary: Option<String> = row.try_get("summary").map_err(column_error)?;
    let embedding: Option<Vec<f64>> = row.try_get("embedding").map_err(column_error)?;

    #[allow(clippy::cast_possible_truncation)]
    let embedding = embedding.map(|v| v.into_iter().map(|x| x as f32).collect());

    Ok(CatalogEntry {
        id,
        name,
        summary: summary.unwrap_or_default(),
        embedding,
    })
}

#[async_trait]
impl CatalogProvider for PostgresCatalogProvider {
    async fn fetch_candidates(&self, limit: usize) -> Result<Vec<CatalogEntry>> {
        let pool = self.pool.clone();
        let query = self.query.clone();
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let entries = tokio::task::spawn_blocking(move || -> Result<Vec<CatalogEntry>> {
            let mut conn = pool
                .get()
                .map_err(|e| Error::catalog_with_source("Failed to get database connection", e))?;
            let rows = conn
                .query(query.as_str(), &[&limit])
                .map_err(|e| Error::catalog_with_source("Catalog query failed", e))?;
            rows.iter().map(row_to_entry).collect()
        })
        .await
        .map_err(|e| Error::internal(format!("Catalog task failed: {e}")))??;

        debug!(table = %self.table, count = entries.len(), "Fetched catalog candidates");
        Ok(entries)
    }

    fn provider_name(&self) -> &str {
        "postgres"
    }
}

impl std::fmt::Debug for PostgresCatalogProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresCatalogProvider")
            .field("table", &self.table)
            .field("max_connections", &self.pool.max_size())
            .finish_non_exhaustive()
    }
}

//! Redis distributed cache provider
//!
//! Shared cache for deployments running several service instances. The
//! connection is opened on first use, so a Redis outage at startup does not
//! prevent the service from booting; every call simply fails until Redis
//! becomes reachable.
//!
//! ## Example
//!
//! ```ignore
//! use ybs_providers::cache::RedisCacheProvider;
//!
//! let provider = RedisCacheProvider::new("redis://localhost:6379")?;
//! // Or with host/port/password
//! let provider = RedisCacheProvider::with_host_port("localhost", 6379, Some("secret"))?;
//! ```

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tokio::sync::OnceCell;
use tracing::debug;
use ybs_domain::error::{Error, Result};
use ybs_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider};

/// Redis cache provider
pub struct RedisCacheProvider {
    client: Client,
    connection: OnceCell<ConnectionManager>,
    address: String,
}

impl RedisCacheProvider {
    /// Create a new Redis cache provider with connection string
    ///
    /// No network I/O happens here; only the URL is validated.
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string)
            .map_err(|e| Error::cache(format!("Failed to create Redis client: {e}")))?;

        Ok(Self {
            client,
            connection: OnceCell::new(),
            address: redact_password(connection_string),
        })
    }

    /// Create a new Redis cache provider from host, port and optional password
    pub fn with_host_port(host: &str, port: u16, password: Option<&str>) -> Result<Self> {
        Self::new(&connection_url(host, port, password)?)
    }

    /// Redis address with any password removed
    pub fn server_address(&self) -> &str {
        &self.address
    }

    /// Shared connection, established on first use
    ///
    /// A failed attempt leaves the cell empty so the next call retries.
    async fn connection(&self) -> Result<ConnectionManager> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                debug!(address = %self.address, "Connecting to Redis");
                self.client
                    .get_connection_manager()
                    .await
                    .map_err(|e| Error::cache(format!("Failed to connect to Redis: {e}")))
            })
            .await?;
        Ok(manager.clone())
    }
}

/// Build a `redis://` URL, percent-encoding the password
pub fn connection_url(host: &str, port: u16, password: Option<&str>) -> Result<String> {
    let mut url = reqwest::Url::parse(&format!("redis://{host}:{port}"))
        .map_err(|e| Error::config(format!("Invalid Redis address {host}:{port}: {e}")))?;

    if let Some(password) = password.filter(|p| !p.is_empty()) {
        url.set_password(Some(password))
            .map_err(|()| Error::config("Redis URL cannot carry a password"))?;
    }

    Ok(url.to_string())
}

fn redact_password(connection_string: &str) -> String {
    match reqwest::Url::parse(connection_string) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) => "redis-server".to_string(),
    }
}

/// Escape glob metacharacters so a prefix matches literally in `KEYS`
pub fn escape_glob(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| Error::cache(format!("Redis GET failed: {e}")))
    }

    async fn set(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let mut conn = self.connection().await?;
        // SETEX rejects a zero TTL
        let ttl_seconds = config.ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_seconds)
            .await
            .map_err(|e| Error::cache(format!("Redis SET failed: {e}")))
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let deleted: u64 = conn
            .del(key)
            .await
            .map_err(|e| Error::cache(format!("Redis DEL failed: {e}")))?;
        Ok(deleted > 0)
    }

    async fn delete_by_prefix(&self, prefix: &str) -> Result<u64> {
        let mut conn = self.connection().await?;
        let pattern = format!("{}*", escape_glob(prefix));

        let keys: Vec<String> = conn
            .keys(&pattern)
            .await
            .map_err(|e| Error::cache(format!("Redis KEYS failed: {e}")))?;

        if keys.is_empty() {
            return Ok(0);
        }

        conn.del(&keys)
            .await
            .map_err(|e| Error::cache(format!("Redis DEL failed: {e}")))
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider")
            .field("address", &self.address)
            .field("connected", &self.connection.initialized())
            .finish()
    }
}

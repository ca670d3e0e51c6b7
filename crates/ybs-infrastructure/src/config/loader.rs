//! Configuration loader
//!
//! Sources are merged in this order, later ones winning:
//!
//! 1. `AppConfig::default()`
//! 2. TOML file (explicit path, or `ybs.toml` found in the usual places)
//! 3. Legacy variables: `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`,
//!    `OPENAI_API_KEY`, `GEMINI_API_KEY`, `DATABASE_URL`
//! 4. `YBS_`-prefixed variables with `__` nesting (`YBS_CACHE__TTL_SECS=60`)

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use ybs_domain::error::{Error, Result};
use ybs_providers::catalog::postgres::is_valid_table_name;

use crate::config::types::{AppConfig, CacheBackend, CatalogBackend, EmbeddingBackend};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Unprefixed variables read for compatibility with existing deployments
const LEGACY_ENV: &[(&str, &str)] = &[
    ("REDIS_HOST", "cache.host"),
    ("REDIS_PORT", "cache.port"),
    ("REDIS_PASSWORD", "cache.password"),
    ("OPENAI_API_KEY", "embedding.api_key"),
    ("GEMINI_API_KEY", "embedding.api_key"),
    ("DATABASE_URL", "catalog.database_url"),
];

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load and validate configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        for (var, key) in LEGACY_ENV {
            figment = figment.merge(Env::raw().only(&[*var]).map(move |_| (*key).into()));
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Serialize `config` as TOML to `path`
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;
        Ok(())
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    parse_log_level(&config.logging.level)?;
    validate_embedding_config(config)?;
    validate_cache_config(config)?;
    validate_catalog_config(config)?;
    validate_search_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::config("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    let embedding = &config.embedding;
    if embedding.provider == EmbeddingBackend::Gemini {
        if embedding.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            return Err(Error::config(
                "Gemini embedding requires an API key (GEMINI_API_KEY or YBS_EMBEDDING__API_KEY)",
            ));
        }
        if embedding.model.trim().is_empty() {
            return Err(Error::config("Embedding model cannot be empty"));
        }
    }
    if embedding.timeout_secs == 0 {
        return Err(Error::config("Embedding timeout cannot be 0"));
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    let cache = &config.cache;
    if cache.provider == CacheBackend::None {
        return Ok(());
    }
    if cache.ttl_secs == 0 {
        return Err(Error::config("Cache TTL cannot be 0 when cache is enabled"));
    }
    if cache.timeout_ms == 0 {
        return Err(Error::config("Cache timeout cannot be 0 when cache is enabled"));
    }
    if cache.provider == CacheBackend::Redis && cache.redis_host().is_some() && cache.port == 0 {
        return Err(Error::config("Redis port cannot be 0"));
    }
    if cache.provider == CacheBackend::Moka && cache.max_entries == 0 {
        return Err(Error::config("Moka cache capacity cannot be 0"));
    }
    Ok(())
}

fn validate_catalog_config(config: &AppConfig) -> Result<()> {
    let catalog = &config.catalog;
    match catalog.provider {
        CatalogBackend::Postgres => {
            if catalog
                .database_url
                .as_deref()
                .is_none_or(|u| u.trim().is_empty())
            {
                return Err(Error::config(
                    "Postgres catalog requires a database URL (DATABASE_URL)",
                ));
            }
            if !is_valid_table_name(&catalog.table) {
                return Err(Error::config(format!(
                    "Invalid catalog table name: {}",
                    catalog.table
                )));
            }
            if catalog.max_connections == 0 {
                return Err(Error::config("Catalog pool size cannot be 0"));
            }
        }
        CatalogBackend::Memory => {}
    }
    Ok(())
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    let search = &config.search;
    if search.candidate_limit == 0 {
        return Err(Error::config("Search candidate limit cannot be 0"));
    }
    if search.max_limit == 0 {
        return Err(Error::config("Search max limit cannot be 0"));
    }
    if search.default_limit > search.max_limit {
        return Err(Error::config(format!(
            "Search default limit {} exceeds max limit {}",
            search.default_limit, search.max_limit
        )));
    }
    Ok(())
}

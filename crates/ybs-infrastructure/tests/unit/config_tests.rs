//! Configuration loading and validation tests

use figment::Jail;
use ybs_infrastructure::config::{
    AppConfig, CacheBackend, CatalogBackend, ConfigLoader, EmbeddingBackend, validate_app_config,
};

fn to_figment(e: ybs_domain::Error) -> figment::Error {
    figment::Error::from(e.to_string())
}

/// Configuration that passes validation without any environment
fn offline_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.embedding.provider = EmbeddingBackend::Null;
    config.catalog.provider = CatalogBackend::Memory;
    config
}

#[test]
fn defaults_match_service_contract() {
    let config = AppConfig::default();

    assert_eq!(config.embedding.model, "text-embedding-004");
    assert_eq!(config.cache.port, 6379);
    assert_eq!(config.cache.ttl_secs, 3600);
    assert_eq!(config.catalog.table, "YellowBookEntry");
    assert_eq!(config.search.default_limit, 5);
    assert_eq!(config.search.max_limit, 50);
    assert_eq!(config.search.candidate_limit, 1000);
}

#[test]
fn default_config_requires_credentials() {
    let err = validate_app_config(&AppConfig::default()).unwrap_err();
    assert!(err.to_string().contains("API key"));
}

#[test]
fn loads_toml_file_from_explicit_path() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "service.toml",
            r#"
            [server]
            port = 8088

            [embedding]
            provider = "null"

            [cache]
            provider = "moka"
            ttl_secs = 120

            [catalog]
            provider = "memory"
            "#,
        )?;

        let config = ConfigLoader::new()
            .with_config_path("service.toml")
            .load()
            .map_err(to_figment)?;

        assert_eq!(config.server.port, 8088);
        assert_eq!(config.cache.provider, CacheBackend::Moka);
        assert_eq!(config.cache.ttl_secs, 120);
        assert_eq!(config.embedding.provider, EmbeddingBackend::Null);
        Ok(())
    });
}

#[test]
fn finds_default_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "ybs.toml",
            r#"
            [embedding]
            provider = "null"

            [catalog]
            provider = "memory"

            [search]
            max_limit = 20
            "#,
        )?;

        let config = ConfigLoader::new().load().map_err(to_figment)?;
        assert_eq!(config.search.max_limit, 20);
        Ok(())
    });
}

#[test]
fn legacy_environment_variables_are_honoured() {
    Jail::expect_with(|jail| {
        jail.set_env("REDIS_HOST", "cache.internal");
        jail.set_env("REDIS_PORT", "6380");
        jail.set_env("GEMINI_API_KEY", "AIza-test");
        jail.set_env("DATABASE_URL", "postgres://ybs@db/ybs");

        let config = ConfigLoader::new().load().map_err(to_figment)?;

        assert_eq!(config.cache.redis_host(), Some("cache.internal"));
        assert_eq!(config.cache.port, 6380);
        assert_eq!(config.embedding.api_key.as_deref(), Some("AIza-test"));
        assert_eq!(
            config.catalog.database_url.as_deref(),
            Some("postgres://ybs@db/ybs")
        );
        Ok(())
    });
}

#[test]
fn openai_key_variable_is_accepted_for_gemini() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "legacy-key");
        jail.set_env("DATABASE_URL", "postgres://ybs@db/ybs");

        let config = ConfigLoader::new().load().map_err(to_figment)?;
        assert_eq!(config.embedding.api_key.as_deref(), Some("legacy-key"));
        Ok(())
    });
}

#[test]
fn prefixed_variables_override_file_and_legacy() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "ybs.toml",
            r#"
            [cache]
            ttl_secs = 120
            "#,
        )?;
        jail.set_env("REDIS_HOST", "legacy-host");
        jail.set_env("YBS_CACHE__HOST", "preferred-host");
        jail.set_env("YBS_CACHE__TTL_SECS", "30");
        jail.set_env("YBS_EMBEDDING__PROVIDER", "null");
        jail.set_env("YBS_CATALOG__PROVIDER", "memory");

        let config = ConfigLoader::new().load().map_err(to_figment)?;

        assert_eq!(config.cache.redis_host(), Some("preferred-host"));
        assert_eq!(config.cache.ttl_secs, 30);
        Ok(())
    });
}

#[test]
fn invalid_values_are_rejected() {
    let mut config = offline_config();
    config.cache.provider = CacheBackend::Moka;
    config.cache.ttl_secs = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = offline_config();
    config.server.port = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = offline_config();
    config.search.candidate_limit = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = offline_config();
    config.search.default_limit = 100;
    assert!(validate_app_config(&config).is_err());

    let mut config = offline_config();
    config.logging.level = "loud".to_string();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn postgres_catalog_needs_url_and_safe_table() {
    let mut config = offline_config();
    config.catalog.provider = CatalogBackend::Postgres;
    assert!(
        validate_app_config(&config)
            .unwrap_err()
            .to_string()
            .contains("DATABASE_URL")
    );

    config.catalog.database_url = Some("postgres://localhost/ybs".to_string());
    config.catalog.table = "entries; DROP TABLE x".to_string();
    assert!(
        validate_app_config(&config)
            .unwrap_err()
            .to_string()
            .contains("Invalid catalog table name")
    );

    config.catalog.table = "YellowBookEntry".to_string();
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn disabled_cache_skips_cache_validation() {
    let mut config = offline_config();
    config.cache.provider = CacheBackend::None;
    config.cache.ttl_secs = 0;
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn save_and_reload_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ybs.toml");
    let mut config = offline_config();
    config.server.port = 9000;
    config.cache.provider = CacheBackend::Moka;

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("YBS_ROUNDTRIP_TEST");
    loader.save_to_file(&config, &path).expect("save");
    let loaded = loader.load().expect("load");

    assert_eq!(loaded.server.port, 9000);
    assert_eq!(loaded.cache.provider, CacheBackend::Moka);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

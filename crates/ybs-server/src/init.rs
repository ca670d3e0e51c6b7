//! Server startup

use std::path::Path;

use anyhow::Context;
use tracing::info;
use ybs_infrastructure::config::{ConfigLoader, validate_app_config};
use ybs_infrastructure::init_app;
use ybs_infrastructure::logging::init_logging;

use crate::handlers::ServerState;
use crate::routes::build_rocket;

/// Load configuration, wire providers and serve until shutdown
pub async fn run(config_path: Option<&Path>, port: Option<u16>) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }

    let mut config = loader.load().context("Failed to load configuration")?;
    if let Some(port) = port {
        config.server.port = port;
        validate_app_config(&config)?;
    }

    init_logging(&config.logging)?;

    let address = config.server.address.clone();
    let port = config.server.port;
    let context = init_app(config)?;
    let state = ServerState::new(context.search_service.clone())
        .with_limits(context.config.search.default_limit, context.config.search.max_limit);

    let figment = rocket::Config::figment()
        .merge(("address", address.clone()))
        .merge(("port", port));

    info!("Listening on {address}:{port}");

    build_rocket(state)
        .configure(figment)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {e}"))?;

    Ok(())
}

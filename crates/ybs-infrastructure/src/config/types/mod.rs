//! Configuration types

mod app;
mod logging;
mod providers;
mod search;
mod server;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use providers::{
    CacheBackend, CacheConfig, CatalogBackend, CatalogConfig, EmbeddingBackend, EmbeddingConfig,
};
pub use search::SearchConfig;
pub use server::ServerConfig;

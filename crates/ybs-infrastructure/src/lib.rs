//! # Yellow Books Search - Infrastructure Layer
//!
//! Cross-cutting technical concerns and provider wiring.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading and validation |
//! | [`logging`] | tracing subscriber setup |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`di`] | Builds the search service from configuration |
//! | [`constants`] | Infrastructure defaults |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::bootstrap::{AppContext, init_app};

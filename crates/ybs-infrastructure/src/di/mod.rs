//! Composition root
//!
//! Turns an [`AppConfig`](crate::config::AppConfig) into concrete providers
//! and a ready-to-use search service.

pub mod bootstrap;
pub mod factory;

pub use bootstrap::{AppContext, init_app};

//! # Yellow Books Search - Domain Layer
//!
//! Core types and contracts for semantic search over the yellow books
//! business directory.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error enum and `Result` alias |
//! | [`value_objects`] | Queries, embeddings, catalog entries and search results |
//! | [`ports`] | Provider traits for embedding, cache and catalog backends |
//! | [`constants`] | Domain-level limits and defaults |
//!
//! This crate has no knowledge of HTTP, Redis or Postgres. Adapters for
//! those live in `ybs-providers`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};

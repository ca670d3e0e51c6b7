//! Application Layer - Yellow Books Search
//!
//! Orchestrates the domain according to Clean Architecture principles:
//!
//! - `domain_services::ranking`: pure cosine-similarity ranker
//! - `use_cases::search_cache`: failure-isolating wrapper around a cache provider
//! - `use_cases::search_service`: the read-through search orchestrator
//! - `ports::services`: service interfaces consumed by the presentation layer
//!
//! ## Dependencies
//!
//! This crate depends only on `ybs-domain` and pure async/serialization
//! libraries. Concrete providers are injected.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::ranking;
pub use ports::services::{SearchServiceInterface, ServiceStatus};
pub use use_cases::{CacheLookup, InvalidationOutcome, SearchCache, SearchServiceImpl};

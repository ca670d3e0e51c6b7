//! Provider implementations for Yellow Books search
//!
//! Adapters implementing the provider ports declared in `ybs-domain`.
//!
//! | Module | Providers |
//! |--------|-----------|
//! | [`embedding`] | Gemini (HTTP), Null (deterministic) |
//! | [`cache`] | Redis, Moka, Null |
//! | [`catalog`] | Postgres, In-memory |

pub mod cache;
pub mod catalog;
pub mod constants;
pub mod embedding;

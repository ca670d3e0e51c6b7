//! Catalog Provider Implementations
//!
//! Read access to directory entries together with their stored vectors.
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`InMemoryCatalogProvider`] | Fixed entry list, optionally loaded from a JSON file |
//! | [`PostgresCatalogProvider`] | Reads the entry table through an r2d2 pool |

pub mod in_memory;
#[cfg(feature = "catalog-postgres")]
pub mod postgres;

pub use in_memory::InMemoryCatalogProvider;
#[cfg(feature = "catalog-postgres")]
pub use postgres::{PostgresCatalogConfig, PostgresCatalogProvider};

//! # Yellow Books Search - Server
//!
//! Thin HTTP layer over the search service.
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/api/ai/yellow-books/search` | POST | Semantic search |
//! | `/api/ai/yellow-books/cache` | DELETE | Clear one cached query, or all |
//! | `/health` | GET | Liveness and wired providers |

pub mod constants;
pub mod handlers;
pub mod init;
pub mod models;
pub mod routes;

pub use handlers::ServerState;
pub use init::run;
pub use routes::build_rocket;

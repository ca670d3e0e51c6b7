//! Search endpoint

use rocket::serde::json::{self, Json};
use rocket::{State, post};
use tracing::warn;
use ybs_domain::value_objects::{SearchRequest, SearchResult};

use super::{ApiError, ServerState, bad_request};
use crate::models::SearchBody;

/// Semantic search over directory entries
///
/// Every failure, whether a malformed body, an invalid query or a provider
/// error, is answered with 400 and `{"error": ...}`.
#[post("/api/ai/yellow-books/search", data = "<body>")]
pub async fn search(
    state: &State<ServerState>,
    body: Result<Json<SearchBody>, json::Error<'_>>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let body = match body {
        Ok(body) => body.into_inner(),
        Err(e) => {
            warn!(error = %e, "Rejected malformed search body");
            return Err(bad_request(format!("Invalid request body: {e}")));
        }
    };

    let limit = body.limit.unwrap_or(state.default_limit);
    if limit > state.max_limit {
        return Err(bad_request(format!(
            "Limit too large (max {})",
            state.max_limit
        )));
    }

    let request = SearchRequest::new(body.query)
        .with_limit(limit)
        .with_cache(body.use_cache.unwrap_or(true));

    match state.search_service.search(&request).await {
        Ok(results) => Ok(Json(results)),
        Err(e) => {
            if e.is_client_error() {
                warn!(error = %e, "Rejected search query");
            } else {
                warn!(error = %e, "Search failed");
            }
            Err(bad_request(e.to_string()))
        }
    }
}

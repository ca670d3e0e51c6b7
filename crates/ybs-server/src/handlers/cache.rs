//! Cache invalidation endpoint

use rocket::serde::json::Json;
use rocket::{State, delete};

use super::ServerState;
use crate::models::MessageResponse;

/// Clear the cached results of one query, or of all queries when `query`
/// is absent or blank. Always answers 200.
#[delete("/api/ai/yellow-books/cache?<query>")]
pub async fn clear_cache(
    state: &State<ServerState>,
    query: Option<String>,
) -> Json<MessageResponse> {
    let outcome = state.search_service.invalidate(query.as_deref()).await;
    Json(MessageResponse {
        message: outcome.message(),
    })
}

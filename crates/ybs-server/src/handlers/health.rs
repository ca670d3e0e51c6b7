//! Health check

use rocket::serde::json::Json;
use rocket::{State, get};

use super::ServerState;
use crate::constants::{CACHE_DISABLED, HEALTH_STATUS_OK};
use crate::models::HealthResponse;

#[get("/health")]
pub fn health(state: &State<ServerState>) -> Json<HealthResponse> {
    let status = state.search_service.status();
    Json(HealthResponse {
        status: HEALTH_STATUS_OK.to_string(),
        embedding: status.embedding,
        catalog: status.catalog,
        cache: status.cache.unwrap_or_else(|| CACHE_DISABLED.to_string()),
    })
}

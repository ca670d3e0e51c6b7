//! Route handlers

pub mod cache;
pub mod catchers;
pub mod health;
pub mod search;

use std::sync::Arc;

use rocket::http::Status;
use rocket::serde::json::Json;
use ybs_application::SearchServiceInterface;
use ybs_domain::constants::SEARCH_DEFAULT_LIMIT;

use crate::models::ErrorResponse;

/// Error half of a handler result
pub type ApiError = (Status, Json<ErrorResponse>);

/// Shared handler state
#[derive(Clone)]
pub struct ServerState {
    /// Search and invalidation entry point
    pub search_service: Arc<dyn SearchServiceInterface>,
    /// Result count when the request gives none
    pub default_limit: usize,
    /// Largest result count a request may ask for
    pub max_limit: usize,
}

impl ServerState {
    /// State with default limits
    pub fn new(search_service: Arc<dyn SearchServiceInterface>) -> Self {
        Self {
            search_service,
            default_limit: SEARCH_DEFAULT_LIMIT,
            max_limit: ybs_infrastructure::constants::DEFAULT_SEARCH_MAX_LIMIT,
        }
    }

    /// Override the limits
    pub fn with_limits(mut self, default_limit: usize, max_limit: usize) -> Self {
        self.default_limit = default_limit;
        self.max_limit = max_limit;
        self
    }
}

pub(crate) fn bad_request(message: impl Into<String>) -> ApiError {
    (Status::BadRequest, Json(ErrorResponse::new(message)))
}

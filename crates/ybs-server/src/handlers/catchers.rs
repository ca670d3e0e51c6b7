//! JSON error catchers

use rocket::serde::json::Json;
use rocket::{Request, catch};

use crate::models::ErrorResponse;

#[catch(400)]
pub fn bad_request(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Bad request"))
}

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(format!(
        "Route {} {} not found",
        req.method(),
        req.uri().path()
    )))
}

#[catch(422)]
pub fn unprocessable(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Unprocessable request"))
}

#[catch(500)]
pub fn internal_error(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error"))
}

//! Rocket assembly

use rocket::{Build, Rocket, catchers, routes};

use crate::handlers::{ServerState, cache, catchers, health, search};

/// Build the Rocket instance serving `state`
pub fn build_rocket(state: ServerState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount(
            "/",
            routes![search::search, cache::clear_cache, health::health],
        )
        .register(
            "/",
            catchers![
                catchers::bad_request,
                catchers::not_found,
                catchers::unprocessable,
                catchers::internal_error
            ],
        )
}

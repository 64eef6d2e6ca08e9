//! Route assembly

use super::handlers::{AuthState, live, login, me};
use super::models::ErrorResponse;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, catch, catchers, routes};

/// Build the Rocket application serving the authentication API
pub fn auth_rocket(state: AuthState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![login, me, live])
        .register("/", catchers![default_catcher])
}

/// JSON body for framework-level failures (guard rejections, bad bodies)
#[catch(default)]
fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorResponse>) {
    let error = match status.code {
        401 => "unauthenticated",
        403 => "forbidden",
        404 => "not_found",
        400 | 415 | 422 => "bad_request",
        _ => "internal",
    };
    let message = status.reason().unwrap_or("request failed");
    (status, Json(ErrorResponse::new(error, message)))
}

//! Authentication HTTP API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/auth/login` | POST | Exchange username/password for an access token |
//! | `/auth/me` | GET | Identity behind the presented bearer token (protected) |
//! | `/live` | GET | Liveness probe |

pub mod guard;
pub mod handlers;
pub mod models;
pub mod routes;

pub use guard::{AccessPolicy, AuthenticatedUser};
pub use handlers::AuthState;
pub use routes::auth_rocket;

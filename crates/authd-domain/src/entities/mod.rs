//! Domain entities

mod claims;
mod user;

pub use claims::Claims;
pub use user::{Role, User};

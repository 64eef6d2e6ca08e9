//! # Domain Layer
//!
//! Core types of the authd authentication service.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | `User`, `Role` and token `Claims` |
//! | [`repositories`] | `UserStore` contract for credential records |
//! | [`ports`] | Password, token and clock contracts implemented by infrastructure |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Domain-level constants |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;

pub use entities::{Claims, Role, User};
pub use error::{Error, Result};
pub use ports::{Clock, PasswordVerifier, TokenService};
pub use repositories::UserStore;

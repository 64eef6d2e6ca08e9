//! Transport layer
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`http`] | Rocket server bound to the configured address |
//! | [`client`] | Login client with a per-call deadline |

pub mod client;
pub mod http;

pub use client::AuthClient;
pub use http::{HttpTransport, HttpTransportConfig};

//! Error handling types

use crate::constants::DENIED_MESSAGE;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by infrastructure variants
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for authd
///
/// The login path only ever surfaces [`Error::Denied`] and [`Error::Internal`];
/// token verification surfaces [`Error::TokenExpired`] and
/// [`Error::TokenInvalid`]. The remaining variants describe infrastructure
/// failures and are classified before they reach a caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown username or wrong password
    #[error("Authentication denied: {}", DENIED_MESSAGE)]
    Denied,

    /// Store or signing infrastructure failed while serving a request
    #[error("Internal error: {message}")]
    Internal {
        /// Description safe to return to the caller
        message: String,
    },

    /// Token is past its expiry
    #[error("Token expired")]
    TokenExpired,

    /// Token signature, structure or issuer did not validate
    #[error("Invalid token: {message}")]
    TokenInvalid {
        /// Why verification failed
        message: String,
    },

    /// Caller's role may not access the resource
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// Description of the denied access
        message: String,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Resource already exists
    #[error("Already exists: {resource}")]
    AlreadyExists {
        /// The resource that already exists
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// User store lookup failure
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Infrastructure operation error (hashing, signing, ...)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Transport-level failure talking to a remote server
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Remote call exceeded its deadline
    #[error("Request timed out after {after:?}")]
    Timeout {
        /// Deadline that elapsed
        after: Duration,
    },
}

// Authentication error creation methods
impl Error {
    /// Create an internal error with a caller-safe message
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an invalid token error
    pub fn token_invalid<S: Into<String>>(message: S) -> Self {
        Self::TokenInvalid {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied<S: Into<String>>(message: S) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }
}

// Basic error creation methods
impl Error {
    /// Create an already exists error
    pub fn already_exists<S: Into<String>>(resource: S) -> Self {
        Self::AlreadyExists {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Client-side error creation methods
impl Error {
    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a timeout error
    pub fn timeout(after: Duration) -> Self {
        Self::Timeout { after }
    }
}

// Classification
impl Error {
    /// Whether a caller may reasonably retry the same request unchanged
    ///
    /// Denials and token failures need new credentials; infrastructure and
    /// transport failures may clear up on their own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Internal { .. }
                | Self::Storage { .. }
                | Self::Network { .. }
                | Self::Timeout { .. }
                | Self::Io { .. }
        )
    }

    /// Whether the error belongs to the token verification path
    pub fn is_token_error(&self) -> bool {
        matches!(self, Self::TokenExpired | Self::TokenInvalid { .. })
    }
}

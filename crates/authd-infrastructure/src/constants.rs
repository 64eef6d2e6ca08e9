//! Infrastructure layer constants
//!
//! Defaults and limits used by configuration, crypto and logging.

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Environment variable prefix; nested keys are joined with `__`
pub const CONFIG_ENV_PREFIX: &str = "AUTHD";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "authd.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "authd";

// ============================================================================
// SERVER & CLIENT
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default server URL used by the client
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Default per-call client deadline in seconds
pub const CLIENT_DEFAULT_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// JWT
// ============================================================================

/// Default access token lifetime (15 minutes)
pub const JWT_DEFAULT_EXPIRATION_SECS: u64 = 15 * 60;

/// Default token issuer
pub const JWT_DEFAULT_ISSUER: &str = "authd";

/// Minimum accepted signing secret length
pub const JWT_SECRET_MIN_LENGTH: usize = 32;

// ============================================================================
// PASSWORD HASHING
// ============================================================================

/// Argon2id memory cost in KiB
pub const ARGON2_DEFAULT_MEMORY_KIB: u32 = 19 * 1024;

/// Argon2id iteration count
pub const ARGON2_DEFAULT_ITERATIONS: u32 = 2;

/// Argon2id lanes
pub const ARGON2_DEFAULT_PARALLELISM: u32 = 1;

/// Input hashed once at startup for decoy verifications
pub const DECOY_PASSWORD: &str = "authd-decoy-credential";

// ============================================================================
// LOGGING
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "AUTHD_LOG";

/// Log file stem used when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "authd";

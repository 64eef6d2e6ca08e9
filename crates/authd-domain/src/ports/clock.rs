//! Clock Port

/// Source of wall-clock time in Unix seconds
pub trait Clock: Send + Sync {
    /// Current time as seconds since the Unix epoch
    fn now_unix_secs(&self) -> u64;
}

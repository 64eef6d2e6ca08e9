//! Cryptographic utilities

/// Cryptographic hash utilities
pub struct HashUtils;

impl HashUtils {
    /// Constant-time comparison for cryptographic values
    ///
    /// Runtime depends only on the input lengths, never on where the inputs
    /// first differ.
    pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
        if a.len() != b.len() {
            return false;
        }

        let mut result = 0u8;
        for (x, y) in a.iter().zip(b.iter()) {
            result |= x ^ y;
        }
        result == 0
    }
}

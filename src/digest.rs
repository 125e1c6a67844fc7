//! One-way value digests
//!
//! SHA-256 over the value's digest input, rendered as 64 lowercase hex
//! characters. A digest cannot be turned back into its input.

use sha2::{Digest, Sha256};

/// Length of a rendered digest in hex characters
#[cfg(test)]
pub(crate) const DIGEST_HEX_LEN: usize = 64;

/// Hash raw bytes and return the lowercase hex digest
pub fn digest_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Check that `data` hashes to `expected`
pub fn verify(data: &[u8], expected: &str) -> bool {
    digest_hex(data).eq_ignore_ascii_case(expected)
}

/// Whether a string has the shape of a rendered digest
#[cfg(test)]
pub(crate) fn looks_like_digest(s: &str) -> bool {
    s.len() == DIGEST_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

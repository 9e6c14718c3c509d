// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Self-describing integrity check.
//!
//! The unit actually embedded is
//!
//! ```text
//! message ++ "::HASH::" ++ hex(SHA-256(message))
//! ```
//!
//! so an extractor can tell a clean recovery (`Verified`) from a damaged one
//! (`Failed`) or from something that is not a payload at all (`Unknown`),
//! without access to the original mesh. The hash covers the UTF-8 bytes of the
//! message string.

use core::fmt;

use sha2::{Digest, Sha256};

/// Separator between message and hash.
pub const HASH_DELIMITER: &str = "::HASH::";

/// Length of a hex-encoded SHA-256 digest.
pub const HASH_HEX_LEN: usize = 64;

/// Characters added to a message by [`build_payload`]: delimiter (8) + hash (64).
pub const PAYLOAD_OVERHEAD: usize = HASH_DELIMITER.len() + HASH_HEX_LEN;

/// Outcome of the integrity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrityStatus {
    /// Delimiter found once and the hash matches the recovered message.
    Verified,
    /// Delimiter found once but the hash does not match.
    Failed,
    /// Delimiter missing or ambiguous; the text is not a recognisable payload.
    Unknown,
}

impl IntegrityStatus {
    pub fn is_verified(self) -> bool {
        self == Self::Verified
    }
}

impl fmt::Display for IntegrityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Verified => "VERIFIED",
            Self::Failed => "FAILED",
            Self::Unknown => "UNKNOWN",
        })
    }
}

/// Lowercase hex SHA-256 of `message`.
pub fn message_digest(message: &str) -> String {
    hex::encode(Sha256::digest(message.as_bytes()))
}

/// `message ++ "::HASH::" ++ hex(SHA-256(message))`.
pub fn build_payload(message: &str) -> String {
    let mut payload = String::with_capacity(message.len() + PAYLOAD_OVERHEAD);
    payload.push_str(message);
    payload.push_str(HASH_DELIMITER);
    payload.push_str(&message_digest(message));
    payload
}

/// Payload length in characters for a message of `message_len` characters.
pub fn payload_len(message_len: usize) -> usize {
    message_len.saturating_add(PAYLOAD_OVERHEAD)
}

/// Split `decoded` into `(message, hash)` when the delimiter occurs exactly
/// once.
///
/// A message that itself contains the delimiter yields three or more parts
/// and is rejected, as is text without any delimiter.
pub fn split_payload(decoded: &str) -> Option<(&str, &str)> {
    let mut parts = decoded.split(HASH_DELIMITER);
    let message = parts.next()?;
    let hash = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((message, hash))
}

/// Check a decoded payload.
///
/// Returns the message part and `Verified`/`Failed` when the payload splits
/// cleanly, or the whole decoded text and `Unknown` otherwise.
pub fn verify_payload(decoded: &str) -> (String, IntegrityStatus) {
    match split_payload(decoded) {
        Some((message, hash)) => {
            let status = if message_digest(message) == hash {
                IntegrityStatus::Verified
            } else {
                IntegrityStatus::Failed
            };
            (message.to_string(), status)
        }
        None => (decoded.to_string(), IntegrityStatus::Unknown),
    }
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the watermarking pipeline.
//!
//! [`StegoError`] only covers malformed inputs. Capacity shortfalls and
//! mismatched extraction lengths are not errors: they degrade into truncated
//! payloads and are surfaced through [`IntegrityStatus`](super::IntegrityStatus).

use core::fmt;

/// Errors that can occur while preparing a watermark for embedding.
#[derive(Debug, Clone, PartialEq)]
pub enum StegoError {
    /// The message contains a character outside the single-byte range
    /// (above U+00FF), which has no 8-bit code.
    UnsupportedCharacter {
        /// The offending character.
        ch: char,
        /// Character index within the message.
        index: usize,
    },
    /// A codec parameter is non-finite or not strictly positive.
    InvalidParameter {
        /// Parameter name (`"step"` or `"delta"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A method name did not match `qim`, `delta` or `hybrid`.
    UnknownMethod(String),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCharacter { ch, index } => write!(
                f,
                "character {ch:?} (U+{:04X}) at index {index} is not a single-byte code",
                *ch as u32
            ),
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid {name} {value}: must be finite and > 0")
            }
            Self::UnknownMethod(name) => {
                write!(f, "unknown method {name:?} (expected qim, delta or hybrid)")
            }
        }
    }
}

impl std::error::Error for StegoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = StegoError::UnsupportedCharacter { ch: '日', index: 3 };
        assert_eq!(
            e.to_string(),
            "character '日' (U+65E5) at index 3 is not a single-byte code"
        );
        let e = StegoError::InvalidParameter { name: "step", value: 0.0 };
        assert_eq!(e.to_string(), "invalid step 0: must be finite and > 0");
        let e = StegoError::UnknownMethod("lsb".into());
        assert!(e.to_string().contains("\"lsb\""));
    }
}

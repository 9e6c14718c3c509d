// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Text <-> bit conversion.
//!
//! Every character is treated as a single 8-bit code (U+0000..=U+00FF) and
//! emitted MSB first. Bits are stored one per `u8` (values 0 or 1), the same
//! representation the codecs consume.

use crate::stego::error::StegoError;

/// Convert bytes to a bit vector (MSB first within each byte).
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
///
/// A trailing group shorter than 8 bits is dropped, not padded.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u8, |byte, &bit| (byte << 1) | (bit & 1))
        })
        .collect()
}

/// Encode a string as its single-byte character codes.
///
/// # Errors
/// [`StegoError::UnsupportedCharacter`] for the first character above U+00FF.
pub fn text_to_bytes(text: &str) -> Result<Vec<u8>, StegoError> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| u8::try_from(ch).map_err(|_| StegoError::UnsupportedCharacter { ch, index }))
        .collect()
}

/// Decode single-byte character codes back to a string (U+0000..=U+00FF).
pub fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Convert text to its bit string: 8 bits per character, MSB first.
pub fn text_to_bits(text: &str) -> Result<Vec<u8>, StegoError> {
    Ok(bytes_to_bits(&text_to_bytes(text)?))
}

/// Convert a bit string back to text, discarding a trailing partial byte.
pub fn bits_to_text(bits: &[u8]) -> String {
    bytes_to_text(&bits_to_bytes(bits))
}

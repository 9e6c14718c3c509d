// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Watermark embedding and extraction pipelines.
//!
//! Three methods share one bit stream layout (one bit per vertex, in the
//! traversal order of [`crate::mesh::stream`]):
//!
//! - **QIM** (`qim`): parity of the quantized X coordinate. Survives small
//!   numeric perturbations.
//! - **Delta-Additive** (`delta`): ±D offset on Y. Fragile; see the module
//!   docs for why its readings follow the cover rather than the message.
//! - **Hybrid** (`hybrid`): both of the above; extraction prefers QIM when its
//!   text looks plausible.
//!
//! [`embed`] and [`extract`] wrap the message in the integrity payload
//! (`message::HASH::sha256hex`). [`embed_raw`] and [`extract_raw`] work on the
//! bare text.
//!
//! Nothing here fails on well-formed input. A scene that is too small gets a
//! truncated payload, and a wrong expected length gives garbage text; both
//! show up only in the returned [`IntegrityStatus`].

pub mod bits;
pub mod capacity;
pub mod config;
pub mod delta;
pub mod error;
pub mod hybrid;
pub mod integrity;
pub mod qim;

pub use config::{CodecConfig, DeltaParams, Method, QimParams};
pub use config::{DEFAULT_DELTA, DEFAULT_MESSAGE_LENGTH, DEFAULT_QIM_STEP};
pub use error::StegoError;
pub use hybrid::{HybridOutcome, PlausibilityCheck, PrintableRatio, PRINTABLE_THRESHOLD};
pub use integrity::IntegrityStatus;

use crate::mesh::SceneNode;

/// What an embed call actually wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedReport {
    /// Bits in the (payload) text.
    pub bits_requested: usize,
    /// Bits written, limited by the vertex count.
    pub bits_embedded: usize,
}

impl EmbedReport {
    /// `true` when the scene was too small for the whole text.
    pub fn is_truncated(&self) -> bool {
        self.bits_embedded < self.bits_requested
    }

    /// Complete characters that made it into the scene.
    pub fn chars_embedded(&self) -> usize {
        self.bits_embedded / 8
    }
}

/// Result of [`extract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Recovered message (payload text minus hash when the payload split
    /// cleanly, the whole decoded text otherwise).
    pub text: String,
    pub status: IntegrityStatus,
    /// Codec that produced the text. For Hybrid, the branch that was chosen.
    pub source: Method,
}

fn embed_bits_in_place<N: SceneNode>(scene: &mut N, bits: &[u8], config: &CodecConfig) -> usize {
    match config.method {
        Method::Qim => qim::qim_embed_in_place(scene, bits, &config.qim),
        Method::Delta => delta::delta_embed_in_place(scene, bits, &config.delta),
        Method::Hybrid => hybrid::hybrid_embed_in_place(scene, bits, &config.qim, &config.delta),
    }
}

/// Embed `text` as-is (no integrity suffix) into a deep copy of `scene`.
///
/// # Errors
/// [`StegoError::UnsupportedCharacter`] if `text` has a character above U+00FF.
pub fn embed_raw_with_report<N: SceneNode>(
    scene: &N,
    text: &str,
    config: &CodecConfig,
) -> Result<(N, EmbedReport), StegoError> {
    let bits = bits::text_to_bits(text)?;
    let mut marked = scene.clone();
    let bits_embedded = embed_bits_in_place(&mut marked, &bits, config);
    let report = EmbedReport { bits_requested: bits.len(), bits_embedded };
    if report.is_truncated() {
        log::debug!(
            "{}: scene holds {} of {} bits, payload truncated to {} chars",
            config.method,
            report.bits_embedded,
            report.bits_requested,
            report.chars_embedded()
        );
    } else {
        log::debug!("{}: embedded {} bits", config.method, report.bits_embedded);
    }
    Ok((marked, report))
}

/// Embed `text` as-is (no integrity suffix) into a deep copy of `scene`.
pub fn embed_raw<N: SceneNode>(scene: &N, text: &str, config: &CodecConfig) -> Result<N, StegoError> {
    embed_raw_with_report(scene, text, config).map(|(marked, _)| marked)
}

/// Embed `message` plus its integrity suffix into a deep copy of `scene`.
///
/// The caller's scene is never modified. If the scene has fewer vertices than
/// the payload has bits, the payload is silently truncated; the report says by
/// how much.
///
/// # Errors
/// [`StegoError::UnsupportedCharacter`] if `message` has a character above
/// U+00FF.
pub fn embed_with_report<N: SceneNode>(
    scene: &N,
    message: &str,
    config: &CodecConfig,
) -> Result<(N, EmbedReport), StegoError> {
    let payload = integrity::build_payload(message);
    embed_raw_with_report(scene, &payload, config)
}

/// Embed `message` plus its integrity suffix into a deep copy of `scene`.
///
/// # Errors
/// [`StegoError::UnsupportedCharacter`] if `message` has a character above
/// U+00FF.
pub fn embed<N: SceneNode>(scene: &N, message: &str, config: &CodecConfig) -> Result<N, StegoError> {
    embed_with_report(scene, message, config).map(|(marked, _)| marked)
}

/// Read `char_count` characters with the configured method.
///
/// Returns the decoded text and the codec that produced it.
pub fn extract_raw_with_detector<N: SceneNode>(
    scene: &N,
    char_count: usize,
    config: &CodecConfig,
    check: &dyn PlausibilityCheck,
) -> (String, Method) {
    let bit_count = char_count.saturating_mul(8);
    match config.method {
        Method::Qim => (
            bits::bits_to_text(&qim::qim_extract(scene, bit_count, &config.qim)),
            Method::Qim,
        ),
        Method::Delta => (
            bits::bits_to_text(&delta::delta_extract(scene, bit_count, &config.delta)),
            Method::Delta,
        ),
        Method::Hybrid => {
            let outcome = hybrid::hybrid_extract(scene, bit_count, &config.qim, &config.delta, check);
            (outcome.text, outcome.source)
        }
    }
}

/// Read `char_count` characters with the configured method, without any
/// integrity check.
pub fn extract_raw<N: SceneNode>(scene: &N, char_count: usize, config: &CodecConfig) -> String {
    extract_raw_with_detector(scene, char_count, config, &PrintableRatio::default()).0
}

/// Extract a message of `expected_message_len` characters and verify its hash,
/// using `check` to arbitrate Hybrid readings.
pub fn extract_with_detector<N: SceneNode>(
    scene: &N,
    expected_message_len: usize,
    config: &CodecConfig,
    check: &dyn PlausibilityCheck,
) -> Extraction {
    let total = integrity::payload_len(expected_message_len);
    let (decoded, source) = extract_raw_with_detector(scene, total, config, check);
    let (text, status) = integrity::verify_payload(&decoded);
    log::debug!(
        "{}: extracted {} of {} chars via {source}, integrity {status}",
        config.method,
        decoded.chars().count(),
        total
    );
    Extraction { text, status, source }
}

/// Extract a message of `expected_message_len` characters and verify its hash.
///
/// Always returns a result. A wrong length or an unmarked scene yields
/// [`IntegrityStatus::Failed`] or [`IntegrityStatus::Unknown`].
pub fn extract<N: SceneNode>(scene: &N, expected_message_len: usize, config: &CodecConfig) -> Extraction {
    extract_with_detector(scene, expected_message_len, config, &PrintableRatio::default())
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Hybrid embedding: QIM on X plus Delta-Additive on Y.
//!
//! Both passes carry the same bits, on different axes, so they never overwrite
//! each other. On extraction the QIM reading is decoded first and handed to a
//! [`PlausibilityCheck`]; if it is rejected, the Delta-Additive reading is
//! returned as-is, without any validity check of its own.
//!
//! The default check ([`PrintableRatio`]) is a heuristic, not a classifier.

use crate::mesh::SceneNode;
use crate::stego::bits::bits_to_text;
use crate::stego::config::{DeltaParams, Method, QimParams};
use crate::stego::delta::{delta_embed_in_place, delta_extract};
use crate::stego::qim::{qim_embed_in_place, qim_extract};

/// Minimum printable fraction for [`PrintableRatio::default`].
pub const PRINTABLE_THRESHOLD: f64 = 0.7;

/// Decides whether a decoded QIM reading looks like a real watermark.
pub trait PlausibilityCheck {
    fn is_plausible(&self, text: &str) -> bool;
}

/// Fraction of characters in the printable ASCII range `0x20..=0x7E`.
///
/// Empty text has ratio 0.
pub fn printable_ratio(text: &str) -> f64 {
    let (printable, total) = text.chars().fold((0usize, 0usize), |(p, t), c| {
        (p + usize::from(matches!(c, '\x20'..='\x7e')), t + 1)
    });
    if total == 0 {
        return 0.0;
    }
    printable as f64 / total as f64
}

/// Accepts text whose printable-ASCII ratio strictly exceeds `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintableRatio {
    pub threshold: f64,
}

impl Default for PrintableRatio {
    fn default() -> Self {
        Self { threshold: PRINTABLE_THRESHOLD }
    }
}

impl PlausibilityCheck for PrintableRatio {
    fn is_plausible(&self, text: &str) -> bool {
        printable_ratio(text) > self.threshold
    }
}

impl<F: Fn(&str) -> bool> PlausibilityCheck for F {
    fn is_plausible(&self, text: &str) -> bool {
        self(text)
    }
}

/// Text chosen by [`hybrid_extract`] and which reading produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HybridOutcome {
    pub text: String,
    /// [`Method::Qim`] or [`Method::Delta`].
    pub source: Method,
}

/// QIM pass followed by Delta-Additive pass, in place.
///
/// Returns the number of bits written by each pass (always equal, since both
/// walk the same stream).
pub fn hybrid_embed_in_place<N: SceneNode>(
    scene: &mut N,
    bits: &[u8],
    qim: &QimParams,
    delta: &DeltaParams,
) -> usize {
    let written = qim_embed_in_place(scene, bits, qim);
    let written_delta = delta_embed_in_place(scene, bits, delta);
    debug_assert_eq!(written, written_delta);
    written
}

/// Embed `bits` into a deep copy of `scene` with both codecs.
pub fn hybrid_embed<N: SceneNode>(scene: &N, bits: &[u8], qim: &QimParams, delta: &DeltaParams) -> N {
    let mut marked = scene.clone();
    hybrid_embed_in_place(&mut marked, bits, qim, delta);
    marked
}

/// Read `bit_count` bits with QIM; fall back to Delta-Additive when `check`
/// rejects the QIM text.
pub fn hybrid_extract<N: SceneNode>(
    scene: &N,
    bit_count: usize,
    qim: &QimParams,
    delta: &DeltaParams,
    check: &dyn PlausibilityCheck,
) -> HybridOutcome {
    let qim_text = bits_to_text(&qim_extract(scene, bit_count, qim));
    if check.is_plausible(&qim_text) {
        return HybridOutcome { text: qim_text, source: Method::Qim };
    }
    log::debug!(
        "hybrid: QIM reading rejected (printable ratio {:.2}), using delta",
        printable_ratio(&qim_text)
    );
    let delta_text = bits_to_text(&delta_extract(scene, bit_count, delta));
    HybridOutcome { text: delta_text, source: Method::Delta }
}

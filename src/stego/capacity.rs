// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Capacity model.
//!
//! Every codec pass stores one bit per vertex, so a scene's capacity in bits is
//! its vertex count. Hybrid runs two passes over the same vertices and has the
//! same capacity. The integrity wrapper costs [`PAYLOAD_OVERHEAD`] characters
//! (576 bits) per message.

use crate::mesh::{vertex_count, SceneNode};
use crate::stego::integrity::{payload_len, PAYLOAD_OVERHEAD};

/// Embeddable bits in one codec pass.
pub fn capacity_bits<N: SceneNode>(scene: &N) -> usize {
    vertex_count(scene)
}

/// Longest message (characters) whose full integrity payload fits in `scene`.
///
/// Returns 0 when not even an empty message fits.
pub fn max_message_len<N: SceneNode>(scene: &N) -> usize {
    (capacity_bits(scene) / 8).saturating_sub(PAYLOAD_OVERHEAD)
}

/// Vertices needed to embed a message of `message_len` characters together
/// with its integrity suffix.
pub fn required_vertices(message_len: usize) -> usize {
    payload_len(message_len).saturating_mul(8)
}

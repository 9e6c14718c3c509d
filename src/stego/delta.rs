// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Delta-Additive embedding on the Y coordinate.
//!
//! Embedding shifts Y by `+D` for a 1 bit and `-D` for a 0 bit. Extraction
//! reads `r = Y mod 2D` (floor modulo, so negative coordinates behave like
//! positive ones) and reports 1 when `r > D`.
//!
//! # Robustness
//!
//! This scheme is not comparable to QIM. There is no parity lattice: the
//! reading depends on the exact floats left by the embedder, so any
//! intervening numeric change (re-quantization, transforms, export precision)
//! can flip bits. Worse, `Y + D` and `Y - D` are exactly one period `2D`
//! apart, so both land in the same residue class and the recovered bit is
//! decided by the cover value `Y` rather than by the embedded bit. The Hybrid
//! codec only falls back to this reading when QIM produced implausible text.

use crate::mesh::{Axis, SceneNode, VertexStream, VertexStreamMut};
use crate::stego::config::DeltaParams;

/// Coordinate carrying the Delta-Additive bit.
pub const DELTA_AXIS: Axis = Axis::Y;

/// Shift `y` by `±D`.
pub fn embed_coordinate(y: f32, bit: u8, params: &DeltaParams) -> f32 {
    debug_assert!(bit <= 1);
    let offset = if bit == 1 { params.delta() } else { -params.delta() };
    (f64::from(y) + offset) as f32
}

/// Residue of `y` in `[0, 2D)`.
pub fn residue(y: f32, params: &DeltaParams) -> f64 {
    f64::from(y).rem_euclid(params.period())
}

/// Read the bit carried by `y`.
pub fn extract_bit(y: f32, params: &DeltaParams) -> u8 {
    u8::from(residue(y, params) > params.delta())
}

/// Embed `bits` into the Y coordinates of `scene`, in place.
///
/// Returns the number of bits actually written; excess bits are dropped.
pub fn delta_embed_in_place<N: SceneNode>(scene: &mut N, bits: &[u8], params: &DeltaParams) -> usize {
    let axis = DELTA_AXIS.index();
    let written = VertexStreamMut::new(scene).modify_prefix(bits.len(), |i, vertex| {
        vertex[axis] = embed_coordinate(vertex[axis], bits[i], params);
    });
    log::trace!("delta: wrote {written}/{} bits (delta {})", bits.len(), params.delta());
    written
}

/// Embed `bits` into a deep copy of `scene`.
pub fn delta_embed<N: SceneNode>(scene: &N, bits: &[u8], params: &DeltaParams) -> N {
    let mut marked = scene.clone();
    delta_embed_in_place(&mut marked, bits, params);
    marked
}

/// Read up to `bit_count` bits. Returns fewer when the scene has fewer vertices.
pub fn delta_extract<N: SceneNode>(scene: &N, bit_count: usize, params: &DeltaParams) -> Vec<u8> {
    VertexStream::new(scene)
        .coordinates(DELTA_AXIS)
        .take(bit_count)
        .map(|y| extract_bit(y, params))
        .collect()
}

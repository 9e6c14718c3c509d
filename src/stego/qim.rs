// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Quantization Index Modulation on the X coordinate.
//!
//! Each vertex carries one bit in the parity of its quantization index
//! `q = round(X / S)`:
//!
//! - bit 0: `q` forced even (decremented by 1 if odd)
//! - bit 1: `q` forced odd (incremented by 1 if even)
//!
//! and the coordinate is snapped to `X' = q * S`. Because the bit lives in a
//! lattice much coarser than `f32` rounding noise, it survives
//! re-quantization and small transforms, at the cost of moving each touched
//! vertex by at most one step along X.
//!
//! Arithmetic is done in `f64`; the result is stored back as `f32`.

use crate::mesh::{Axis, SceneNode, VertexStream, VertexStreamMut};
use crate::stego::config::QimParams;

/// Coordinate carrying the QIM bit.
pub const QIM_AXIS: Axis = Axis::X;

/// Quantization index of a coordinate. Parity is taken with `rem_euclid`, so
/// negative indices follow the same even/odd convention as positive ones.
pub fn quantize_index(x: f32, params: &QimParams) -> i64 {
    (f64::from(x) / params.step()).round() as i64
}

/// Snap `x` onto the lattice of the given bit parity.
pub fn embed_coordinate(x: f32, bit: u8, params: &QimParams) -> f32 {
    debug_assert!(bit <= 1);
    let mut q = quantize_index(x, params);
    let parity = q.rem_euclid(2) as u8;
    if parity != bit {
        if bit == 0 {
            q -= 1;
        } else {
            q += 1;
        }
    }
    (q as f64 * params.step()) as f32
}

/// Read the bit carried by `x`.
pub fn extract_bit(x: f32, params: &QimParams) -> u8 {
    quantize_index(x, params).rem_euclid(2) as u8
}

/// Embed `bits` into the X coordinates of `scene`, in place.
///
/// Returns the number of bits actually written; excess bits are dropped.
pub fn qim_embed_in_place<N: SceneNode>(scene: &mut N, bits: &[u8], params: &QimParams) -> usize {
    let axis = QIM_AXIS.index();
    let written = VertexStreamMut::new(scene).modify_prefix(bits.len(), |i, vertex| {
        vertex[axis] = embed_coordinate(vertex[axis], bits[i], params);
    });
    log::trace!("qim: wrote {written}/{} bits (step {})", bits.len(), params.step());
    written
}

/// Embed `bits` into a deep copy of `scene`.
pub fn qim_embed<N: SceneNode>(scene: &N, bits: &[u8], params: &QimParams) -> N {
    let mut marked = scene.clone();
    qim_embed_in_place(&mut marked, bits, params);
    marked
}

/// Read up to `bit_count` bits. Returns fewer when the scene has fewer vertices.
pub fn qim_extract<N: SceneNode>(scene: &N, bit_count: usize, params: &QimParams) -> Vec<u8> {
    VertexStream::new(scene)
        .coordinates(QIM_AXIS)
        .take(bit_count)
        .map(|x| extract_bit(x, params))
        .collect()
}

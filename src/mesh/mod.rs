// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Scene contract consumed by the watermark codecs.
//!
//! The codecs never look at concrete node kinds. A node participates in the
//! vertex stream if and only if [`SceneNode::buffer`] returns a
//! [`VertexBuffer`]; everything else (groups, cameras, lights) is traversed for
//! its children and otherwise skipped.
//!
//! [`Node`] and [`Geometry`] are the in-memory implementation shipped with the
//! crate. Loaders for real formats (glTF, OBJ, ...) are expected to build a
//! `Node` tree or implement the two traits on their own types.

pub mod geometry;
pub mod node;
pub mod stream;

pub use geometry::{BoundingSphere, Geometry};
pub use node::Node;
pub use stream::{vertex_count, Axis, VertexStream, VertexStreamMut, TRAVERSAL_VERSION};

/// A flat, contiguous array of vertex positions grouped in `[x, y, z]` triples.
pub trait VertexBuffer {
    /// Position floats, three per vertex.
    fn positions(&self) -> &[f32];

    /// Mutable access to the position floats.
    fn positions_mut(&mut self) -> &mut [f32];

    /// Called once after the codec has written into this buffer.
    ///
    /// Implementations recompute cached bounding volumes and flag the buffer
    /// for re-upload.
    fn mark_modified(&mut self);

    /// Number of complete vertex triples.
    fn vertex_count(&self) -> usize {
        self.positions().len() / 3
    }
}

/// A node of a scene tree.
///
/// `Clone` must produce an independent deep copy (topology and buffers):
/// embedding always works on such a copy.
pub trait SceneNode: Clone {
    /// Buffer type exposed by drawable nodes.
    type Buffer: VertexBuffer;

    /// This node's vertex buffer, if it is drawable.
    fn buffer(&self) -> Option<&Self::Buffer>;

    /// Children in their original (stable) order.
    fn children(&self) -> &[Self];

    /// Split borrow of this node's buffer and its children.
    fn split_mut(&mut self) -> (Option<&mut Self::Buffer>, &mut [Self]);
}

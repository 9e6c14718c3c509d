// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Deterministic vertex enumeration.
//!
//! # Traversal contract (version 1)
//!
//! 1. Nodes are visited pre-order depth-first: a node before its children,
//!    children in index order.
//! 2. Each node that exposes a [`VertexBuffer`] contributes its vertices in
//!    buffer order; nodes without one contribute nothing.
//! 3. A trailing incomplete triple (buffer length not a multiple of 3) is not
//!    a vertex.
//!
//! Embedder and extractor must agree on this order and see the same topology,
//! otherwise the recovered bits are meaningless. Any change to the rules above
//! must bump [`TRAVERSAL_VERSION`].

use super::{SceneNode, VertexBuffer};

/// Version of the traversal contract implemented by this module.
pub const TRAVERSAL_VERSION: u8 = 1;

/// Coordinate axis within a vertex triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Offset of this axis inside an `[x, y, z]` triple.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

fn collect<'a, N: SceneNode>(node: &'a N, out: &mut Vec<&'a N::Buffer>) {
    if let Some(buffer) = node.buffer() {
        out.push(buffer);
    }
    for child in node.children() {
        collect(child, out);
    }
}

fn collect_mut<'a, N: SceneNode>(node: &'a mut N, out: &mut Vec<&'a mut N::Buffer>) {
    let (buffer, children) = node.split_mut();
    if let Some(buffer) = buffer {
        out.push(buffer);
    }
    for child in children {
        collect_mut(child, out);
    }
}

/// Read-only view of a scene's vertices in traversal order.
pub struct VertexStream<'a, B> {
    buffers: Vec<&'a B>,
}

impl<'a, B: VertexBuffer> VertexStream<'a, B> {
    pub fn new<N: SceneNode<Buffer = B>>(root: &'a N) -> Self {
        let mut buffers = Vec::new();
        collect(root, &mut buffers);
        Self { buffers }
    }

    /// Total vertex count, i.e. the capacity in bits of one codec pass.
    pub fn len(&self) -> usize {
        self.buffers.iter().map(|b| b.vertex_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of drawable buffers that were found.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// All vertices in stream order.
    pub fn vertices(&self) -> impl Iterator<Item = [f32; 3]> + 'a {
        let buffers = self.buffers.clone();
        buffers
            .into_iter()
            .flat_map(|b| b.positions().chunks_exact(3).map(|v| [v[0], v[1], v[2]]))
    }

    /// One coordinate of every vertex in stream order.
    pub fn coordinates(&self, axis: Axis) -> impl Iterator<Item = f32> + 'a {
        self.vertices().map(move |v| v[axis.index()])
    }
}

/// Mutable view of a scene's vertices in traversal order.
pub struct VertexStreamMut<'a, B> {
    buffers: Vec<&'a mut B>,
}

impl<'a, B: VertexBuffer> VertexStreamMut<'a, B> {
    pub fn new<N: SceneNode<Buffer = B>>(root: &'a mut N) -> Self {
        let mut buffers = Vec::new();
        collect_mut(root, &mut buffers);
        Self { buffers }
    }

    pub fn len(&self) -> usize {
        self.buffers.iter().map(|b| b.vertex_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call `f(stream_index, vertex)` for the first `count` vertices.
    ///
    /// Every buffer that had at least one vertex visited gets
    /// [`VertexBuffer::mark_modified`] afterwards; later buffers are left
    /// alone. Returns the number of vertices visited, which is less than
    /// `count` when the stream runs out.
    pub fn modify_prefix<F>(&mut self, count: usize, mut f: F) -> usize
    where
        F: FnMut(usize, &mut [f32]),
    {
        let mut cursor = 0;
        for buffer in self.buffers.iter_mut() {
            if cursor >= count {
                break;
            }
            let mut touched = false;
            for vertex in buffer.positions_mut().chunks_exact_mut(3) {
                if cursor >= count {
                    break;
                }
                f(cursor, vertex);
                cursor += 1;
                touched = true;
            }
            if touched {
                buffer.mark_modified();
            }
        }
        cursor
    }
}

/// Vertex count of the whole scene.
pub fn vertex_count<N: SceneNode>(root: &N) -> usize {
    VertexStream::new(root).len()
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Vertex-position geometry with a cached bounding sphere.

use glam::Vec3;

use super::VertexBuffer;

/// Bounding sphere of a vertex set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    /// Sphere centred on the axis-aligned bounding box of `positions`, with the
    /// radius reaching the farthest vertex.
    ///
    /// Returns `None` when there is no complete vertex.
    pub fn from_positions(positions: &[f32]) -> Option<Self> {
        let mut vertices = positions
            .chunks_exact(3)
            .map(|v| Vec3::new(v[0], v[1], v[2]));
        let first = vertices.next()?;
        let (min, max) = vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
        let center = (min + max) * 0.5;

        let radius_sq = positions
            .chunks_exact(3)
            .map(|v| center.distance_squared(Vec3::new(v[0], v[1], v[2])))
            .fold(0.0f32, f32::max);

        Some(Self { center, radius: radius_sq.sqrt() })
    }

    /// Whether `point` lies inside the sphere (with a small tolerance).
    pub fn contains(&self, point: Vec3) -> bool {
        point.distance(self.center) <= self.radius + 1e-5
    }
}

/// Triangle-soup or indexed geometry reduced to what the codecs need: the
/// position attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    positions: Vec<f32>,
    bounding_sphere: Option<BoundingSphere>,
    revision: u64,
}

impl Geometry {
    /// Build from a flat `[x0, y0, z0, x1, ...]` position array.
    pub fn from_positions(positions: Vec<f32>) -> Self {
        let bounding_sphere = BoundingSphere::from_positions(&positions);
        Self { positions, bounding_sphere, revision: 0 }
    }

    /// Build from a list of vertex triples.
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        Self::from_positions(vertices.iter().flatten().copied().collect())
    }

    /// The vertex at `index`, if it exists.
    pub fn vertex(&self, index: usize) -> Option<[f32; 3]> {
        let v = self.positions.get(index * 3..index * 3 + 3)?;
        Some([v[0], v[1], v[2]])
    }

    /// Cached bounding sphere, as of the last [`mark_modified`](VertexBuffer::mark_modified).
    pub fn bounding_sphere(&self) -> Option<BoundingSphere> {
        self.bounding_sphere
    }

    /// Incremented on every modification; renderers compare it to decide
    /// whether to re-upload the buffer.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl VertexBuffer for Geometry {
    fn positions(&self) -> &[f32] {
        &self.positions
    }

    fn positions_mut(&mut self) -> &mut [f32] {
        &mut self.positions
    }

    fn mark_modified(&mut self) {
        self.bounding_sphere = BoundingSphere::from_positions(&self.positions);
        self.revision += 1;
    }
}

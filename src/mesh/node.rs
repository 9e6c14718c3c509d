// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! In-memory scene tree.

use super::geometry::Geometry;
use super::SceneNode;

/// A scene node: a group when `geometry` is `None`, a drawable mesh otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub name: String,
    pub geometry: Option<Geometry>,
    pub children: Vec<Node>,
}

impl Node {
    /// A node without geometry.
    pub fn group(name: impl Into<String>) -> Self {
        Self { name: name.into(), geometry: None, children: Vec::new() }
    }

    /// A drawable node.
    pub fn mesh(name: impl Into<String>, geometry: Geometry) -> Self {
        Self { name: name.into(), geometry: Some(geometry), children: Vec::new() }
    }

    /// Append a child and return `self` (builder style).
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child.
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Pre-order search by name.
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Mutable pre-order search by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(name))
    }
}

impl SceneNode for Node {
    type Buffer = Geometry;

    fn buffer(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    fn children(&self) -> &[Node] {
        &self.children
    }

    fn split_mut(&mut self) -> (Option<&mut Geometry>, &mut [Node]) {
        (self.geometry.as_mut(), &mut self.children)
    }
}

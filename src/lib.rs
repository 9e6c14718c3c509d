// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # phasm-mesh
//!
//! Pure-Rust steganographic watermarking for 3D meshes. A short text is hidden
//! in the vertex coordinates of a scene and recovered later without the
//! unmarked original. Three embedding methods are provided:
//!
//! - **QIM** (robust): one bit per vertex in the parity of the quantized X
//!   coordinate. Survives small numeric perturbations.
//! - **Delta-Additive** (fragile): one bit per vertex as a ±D offset on Y.
//! - **Hybrid**: both at once; extraction prefers the QIM reading when it
//!   decodes to plausible text.
//!
//! Every message is sent with a SHA-256 suffix so extraction can report
//! whether the recovered text is intact ([`IntegrityStatus`]).
//!
//! The crate works on any scene tree implementing [`mesh::SceneNode`]; the
//! bundled [`Node`]/[`Geometry`] types cover the common case. Loading and
//! exporting model files is left to the caller.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use phasm_mesh::{embed, extract, CodecConfig, Geometry, IntegrityStatus, Node};
//!
//! let scene = Node::mesh("body", Geometry::from_positions(load_positions()));
//! let config = CodecConfig::default();
//! let marked = embed(&scene, "HELLO", &config).unwrap();
//! let found = extract(&marked, 5, &config);
//! assert_eq!(found.text, "HELLO");
//! assert_eq!(found.status, IntegrityStatus::Verified);
//! ```

pub mod mesh;
pub mod stego;

pub use mesh::{BoundingSphere, Geometry, Node, SceneNode, VertexBuffer, VertexStream};
pub use stego::{embed, embed_with_report, extract, extract_with_detector, EmbedReport, Extraction};
pub use stego::{embed_raw, extract_raw};
pub use stego::{CodecConfig, DeltaParams, Method, QimParams, StegoError};
pub use stego::{IntegrityStatus, PlausibilityCheck, PrintableRatio};
pub use stego::{DEFAULT_DELTA, DEFAULT_MESSAGE_LENGTH, DEFAULT_QIM_STEP};
pub use stego::capacity::{capacity_bits, max_message_len, required_vertices};

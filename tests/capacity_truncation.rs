// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Behaviour at and beyond the vertex-count capacity.

use phasm_mesh::stego::integrity::build_payload;
use phasm_mesh::{
    capacity_bits, embed, embed_with_report, extract, max_message_len, required_vertices, CodecConfig,
    Geometry, IntegrityStatus, Method, Node,
};

fn line_scene(n: usize) -> Node {
    let verts: Vec<[f32; 3]> = (0..n).map(|i| [i as f32 * 0.0173, 0.5, -0.25]).collect();
    Node::group("root").with_child(Node::mesh("line", Geometry::from_vertices(&verts)))
}

#[test]
fn truncated_payload_recovers_prefix_only() {
    let message = "a twenty char string";
    assert_eq!(message.len(), 20);
    let payload = build_payload(message);

    // 83 vertices: 10 whole characters plus 3 stray bits.
    let scene = line_scene(83);
    let config = CodecConfig::default();
    let (marked, report) = embed_with_report(&scene, message, &config).unwrap();
    assert!(report.is_truncated());
    assert_eq!(report.bits_requested, payload.len() * 8);
    assert_eq!(report.bits_embedded, 83);
    assert_eq!(report.chars_embedded(), 10);

    let found = extract(&marked, message.len(), &config);
    assert_eq!(found.text, &payload[..10]);
    assert_eq!(found.status, IntegrityStatus::Unknown);
}

#[test]
fn one_vertex_short_is_not_verified() {
    let message = "short";
    let scene = line_scene(required_vertices(message.len()) - 1);
    let config = CodecConfig::default();
    let marked = embed(&scene, message, &config).unwrap();
    let found = extract(&marked, message.len(), &config);
    // The last hash character lost a bit and is dropped: the hash no longer
    // matches.
    assert_eq!(found.text, message);
    assert_eq!(found.status, IntegrityStatus::Failed);
}

#[test]
fn capacity_helpers_match_scene() {
    let scene = line_scene(1000);
    assert_eq!(capacity_bits(&scene), 1000);
    assert_eq!(max_message_len(&scene), 125 - 72);
    let message = "x".repeat(max_message_len(&scene));
    let config = CodecConfig::default();
    let (marked, report) = embed_with_report(&scene, &message, &config).unwrap();
    assert!(!report.is_truncated());
    assert_eq!(extract(&marked, message.len(), &config).status, IntegrityStatus::Verified);
}

#[test]
fn too_long_expected_length_fails_gracefully() {
    let scene = line_scene(2000);
    let config = CodecConfig::default();
    let marked = embed(&scene, "HELLO", &config).unwrap();
    // Asking for more characters pulls unmarked vertices into the hash part.
    let found = extract(&marked, 6, &config);
    assert_ne!(found.status, IntegrityStatus::Verified);
    // Asking for fewer cuts the hash short.
    let found = extract(&marked, 4, &config);
    assert_ne!(found.status, IntegrityStatus::Verified);
}

#[test]
fn hybrid_truncates_both_passes_alike() {
    let scene = line_scene(40);
    let (marked, report) =
        embed_with_report(&scene, "overflow", &CodecConfig::new(Method::Hybrid)).unwrap();
    assert_eq!(report.bits_embedded, 40);
    let g = marked.children[0].geometry.as_ref().unwrap();
    for i in 0..40 {
        let y = g.vertex(i).unwrap()[1];
        assert!((f64::from(y) - 0.5).abs() > 0.0004, "vertex {i} missed the delta pass");
    }
}

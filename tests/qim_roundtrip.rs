// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Round-trip integration tests for QIM embed/extract with the integrity wrapper.

use phasm_mesh::stego::bits::text_to_bits;
use phasm_mesh::stego::integrity::build_payload;
use phasm_mesh::stego::qim::{extract_bit, quantize_index};
use phasm_mesh::{
    embed, embed_with_report, extract, required_vertices, CodecConfig, Geometry, IntegrityStatus,
    Method, Node, QimParams, VertexBuffer, VertexStream,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A scene of `n` vertices with coordinates in `[-range, range)`, spread over
/// nested groups and meshes of random sizes.
fn random_scene(rng: &mut ChaCha20Rng, n: usize, range: f32) -> Node {
    let mut root = Node::group("root");
    let mut remaining = n;
    let mut idx = 0;
    while remaining > 0 {
        let take = rng.gen_range(1..=remaining.min(300));
        let verts: Vec<[f32; 3]> = (0..take)
            .map(|_| {
                [
                    rng.gen_range(-range..range),
                    rng.gen_range(-range..range),
                    rng.gen_range(-range..range),
                ]
            })
            .collect();
        let mesh = Node::mesh(format!("mesh{idx}"), Geometry::from_vertices(&verts));
        if idx % 3 == 1 {
            root.push_child(Node::group(format!("group{idx}")).with_child(mesh));
        } else {
            root.push_child(mesh);
        }
        remaining -= take;
        idx += 1;
    }
    root
}

fn random_message(rng: &mut ChaCha20Rng, len: usize) -> String {
    (0..len).map(|_| char::from(rng.gen_range(0x20u8..=0xFF))).collect()
}

#[test]
fn hello_scenario() {
    init_logging();
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let scene = random_scene(&mut rng, 616, 1.0);
    let config = CodecConfig::default();

    assert_eq!(build_payload("HELLO").len(), 77);
    assert_eq!(required_vertices(5), 616);

    let marked = embed(&scene, "HELLO", &config).unwrap();
    let found = extract(&marked, 5, &config);
    assert_eq!(found.text, "HELLO");
    assert_eq!(found.status, IntegrityStatus::Verified);
    assert_eq!(found.source, Method::Qim);
}

#[test]
fn roundtrip_random_messages_and_scenes() {
    init_logging();
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    for len in [0usize, 1, 7, 20, 64, 150] {
        let message = random_message(&mut rng, len);
        let extra = rng.gen_range(0..500);
        let scene = random_scene(&mut rng, required_vertices(len) + extra, 50.0);
        let config = CodecConfig::default();

        let (marked, report) = embed_with_report(&scene, &message, &config).unwrap();
        assert!(!report.is_truncated(), "len {len}");

        let found = extract(&marked, len, &config);
        assert_eq!(found.status, IntegrityStatus::Verified, "len {len}");
        assert_eq!(found.text, message, "len {len}");
    }
}

#[test]
fn roundtrip_exact_capacity() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let message = "exactly enough vertices";
    let scene = random_scene(&mut rng, required_vertices(message.len()), 3.0);
    let config = CodecConfig::default();
    let marked = embed(&scene, message, &config).unwrap();
    let found = extract(&marked, message.len(), &config);
    assert_eq!(found.text, message);
    assert_eq!(found.status, IntegrityStatus::Verified);
}

#[test]
fn roundtrip_with_custom_step() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let scene = random_scene(&mut rng, 2000, 10.0);
    for step in [0.0001, 0.01, 0.25] {
        let config = CodecConfig::default().with_qim_step(step).unwrap();
        let marked = embed(&scene, "profile", &config).unwrap();
        let found = extract(&marked, 7, &config);
        assert_eq!(found.text, "profile", "step {step}");
        assert_eq!(found.status, IntegrityStatus::Verified, "step {step}");
    }
}

#[test]
fn parity_matches_payload_bits() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let scene = random_scene(&mut rng, 1500, 20.0);
    let config = CodecConfig::default();
    let params = QimParams::default();
    let message = "parity";
    let marked = embed(&scene, message, &config).unwrap();

    let bits = text_to_bits(&build_payload(message)).unwrap();
    let stream = VertexStream::new(&marked);
    let xs: Vec<f32> = stream.vertices().map(|v| v[0]).collect();
    for (i, &bit) in bits.iter().enumerate() {
        assert_eq!(quantize_index(xs[i], &params).rem_euclid(2) as u8, bit, "vertex {i}");
        assert_eq!(extract_bit(xs[i], &params), bit);
    }
}

#[test]
fn distortion_bounded_and_tail_untouched() {
    let mut rng = ChaCha20Rng::seed_from_u64(21);
    let scene = random_scene(&mut rng, 1200, 5.0);
    let config = CodecConfig::default();
    let marked = embed(&scene, "bounded", &config).unwrap();
    let touched = required_vertices(7);

    let before: Vec<[f32; 3]> = VertexStream::new(&scene).vertices().collect();
    let after: Vec<[f32; 3]> = VertexStream::new(&marked).vertices().collect();
    assert_eq!(before.len(), after.len());
    for (i, (b, a)) in before.iter().zip(&after).enumerate() {
        if i < touched {
            assert!((f64::from(a[0]) - f64::from(b[0])).abs() <= 0.0015 + 1e-6, "vertex {i}");
            assert_eq!(a[1], b[1]);
            assert_eq!(a[2], b[2]);
        } else {
            assert_eq!(a, b, "vertex {i} beyond the payload was modified");
        }
    }
}

#[test]
fn caller_scene_is_not_mutated() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let scene = random_scene(&mut rng, 800, 1.0);
    let snapshot = scene.clone();
    for method in Method::ALL {
        let _ = embed(&scene, "x", &CodecConfig::new(method)).unwrap();
    }
    assert_eq!(scene, snapshot);
}

#[test]
fn modified_geometries_refresh_bounds() {
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let scene = random_scene(&mut rng, 2000, 1.0);
    let marked = embed(&scene, "bounds", &CodecConfig::default()).unwrap();
    let mut stack = vec![&marked];
    while let Some(node) = stack.pop() {
        if let Some(g) = &node.geometry {
            let sphere = g.bounding_sphere().unwrap();
            for i in 0..g.vertex_count() {
                let v = g.vertex(i).unwrap();
                assert!(sphere.contains(glam::Vec3::from(v)), "{} vertex {i}", node.name);
            }
        }
        stack.extend(node.children.iter());
    }
}

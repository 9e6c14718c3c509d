// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Example: watermark a procedural UV sphere and read the mark back.
//!
//! Usage: `watermark_sphere <message> [qim|delta|hybrid]`

use phasm_mesh::{
    embed_with_report, extract, max_message_len, CodecConfig, Geometry, Method, Node,
};

fn uv_sphere(rings: usize, segments: usize, radius: f32) -> Geometry {
    let mut verts = Vec::with_capacity((rings + 1) * segments);
    for r in 0..=rings {
        let theta = std::f32::consts::PI * r as f32 / rings as f32;
        for s in 0..segments {
            let phi = std::f32::consts::TAU * s as f32 / segments as f32;
            verts.push([
                radius * theta.sin() * phi.cos(),
                radius * theta.cos(),
                radius * theta.sin() * phi.sin(),
            ]);
        }
    }
    Geometry::from_vertices(&verts)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: watermark_sphere <message> [qim|delta|hybrid]");
        std::process::exit(1);
    }
    let message = &args[1];
    let method: Method = match args.get(2).map(|m| m.parse()).transpose() {
        Ok(m) => m.unwrap_or_default(),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let scene = Node::group("scene")
        .with_child(Node::mesh("globe", uv_sphere(48, 64, 1.0)))
        .with_child(Node::group("moons").with_child(Node::mesh("moon", uv_sphere(16, 24, 0.25))));
    println!("Capacity: {} characters", max_message_len(&scene));

    let config = CodecConfig::new(method);
    let (marked, report) = match embed_with_report(&scene, message, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Embed failed: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "Embedded {}/{} bits with {method}{}",
        report.bits_embedded,
        report.bits_requested,
        if report.is_truncated() { " (truncated)" } else { "" }
    );

    let found = extract(&marked, message.chars().count(), &config);
    println!("Extracted ({} via {}): {:?}", found.status, found.source, found.text);
}

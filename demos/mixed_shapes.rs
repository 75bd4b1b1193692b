//! Random shape picking from a geometry set
//!
//! Builds a buffer where each particle is one of the four polyhedra, then
//! tallies how often each shape was picked by reading the particle_id runs.
//! Run with: cargo run --example mixed_shapes

use pmesh::prelude::*;

fn main() -> Result<(), BuildError> {
    env_logger::init();

    let count = 10_000;
    let buffer = ParticleMesh::new()
        .with_count(count)
        .with_geometry(vec![
            ParticleGeometry::tetrahedron(),
            ParticleGeometry::octahedron(),
            ParticleGeometry::icosahedron(),
            ParticleGeometry::dodecahedron(),
        ])
        .with_seed(7)
        .build()?;

    // Recover each particle's vertex count from its id run length
    let mut runs: Vec<usize> = Vec::new();
    let mut last_id = -1.0f32;
    for &id in &buffer.particle_id {
        if id != last_id {
            runs.push(0);
            last_id = id;
        }
        if let Some(len) = runs.last_mut() {
            *len += 1;
        }
    }

    let mut tallies = [(4usize, 0u32), (6, 0), (12, 0), (20, 0)];
    for run in runs {
        for (vertices, tally) in tallies.iter_mut() {
            if *vertices == run {
                *tally += 1;
            }
        }
    }

    println!("{} particles, {} vertices total", count, buffer.total_vertex_count());
    for (vertices, tally) in tallies {
        println!(
            "{:>2}-vertex shape: {:>5} particles ({:.1}%)",
            vertices,
            tally,
            tally as f32 / count as f32 * 100.0
        );
    }

    Ok(())
}

//! Merge a thousand icosahedra into one indexed buffer
//!
//! Prints the resulting array sizes and the upload-ready byte counts.
//! Run with: cargo run --example merged_mesh

use pmesh::prelude::*;

fn main() -> Result<(), BuildError> {
    env_logger::init();

    let buffer = ParticleMesh::new()
        .with_count(1_000)
        .with_geometry(ParticleGeometry::icosahedron())
        .with_seed(42)
        .build()?;

    println!("particles:      {}", buffer.particle_count());
    println!("vertices:       {}", buffer.total_vertex_count());
    println!("indices:        {}", buffer.total_index_count());
    println!("position bytes: {}", buffer.position_bytes().len());
    println!("index bytes:    {}", buffer.index_bytes().len());
    println!("id bytes:       {}", buffer.particle_id_bytes().len());
    println!("seed bytes:     {}", buffer.seed_bytes().len());
    println!(
        "first seed:     [{:.3}, {:.3}, {:.3}]",
        buffer.seed[0], buffer.seed[1], buffer.seed[2]
    );

    Ok(())
}

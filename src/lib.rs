//! # PMESH - Particle Mesh Buffers
//!
//! Merge per-particle geometry into one indexed buffer for GPU particle systems.
//!
//! Drawing thousands of small meshes one draw call at a time is slow. PMESH
//! concatenates every particle's geometry into a single set of indexed vertex
//! arrays and annotates each vertex with its particle's ordinal and a
//! per-particle random seed, so one indexed draw renders the whole system
//! while the vertex shader can still animate each particle individually.
//!
//! ## Quick Start
//!
//! ```
//! use pmesh::prelude::*;
//!
//! let buffer = ParticleMesh::new()
//!     .with_count(5)
//!     .with_geometry(ParticleGeometry::octahedron())
//!     .with_seed(1)
//!     .build()?;
//!
//! assert_eq!(buffer.particle_count(), 5);
//! assert_eq!(buffer.total_vertex_count(), 30); // 5 * 6 vertices
//! assert_eq!(buffer.total_index_count(), 120); // 5 * 8 triangles * 3
//! # Ok::<(), pmesh::BuildError>(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Geometry
//!
//! A [`ParticleGeometry`] is one particle's local mesh: flat `f32` positions
//! and flat `u32` triangle indices. Build your own or use a canonical shape:
//!
//! | Shape | Vertices | Triangles |
//! |-------|----------|-----------|
//! | [`ParticleGeometry::fanned_circle`]`(n)` | n | n - 2 |
//! | [`ParticleGeometry::tetrahedron`] | 4 | 4 |
//! | [`ParticleGeometry::octahedron`] | 6 | 8 |
//! | [`ParticleGeometry::icosahedron`] | 12 | 20 |
//! | [`ParticleGeometry::dodecahedron`] | 20 | 36 |
//!
//! ### Sources
//!
//! A [`GeometrySource`] decides what each particle gets:
//!
//! ```ignore
//! // Fixed: every particle shares one geometry
//! .with_geometry(ParticleGeometry::icosahedron())
//!
//! // Set: each particle picks one member uniformly at random
//! .with_geometry(vec![
//!     ParticleGeometry::tetrahedron(),
//!     ParticleGeometry::octahedron(),
//! ])
//!
//! // Generator: a closure invoked once per particle
//! .with_generator(|| ParticleGeometry::fanned_circle(8))
//! ```
//!
//! ### The Merged Buffer
//!
//! [`ParticleBuffer`] holds four flat arrays describing the same vertices:
//!
//! - `position` - (x, y, z) per vertex
//! - `index` - triangle indices, rebased across the whole buffer
//! - `particle_id` - owning particle's ordinal per vertex, as `f32`
//! - `seed` - per-particle random triple in `[0, 1)`, repeated per vertex
//!
//! Byte views ([`ParticleBuffer::position_bytes`] and friends) feed GPU
//! uploads directly, and [`layout`] provides the matching
//! `wgpu::VertexBufferLayout`s.
//!
//! ## Reproducibility
//!
//! Set picking and seed triples come from a single random number generator.
//! Give the builder a seed with [`ParticleMesh::with_seed`] (or pass your own
//! generator to [`build_particle_buffer`]) and the output is identical from
//! run to run.

mod buffer;
mod builder;
mod error;
mod geometry;
pub mod layout;
mod source;

pub use buffer::ParticleBuffer;
pub use builder::{build_particle_buffer, ParticleMesh, DEFAULT_PARTICLE_COUNT};
pub use bytemuck;
pub use error::BuildError;
pub use geometry::ParticleGeometry;
pub use glam::Vec3;
pub use source::GeometrySource;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use pmesh::prelude::*;
/// ```
///
/// This imports:
/// - [`ParticleMesh`] - the merged buffer builder
/// - [`ParticleGeometry`] - per-particle mesh with canonical shape constructors
/// - [`GeometrySource`] - fixed, set, or generator geometry supply
/// - [`ParticleBuffer`] - the merged output
/// - [`BuildError`] - build failure cases
/// - [`build_particle_buffer`] - the core routine, for callers with their own RNG
/// - [`Vec3`] - glam vector type used for vertex construction
pub mod prelude {
    pub use crate::buffer::ParticleBuffer;
    pub use crate::builder::{build_particle_buffer, ParticleMesh};
    pub use crate::error::BuildError;
    pub use crate::geometry::ParticleGeometry;
    pub use crate::source::GeometrySource;
    pub use crate::Vec3;
}

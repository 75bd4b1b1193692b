//! Merged-buffer construction.
//!
//! [`ParticleMesh`] is the configurable entry point; it drives
//! [`build_particle_buffer`], which does the actual merging. Each particle's
//! geometry is validated and then appended to the output arrays, with its
//! indices rebased past the vertices of earlier particles and every vertex
//! annotated with the particle's ordinal and seed triple.
//!
//! # Example
//!
//! ```ignore
//! let buffer = ParticleMesh::new()
//!     .with_count(500)
//!     .with_geometry(vec![
//!         ParticleGeometry::tetrahedron(),
//!         ParticleGeometry::octahedron(),
//!     ])
//!     .with_seed(42)
//!     .build()?;
//! ```

use crate::buffer::ParticleBuffer;
use crate::error::BuildError;
use crate::geometry::ParticleGeometry;
use crate::source::GeometrySource;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Number of particles a [`ParticleMesh`] builds when none is configured.
pub const DEFAULT_PARTICLE_COUNT: u32 = 1000;

/// Merge one geometry per particle into a single buffer.
///
/// Asks `source` for a geometry `particle_count` times. Each geometry's
/// indices are checked against its own vertex count before it is appended;
/// a bad index fails the whole build with the particle's ordinal and the
/// offending value, and nothing partial is returned.
///
/// A `particle_count` of zero yields an empty buffer. A
/// [`GeometrySource::Set`] with no members fails with
/// [`BuildError::EmptyGeometrySet`] before any particle is processed.
pub fn build_particle_buffer<R: Rng>(
    particle_count: u32,
    source: &mut GeometrySource,
    rng: &mut R,
) -> Result<ParticleBuffer, BuildError> {
    if let GeometrySource::Set(set) = source {
        if set.is_empty() {
            return Err(BuildError::EmptyGeometrySet);
        }
    }

    let mut buffer = ParticleBuffer::new(particle_count);
    let mut vertex_offset: u32 = 0;

    for ordinal in 0..particle_count {
        let geometry = source.next(rng);

        if let Some(index) = geometry.first_invalid_index() {
            return Err(BuildError::IndexOutOfRange {
                particle: ordinal,
                index,
                vertex_count: geometry.vertex_count(),
            });
        }

        let vertex_count = geometry.vertex_count() as u32;
        let seed = [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()];

        buffer.position.extend_from_slice(&geometry.vertices);
        buffer
            .index
            .extend(geometry.indices.iter().map(|&i| i + vertex_offset));
        for _ in 0..vertex_count {
            buffer.particle_id.push(ordinal as f32);
            buffer.seed.extend_from_slice(&seed);
        }

        vertex_offset += vertex_count;
    }

    log::debug!(
        "built particle buffer: {} particles, {} vertices, {} indices",
        particle_count,
        buffer.total_vertex_count(),
        buffer.total_index_count()
    );

    Ok(buffer)
}

/// A merged particle mesh builder.
///
/// Use method chaining to configure, then call `.build()` to produce the
/// [`ParticleBuffer`].
pub struct ParticleMesh {
    count: u32,
    source: Option<GeometrySource>,
    rng_seed: Option<u64>,
}

impl ParticleMesh {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            source: None,
            rng_seed: None,
        }
    }

    /// Set the number of particles.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the geometry source.
    ///
    /// Accepts a single [`ParticleGeometry`] (every particle shares it) or a
    /// `Vec<ParticleGeometry>` (each particle picks one member at random).
    pub fn with_geometry(mut self, source: impl Into<GeometrySource>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set a generator closure, called once per particle.
    pub fn with_generator<F>(mut self, generator: F) -> Self
    where
        F: FnMut() -> ParticleGeometry + Send + 'static,
    {
        self.source = Some(GeometrySource::generator(generator));
        self
    }

    /// Seed the random number generator for reproducible output.
    ///
    /// Two builds with the same configuration and seed produce identical
    /// buffers. Without a seed, each build draws fresh entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Build the merged buffer.
    pub fn build(mut self) -> Result<ParticleBuffer, BuildError> {
        let mut source = self.source.take().ok_or(BuildError::NoGeometry)?;
        let mut rng = match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        build_particle_buffer(self.count, &mut source, &mut rng)
    }
}

impl Default for ParticleMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_geometry() {
        let result = ParticleMesh::new().with_count(10).build();
        assert_eq!(result.unwrap_err(), BuildError::NoGeometry);
    }

    #[test]
    fn test_default_count() {
        let buffer = ParticleMesh::new()
            .with_geometry(ParticleGeometry::tetrahedron())
            .build()
            .unwrap();
        assert_eq!(buffer.particle_count(), DEFAULT_PARTICLE_COUNT);
    }

    #[test]
    fn test_zero_count_builds_empty_buffer() {
        let buffer = ParticleMesh::new()
            .with_count(0)
            .with_geometry(ParticleGeometry::octahedron())
            .build()
            .unwrap();

        assert!(buffer.is_empty());
        assert_eq!(buffer.particle_count(), 0);
        assert_eq!(buffer.total_index_count(), 0);
    }

    #[test]
    fn test_empty_set_is_rejected() {
        let result = ParticleMesh::new()
            .with_count(10)
            .with_geometry(Vec::new())
            .build();
        assert_eq!(result.unwrap_err(), BuildError::EmptyGeometrySet);
    }

    #[test]
    fn test_same_seed_same_buffer() {
        let shapes = || {
            vec![
                ParticleGeometry::tetrahedron(),
                ParticleGeometry::icosahedron(),
            ]
        };
        let a = ParticleMesh::new()
            .with_count(64)
            .with_geometry(shapes())
            .with_seed(7)
            .build()
            .unwrap();
        let b = ParticleMesh::new()
            .with_count(64)
            .with_geometry(shapes())
            .with_seed(7)
            .build()
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_index_names_particle_and_index() {
        // Second particle's geometry references a vertex it does not have
        let mut remaining = 2u32;
        let result = ParticleMesh::new()
            .with_count(2)
            .with_generator(move || {
                remaining -= 1;
                if remaining == 0 {
                    ParticleGeometry::new(vec![0.0; 9], vec![0, 1, 5])
                } else {
                    ParticleGeometry::tetrahedron()
                }
            })
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::IndexOutOfRange {
                particle: 1,
                index: 5,
                vertex_count: 3,
            }
        );
    }
}

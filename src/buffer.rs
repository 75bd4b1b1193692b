//! The merged particle buffer produced by the builder.
//!
//! All per-particle geometries are concatenated into one set of flat arrays,
//! ready for upload: positions, rebased triangle indices, and two per-vertex
//! annotation streams (particle id and seed) that let a shader tell particles
//! apart and vary them without any per-particle uniforms.

use std::fmt;

/// Merged geometry and per-vertex annotations for a whole particle system.
///
/// The four arrays describe the same vertices: `position` and `seed` hold one
/// (x, y, z) triple per vertex, `particle_id` one value per vertex, and
/// `index` addresses vertices across the whole merged buffer. See
/// [`layout`](crate::layout) for the matching GPU vertex layouts.
#[derive(Clone, PartialEq)]
pub struct ParticleBuffer {
    /// Vertex positions, consecutive (x, y, z) triples.
    pub position: Vec<f32>,
    /// Triangle indices into the merged vertex arrays, three per triangle.
    pub index: Vec<u32>,
    /// Ordinal of the owning particle, one value per vertex.
    ///
    /// Stored as `f32` so it can feed a vertex attribute directly; the value
    /// is a whole number and constant across a particle's vertices.
    pub particle_id: Vec<f32>,
    /// Per-particle random triple in `[0, 1)`, repeated for each of the
    /// particle's vertices.
    pub seed: Vec<f32>,
    particle_count: u32,
}

impl ParticleBuffer {
    /// Create an empty buffer that will hold `particle_count` particles.
    pub(crate) fn new(particle_count: u32) -> Self {
        Self {
            position: Vec::new(),
            index: Vec::new(),
            particle_id: Vec::new(),
            seed: Vec::new(),
            particle_count,
        }
    }

    /// Number of particles merged into this buffer.
    #[inline]
    pub fn particle_count(&self) -> u32 {
        self.particle_count
    }

    /// Total number of vertices across all particles.
    #[inline]
    pub fn total_vertex_count(&self) -> usize {
        self.position.len() / 3
    }

    /// Total number of indices across all particles.
    #[inline]
    pub fn total_index_count(&self) -> usize {
        self.index.len()
    }

    /// Whether the buffer holds no vertices at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    // ========== Byte views for GPU upload ==========

    /// Position data as raw bytes.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.position)
    }

    /// Index data as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.index)
    }

    /// Particle id data as raw bytes.
    pub fn particle_id_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particle_id)
    }

    /// Seed data as raw bytes.
    pub fn seed_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.seed)
    }
}

impl fmt::Debug for ParticleBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParticleBuffer")
            .field("particle_count", &self.particle_count)
            .field("vertices", &self.total_vertex_count())
            .field("indices", &self.total_index_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangle_buffer() -> ParticleBuffer {
        let mut buffer = ParticleBuffer::new(2);
        buffer.position = vec![
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0,
        ];
        buffer.index = vec![0, 1, 2, 3, 4, 5];
        buffer.particle_id = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        buffer.seed = vec![0.25; 18];
        buffer
    }

    #[test]
    fn test_counts() {
        let buffer = two_triangle_buffer();
        assert_eq!(buffer.particle_count(), 2);
        assert_eq!(buffer.total_vertex_count(), 6);
        assert_eq!(buffer.total_index_count(), 6);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = ParticleBuffer::new(0);
        assert_eq!(buffer.particle_count(), 0);
        assert_eq!(buffer.total_vertex_count(), 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_byte_view_lengths() {
        let buffer = two_triangle_buffer();
        assert_eq!(buffer.position_bytes().len(), buffer.position.len() * 4);
        assert_eq!(buffer.index_bytes().len(), buffer.index.len() * 4);
        assert_eq!(buffer.particle_id_bytes().len(), buffer.particle_id.len() * 4);
        assert_eq!(buffer.seed_bytes().len(), buffer.seed.len() * 4);
    }

    #[test]
    fn test_byte_views_preserve_values() {
        let buffer = two_triangle_buffer();
        let indices: &[u32] = bytemuck::cast_slice(buffer.index_bytes());
        assert_eq!(indices, &buffer.index[..]);
    }
}

//! GPU vertex layouts for the merged buffer's attribute arrays.
//!
//! [`ParticleBuffer`](crate::ParticleBuffer) keeps each attribute in its own
//! tightly packed array, so each one binds as a separate vertex buffer slot.
//! The layouts here describe those arrays: position at shader location 0,
//! particle id at location 1, seed at location 2, and a `u32` index buffer.
//!
//! # Example
//!
//! ```ignore
//! let buffer = ParticleMesh::new()
//!     .with_count(1024)
//!     .with_geometry(ParticleGeometry::octahedron())
//!     .build()?;
//!
//! // At pipeline creation
//! wgpu::VertexState {
//!     buffers: &layout::vertex_buffer_layouts(),
//!     ..
//! }
//!
//! // At draw time
//! render_pass.set_vertex_buffer(0, position_buffer.slice(..));
//! render_pass.set_vertex_buffer(1, particle_id_buffer.slice(..));
//! render_pass.set_vertex_buffer(2, seed_buffer.slice(..));
//! render_pass.set_index_buffer(index_buffer.slice(..), layout::INDEX_FORMAT);
//! render_pass.draw_indexed(0..buffer.total_index_count() as u32, 0, 0..1);
//! ```

/// Index format of [`ParticleBuffer::index`](crate::ParticleBuffer::index).
pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

/// Position attribute, location 0.
pub const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    offset: 0,
    shader_location: 0,
    format: wgpu::VertexFormat::Float32x3,
}];

/// Particle id attribute, location 1.
pub const PARTICLE_ID_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    offset: 0,
    shader_location: 1,
    format: wgpu::VertexFormat::Float32,
}];

/// Seed attribute, location 2.
pub const SEED_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    offset: 0,
    shader_location: 2,
    format: wgpu::VertexFormat::Float32x3,
}];

/// Layout of [`ParticleBuffer::position`](crate::ParticleBuffer::position).
pub fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRIBUTES,
    }
}

/// Layout of [`ParticleBuffer::particle_id`](crate::ParticleBuffer::particle_id).
pub fn particle_id_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<f32>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &PARTICLE_ID_ATTRIBUTES,
    }
}

/// Layout of [`ParticleBuffer::seed`](crate::ParticleBuffer::seed).
pub fn seed_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &SEED_ATTRIBUTES,
    }
}

/// All three layouts in slot order, ready for a `wgpu::VertexState`.
pub fn vertex_buffer_layouts() -> [wgpu::VertexBufferLayout<'static>; 3] {
    [position_layout(), particle_id_layout(), seed_layout()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides_match_packed_arrays() {
        assert_eq!(position_layout().array_stride, 12);
        assert_eq!(particle_id_layout().array_stride, 4);
        assert_eq!(seed_layout().array_stride, 12);
    }

    #[test]
    fn test_shader_locations_are_consecutive() {
        let layouts = vertex_buffer_layouts();
        for (slot, layout) in layouts.iter().enumerate() {
            assert_eq!(layout.attributes.len(), 1);
            assert_eq!(layout.attributes[0].shader_location, slot as u32);
            assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        }
    }

    #[test]
    fn test_index_format_is_u32() {
        assert_eq!(INDEX_FORMAT, wgpu::IndexFormat::Uint32);
    }
}

//! Particle geometry: the small mesh one particle contributes to the merged buffer.
//!
//! A [`ParticleGeometry`] is a plain (vertices, indices) pair. Vertices are a
//! flat `f32` array of consecutive (x, y, z) triples; indices are a flat `u32`
//! array where every consecutive triple is one triangle, each value addressing
//! a vertex of the same geometry.
//!
//! # Built-in Shapes
//!
//! Use the constructor methods for the canonical shapes:
//!
//! ```ignore
//! ParticleGeometry::fanned_circle(6) // flat circle fan, 6 rim vertices
//! ParticleGeometry::tetrahedron()    // 4 vertices, 4 faces
//! ParticleGeometry::octahedron()     // 6 vertices, 8 faces
//! ParticleGeometry::icosahedron()    // 12 vertices, 20 faces
//! ParticleGeometry::dodecahedron()   // 20 vertices, 36 triangles (12 pentagons)
//! ```
//!
//! The polyhedra use the raw combinatorial coordinates (golden-ratio values
//! for icosahedron and dodecahedron), deliberately not normalized to unit
//! length: shaders downstream rely on the exact values and ordering, so both
//! are part of the contract and stable across calls.
//!
//! # Custom Shapes
//!
//! Build custom geometry from raw arrays or incrementally:
//!
//! ```
//! use pmesh::{ParticleGeometry, Vec3};
//!
//! let mut quad = ParticleGeometry::with_capacity(4, 2);
//! quad.push_vertex(Vec3::new(-0.5, -0.5, 0.0));
//! quad.push_vertex(Vec3::new(0.5, -0.5, 0.0));
//! quad.push_vertex(Vec3::new(0.5, 0.5, 0.0));
//! quad.push_vertex(Vec3::new(-0.5, 0.5, 0.0));
//! quad.push_triangle(0, 1, 2);
//! quad.push_triangle(0, 2, 3);
//!
//! assert_eq!(quad.vertex_count(), 4);
//! assert_eq!(quad.triangle_count(), 2);
//! ```

use glam::Vec3;
use std::f32::consts::TAU;

/// One particle's local mesh before merging.
///
/// Every index must address a vertex of this same geometry; the merged-buffer
/// builder checks this per particle and reports the offender, so a bad
/// geometry never produces a corrupt index buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleGeometry {
    /// Flat vertex positions, consecutive (x, y, z) triples.
    pub vertices: Vec<f32>,
    /// Flat triangle indices into [`vertices`](Self::vertices), three per triangle.
    pub indices: Vec<u32>,
}

impl ParticleGeometry {
    /// Create a geometry from raw arrays.
    ///
    /// `vertices` length should be a multiple of 3 (one triple per vertex),
    /// `indices` length a multiple of 3 (one triple per triangle).
    pub fn new(vertices: Vec<f32>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Create an empty geometry with room for the given vertex and triangle counts.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices * 3),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Append one vertex position.
    pub fn push_vertex(&mut self, v: Vec3) {
        self.vertices.extend_from_slice(&[v.x, v.y, v.z]);
    }

    /// Append one triangle as three vertex indices.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Number of vertices (position triples).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles (index triples).
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether this geometry has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Find the first index that does not address a vertex of this geometry.
    ///
    /// Returns `None` when every index is in range.
    pub fn first_invalid_index(&self) -> Option<u32> {
        let vertex_count = self.vertex_count() as u32;
        self.indices.iter().copied().find(|&i| i >= vertex_count)
    }

    // ========== Canonical shapes ==========

    /// Flat circle fan in the XY plane.
    ///
    /// Produces `detail` vertices evenly spaced on the unit circle (vertex i
    /// at angle i * 2pi / detail, position `(sin, cos, 0)`) and `detail - 2`
    /// triangles fanning out from vertex 0, with no center vertex.
    ///
    /// `detail < 3` yields a degenerate geometry with no triangles; that is
    /// allowed, not an error.
    ///
    /// ```
    /// use pmesh::ParticleGeometry;
    ///
    /// assert_eq!(ParticleGeometry::fanned_circle(3).triangle_count(), 1);
    /// assert_eq!(ParticleGeometry::fanned_circle(6).triangle_count(), 4);
    /// ```
    pub fn fanned_circle(detail: u32) -> Self {
        let triangles = detail.saturating_sub(2);
        let mut geometry = Self::with_capacity(detail as usize, triangles as usize);

        for i in 0..detail {
            let angle = i as f32 / detail as f32 * TAU;
            geometry.push_vertex(Vec3::new(angle.sin(), angle.cos(), 0.0));
        }
        for i in 0..triangles {
            geometry.push_triangle(i + 2, i + 1, 0);
        }

        geometry
    }

    /// Regular tetrahedron (4 vertices, 4 triangular faces).
    pub fn tetrahedron() -> Self {
        let vertices = vec![
            1.0, 1.0, 1.0, //
            -1.0, -1.0, 1.0, //
            -1.0, 1.0, -1.0, //
            1.0, -1.0, -1.0,
        ];
        let indices = vec![
            2, 1, 0, //
            0, 3, 2, //
            1, 3, 0, //
            2, 3, 1,
        ];

        Self { vertices, indices }
    }

    /// Regular octahedron (6 vertices at the axis extremes, 8 triangular faces).
    pub fn octahedron() -> Self {
        let vertices = vec![
            1.0, 0.0, 0.0, //
            -1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, -1.0, 0.0, //
            0.0, 0.0, 1.0, //
            0.0, 0.0, -1.0,
        ];
        let indices = vec![
            0, 2, 4, //
            0, 4, 3, //
            0, 3, 5, //
            0, 5, 2, //
            1, 2, 5, //
            1, 5, 3, //
            1, 3, 4, //
            1, 4, 2,
        ];

        Self { vertices, indices }
    }

    /// Regular icosahedron (12 vertices, 20 triangular faces).
    pub fn icosahedron() -> Self {
        // Golden ratio
        let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;

        // 12 vertices
        let vertices = vec![
            -1.0, phi, 0.0, //
            1.0, phi, 0.0, //
            -1.0, -phi, 0.0, //
            1.0, -phi, 0.0, //
            0.0, -1.0, phi, //
            0.0, 1.0, phi, //
            0.0, -1.0, -phi, //
            0.0, 1.0, -phi, //
            phi, 0.0, -1.0, //
            phi, 0.0, 1.0, //
            -phi, 0.0, -1.0, //
            -phi, 0.0, 1.0,
        ];

        // 20 triangles
        let indices = vec![
            0, 11, 5, //
            0, 5, 1, //
            0, 1, 7, //
            0, 7, 10, //
            0, 10, 11, //
            1, 5, 9, //
            5, 11, 4, //
            11, 10, 2, //
            10, 7, 6, //
            7, 1, 8, //
            3, 9, 4, //
            3, 4, 2, //
            3, 2, 6, //
            3, 6, 8, //
            3, 8, 9, //
            4, 9, 5, //
            2, 4, 11, //
            6, 2, 10, //
            8, 6, 7, //
            9, 8, 1,
        ];

        Self { vertices, indices }
    }

    /// Regular dodecahedron (20 vertices, 12 pentagonal faces as 36 triangles).
    pub fn dodecahedron() -> Self {
        // Golden ratio and its reciprocal
        let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let r = 1.0 / phi;

        // 20 vertices: cube corners plus three mutually orthogonal golden rectangles
        let vertices = vec![
            -1.0, -1.0, -1.0, //
            -1.0, -1.0, 1.0, //
            -1.0, 1.0, -1.0, //
            -1.0, 1.0, 1.0, //
            1.0, -1.0, -1.0, //
            1.0, -1.0, 1.0, //
            1.0, 1.0, -1.0, //
            1.0, 1.0, 1.0, //
            0.0, -r, -phi, //
            0.0, -r, phi, //
            0.0, r, -phi, //
            0.0, r, phi, //
            -r, -phi, 0.0, //
            -r, phi, 0.0, //
            r, -phi, 0.0, //
            r, phi, 0.0, //
            -phi, 0.0, -r, //
            phi, 0.0, -r, //
            -phi, 0.0, r, //
            phi, 0.0, r,
        ];

        // 12 pentagons, each fanned into 3 triangles
        let indices = vec![
            3, 11, 7, 3, 7, 15, 3, 15, 13, //
            7, 19, 17, 7, 17, 6, 7, 6, 15, //
            17, 4, 8, 17, 8, 10, 17, 10, 6, //
            8, 0, 16, 8, 16, 2, 8, 2, 10, //
            0, 12, 1, 0, 1, 18, 0, 18, 16, //
            6, 10, 2, 6, 2, 13, 6, 13, 15, //
            2, 16, 18, 2, 18, 3, 2, 3, 13, //
            18, 1, 9, 18, 9, 11, 18, 11, 3, //
            4, 14, 12, 4, 12, 0, 4, 0, 8, //
            11, 9, 5, 11, 5, 19, 11, 19, 7, //
            19, 5, 14, 19, 14, 4, 19, 4, 17, //
            1, 12, 14, 1, 14, 5, 1, 5, 9,
        ];

        Self { vertices, indices }
    }
}

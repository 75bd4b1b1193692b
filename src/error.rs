//! Error types for pmesh.
//!
//! Building a merged buffer can only fail in two ways: the builder was never
//! given a geometry source, or a supplied geometry is internally inconsistent.
//! Everything else is total.

use std::fmt;

/// Errors that can occur while building a merged particle buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No geometry source was configured.
    NoGeometry,
    /// A geometry set was provided but contains no geometries to pick from.
    EmptyGeometrySet,
    /// A geometry referenced a vertex it does not contain.
    ///
    /// Carries the ordinal of the particle being merged, the offending index
    /// value, and the vertex count of that particle's geometry.
    IndexOutOfRange {
        /// 0-based ordinal of the particle whose geometry failed validation.
        particle: u32,
        /// The index value that does not address a vertex.
        index: u32,
        /// Number of vertices the geometry actually has.
        vertex_count: usize,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::NoGeometry => {
                write!(f, "No particle geometry provided. Use .with_geometry() to set one.")
            }
            BuildError::EmptyGeometrySet => {
                write!(f, "Geometry set is empty. Provide at least one geometry to pick from.")
            }
            BuildError::IndexOutOfRange { particle, index, vertex_count } => {
                write!(
                    f,
                    "Particle {} references vertex index {} but its geometry has only {} vertices",
                    particle, index, vertex_count
                )
            }
        }
    }
}

impl std::error::Error for BuildError {}

//! Geometry sources: where each particle's mesh comes from.
//!
//! The builder asks its [`GeometrySource`] once per particle. A source is
//! either a single fixed geometry shared by all particles, a set the source
//! picks from uniformly at random, or a generator closure invoked once per
//! particle.
//!
//! # Example
//!
//! ```ignore
//! // Every particle is an octahedron
//! let fixed: GeometrySource = ParticleGeometry::octahedron().into();
//!
//! // Each particle picks one of two shapes at random
//! let set: GeometrySource = vec![
//!     ParticleGeometry::tetrahedron(),
//!     ParticleGeometry::icosahedron(),
//! ].into();
//!
//! // Each particle gets a fresh fan, growing in detail
//! let mut detail = 3;
//! let generated = GeometrySource::generator(move || {
//!     detail += 1;
//!     ParticleGeometry::fanned_circle(detail)
//! });
//! ```

use crate::geometry::ParticleGeometry;
use rand::Rng;
use std::borrow::Cow;
use std::fmt;

/// Supplies one geometry per particle to the merged-buffer builder.
pub enum GeometrySource {
    /// Every particle uses the same geometry.
    Fixed(ParticleGeometry),
    /// Each particle uses a geometry picked uniformly at random from the set.
    Set(Vec<ParticleGeometry>),
    /// Each particle uses a geometry produced by calling the closure.
    ///
    /// The closure may capture mutable state, so successive particles can
    /// receive different geometries.
    Generator(Box<dyn FnMut() -> ParticleGeometry + Send>),
}

impl GeometrySource {
    /// Create a source that calls `generator` once per particle.
    pub fn generator<F>(generator: F) -> Self
    where
        F: FnMut() -> ParticleGeometry + Send + 'static,
    {
        GeometrySource::Generator(Box::new(generator))
    }

    /// Produce the geometry for the next particle.
    ///
    /// `Set` must be non-empty; the builder rejects empty sets before the
    /// first call.
    pub(crate) fn next<R: Rng>(&mut self, rng: &mut R) -> Cow<'_, ParticleGeometry> {
        match self {
            GeometrySource::Fixed(geometry) => Cow::Borrowed(&*geometry),
            GeometrySource::Set(set) => {
                let pick = rng.gen_range(0..set.len());
                Cow::Borrowed(&set[pick])
            }
            GeometrySource::Generator(generator) => Cow::Owned(generator()),
        }
    }
}

impl From<ParticleGeometry> for GeometrySource {
    fn from(geometry: ParticleGeometry) -> Self {
        GeometrySource::Fixed(geometry)
    }
}

impl From<Vec<ParticleGeometry>> for GeometrySource {
    fn from(set: Vec<ParticleGeometry>) -> Self {
        GeometrySource::Set(set)
    }
}

impl fmt::Debug for GeometrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometrySource::Fixed(geometry) => f.debug_tuple("Fixed").field(geometry).finish(),
            GeometrySource::Set(set) => f.debug_tuple("Set").field(set).finish(),
            GeometrySource::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

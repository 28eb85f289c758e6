//! Vector algebra over f64 triples.
//!
//! `Vector` is glam's `DVec3`. Scale, add, subtract, dot and cross come
//! straight from glam; `VectorExt` adds the two operations whose edge-case
//! behavior the tracer depends on.

use glam::DVec3;

/// A point or direction in world space.
pub type Vector = DVec3;

/// Magnitude and normalization with the tracer's zero-vector rule.
pub trait VectorExt {
    /// Euclidean length, `sqrt(dot(v, v))`.
    fn mag(self) -> f64;

    /// Scale by `1 / mag`.
    ///
    /// A zero-magnitude vector is scaled by `+inf` instead of failing, so
    /// the result is non-finite (IEEE `0 * inf` is NaN).
    fn norm(self) -> Self;
}

impl VectorExt for DVec3 {
    #[inline]
    fn mag(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[inline]
    fn norm(self) -> Self {
        let mag = self.mag();
        let div = if mag == 0.0 { f64::INFINITY } else { 1.0 / mag };
        div * self
    }
}

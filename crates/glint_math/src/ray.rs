use crate::Vector;

/// A ray in 3D space with a start point and a direction.
///
/// `dir` is expected to be unit length wherever the tracer takes dot
/// products against it, but nothing enforces that.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub start: Vector,
    pub dir: Vector,
}

impl Ray {
    /// Create a new ray.
    pub fn new(start: Vector, dir: Vector) -> Self {
        Self { start, dir }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: t * dir + start
    #[inline]
    pub fn at(&self, t: f64) -> Vector {
        t * self.dir + self.start
    }
}

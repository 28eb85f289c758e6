//! Sphere and plane primitives.
//!
//! Every primitive answers two queries: where a ray first meets it
//! (`intersect`) and which way the surface faces at a point (`normal`).
//! The closed set of kinds lives in `Primitive`; adding a kind means adding
//! a variant.

use glint_math::{Ray, Vector, VectorExt};

use crate::Surface;

/// Result of a ray hitting a primitive.
///
/// Only lives for one traversal; it borrows the primitive it hit.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// The primitive that was hit
    pub thing: &'a Primitive,
    /// The ray that hit it
    pub ray: Ray,
    /// Parameter along `ray` where the hit occurs
    pub dist: f64,
}

/// A sphere stored by center and squared radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vector,
    pub radius2: f64,
    pub surface: Surface,
}

impl Sphere {
    pub fn new(center: Vector, radius: f64, surface: Surface) -> Self {
        Self {
            center,
            radius2: radius * radius,
            surface,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius2.sqrt()
    }

    /// Distance to the near root along `ray`, if any.
    ///
    /// Spheres whose center projects behind the ray start (`v < 0`) are
    /// skipped outright, even when the start lies inside the sphere. The
    /// near root may therefore be negative for a start inside the sphere
    /// facing its center. A distance of exactly 0 counts as a miss, which
    /// also keeps shadow rays from hitting the surface they leave.
    pub fn hit_distance(&self, ray: &Ray) -> Option<f64> {
        let eo = self.center - ray.start;
        let v = eo.dot(ray.dir);
        let mut dist = 0.0;
        if v >= 0.0 {
            let disc = self.radius2 - (eo.dot(eo) - v * v);
            if disc >= 0.0 {
                dist = v - disc.sqrt();
            }
        }
        if dist == 0.0 {
            None
        } else {
            Some(dist)
        }
    }

    pub fn normal(&self, pos: Vector) -> Vector {
        (pos - self.center).norm()
    }
}

/// A one-sided infinite plane: points `p` with `dot(normal, p) + offset == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal; the plane is visible only from this side
    pub normal: Vector,
    pub offset: f64,
    pub surface: Surface,
}

impl Plane {
    pub fn new(normal: Vector, offset: f64, surface: Surface) -> Self {
        Self {
            normal,
            offset,
            surface,
        }
    }

    /// Distance along `ray`, if any.
    ///
    /// Rays travelling along the normal (`denom > 0`) miss. A ray exactly
    /// parallel to the plane (`denom == 0`) is not rejected: the division
    /// yields an infinite (or NaN, for a ray lying in the plane) distance.
    pub fn hit_distance(&self, ray: &Ray) -> Option<f64> {
        let denom = self.normal.dot(ray.dir);
        if denom > 0.0 {
            None
        } else {
            Some((self.normal.dot(ray.start) + self.offset) / (-denom))
        }
    }

    pub fn normal(&self, _pos: Vector) -> Vector {
        self.normal
    }
}

/// Any renderable primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// Test a ray against this primitive.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let dist = match self {
            Primitive::Sphere(sphere) => sphere.hit_distance(ray),
            Primitive::Plane(plane) => plane.hit_distance(ray),
        }?;
        Some(Intersection {
            thing: self,
            ray: *ray,
            dist,
        })
    }

    /// Surface normal at a point on the primitive.
    pub fn normal(&self, pos: Vector) -> Vector {
        match self {
            Primitive::Sphere(sphere) => sphere.normal(pos),
            Primitive::Plane(plane) => plane.normal(pos),
        }
    }

    pub fn surface(&self) -> Surface {
        match self {
            Primitive::Sphere(sphere) => sphere.surface,
            Primitive::Plane(plane) => plane.surface,
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

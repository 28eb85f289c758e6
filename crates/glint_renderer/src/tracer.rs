//! Core whitted-style ray tracer.
//!
//! Implements recursive ray tracing with:
//! - Nearest-hit search by linear scan over all primitives
//! - Lambert diffuse and Phong-style specular from point lights
//! - Binary shadows (a light is either fully visible or fully blocked)
//! - Mirror reflection, bounded by `max_depth`

use glint_core::{Intersection, Primitive, Scene};
use glint_math::color::{BACKGROUND, BLACK, GREY};
use glint_math::{Color, Ray, Vector, VectorExt};

/// Reflection bounces traced before falling back to flat grey.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// The shading engine. Holds no per-render state, so one tracer can be
/// shared by every worker thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayTracer {
    max_depth: u32,
}

impl Default for RayTracer {
    fn default() -> Self {
        Self::new()
    }
}

impl RayTracer {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the reflection depth at which shading stops recursing.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Find the closest hit along `ray`.
    ///
    /// A later primitive replaces the current best only when strictly
    /// closer, so exact ties keep the first primitive in scene order.
    pub fn nearest_intersection<'a>(&self, ray: &Ray, scene: &'a Scene) -> Option<Intersection<'a>> {
        let mut closest = f64::INFINITY;
        let mut closest_inter = None;

        for thing in &scene.things {
            if let Some(inter) = thing.intersect(ray) {
                if inter.dist < closest {
                    closest = inter.dist;
                    closest_inter = Some(inter);
                }
            }
        }

        closest_inter
    }

    /// Distance to the nearest occluder along `ray`, if any.
    pub fn shadow_test(&self, ray: &Ray, scene: &Scene) -> Option<f64> {
        self.nearest_intersection(ray, scene).map(|inter| inter.dist)
    }

    /// Compute the color seen along `ray`.
    pub fn trace_ray(&self, ray: &Ray, scene: &Scene, depth: u32) -> Color {
        match self.nearest_intersection(ray, scene) {
            Some(isect) => self.shade(&isect, scene, depth),
            None => BACKGROUND,
        }
    }

    /// Color leaving a hit point: direct light plus reflection.
    ///
    /// At `max_depth` the reflection term is replaced by flat grey rather
    /// than traced, so at most `max_depth` bounces follow a primary ray.
    pub fn shade(&self, isect: &Intersection<'_>, scene: &Scene, depth: u32) -> Color {
        let dir = isect.ray.dir;
        let pos = isect.ray.at(isect.dist);
        let normal = isect.thing.normal(pos);
        let reflect_dir = dir - 2.0 * (normal.dot(dir) * normal);

        let natural = BACKGROUND + self.natural_color(isect.thing, pos, normal, reflect_dir, scene);
        let reflected = if depth >= self.max_depth {
            GREY
        } else {
            self.reflection_color(isect.thing, pos, reflect_dir, scene, depth)
        };
        natural + reflected
    }

    /// Light arriving along the mirror direction, weighted by the
    /// surface's reflectivity at `pos`.
    pub fn reflection_color(
        &self,
        thing: &Primitive,
        pos: Vector,
        reflect_dir: Vector,
        scene: &Scene,
        depth: u32,
    ) -> Color {
        let reflectivity = thing.surface().reflect(pos);
        reflectivity * self.trace_ray(&Ray::new(pos, reflect_dir), scene, depth + 1)
    }

    /// Direct illumination from every unoccluded light.
    pub fn natural_color(
        &self,
        thing: &Primitive,
        pos: Vector,
        normal: Vector,
        reflect_dir: Vector,
        scene: &Scene,
    ) -> Color {
        let surface = thing.surface();
        let mut color = BLACK;

        for light in &scene.lights {
            let ldis = light.pos - pos;
            let livec = ldis.norm();

            // Occluded if anything sits between the point and the light
            if let Some(dist) = self.shadow_test(&Ray::new(pos, livec), scene) {
                if dist <= ldis.mag() {
                    continue;
                }
            }

            let illum = livec.dot(normal);
            let lcolor = if illum > 0.0 {
                illum * light.color
            } else {
                BLACK
            };

            let specular = livec.dot(reflect_dir.norm());
            let scolor = if specular > 0.0 {
                specular.powf(surface.roughness()) * light.color
            } else {
                BLACK
            };

            color += surface.diffuse(pos) * lcolor + surface.specular(pos) * scolor;
        }

        color
    }
}

//! Scene aggregate and the built-in demo scene.
//!
//! A scene is constructed once and only read afterwards; the renderer
//! shares it across threads by reference.

use glint_math::{Color, Vector};

use crate::{Camera, Plane, Primitive, Sphere, Surface};

/// A point light. Intensity does not fall off with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub pos: Vector,
    pub color: Color,
}

impl Light {
    pub fn new(pos: Vector, color: Color) -> Self {
        Self { pos, color }
    }
}

/// Everything the tracer needs to render an image.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Primitives, tested in order
    pub things: Vec<Primitive>,
    pub lights: Vec<Light>,
    pub camera: Camera,
}

impl Scene {
    /// Create a scene. Empty primitive or light lists are legal; they just
    /// render as background or unlit geometry.
    pub fn new(things: Vec<Primitive>, lights: Vec<Light>, camera: Camera) -> Self {
        if things.is_empty() {
            log::warn!("Scene has no primitives; every pixel will be background");
        }
        if lights.is_empty() {
            log::warn!("Scene has no lights; only reflections will contribute");
        }
        log::debug!(
            "Scene created with {} primitives and {} lights",
            things.len(),
            lights.len()
        );
        Self {
            things,
            lights,
            camera,
        }
    }

    pub fn thing_count(&self) -> usize {
        self.things.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

/// Checkerboard floor, two shiny spheres and four colored lights.
pub fn default_scene() -> Scene {
    let things: Vec<Primitive> = vec![
        Plane::new(Vector::new(0.0, 1.0, 0.0), 0.0, Surface::Checkerboard).into(),
        Sphere::new(Vector::new(0.0, 1.0, -0.25), 1.0, Surface::Shiny).into(),
        Sphere::new(Vector::new(-1.0, 0.5, 1.5), 0.5, Surface::Shiny).into(),
    ];
    let lights = vec![
        Light::new(Vector::new(-2.0, 2.5, 0.0), Color::new(0.49, 0.07, 0.07)),
        Light::new(Vector::new(1.5, 2.5, 1.5), Color::new(0.07, 0.07, 0.49)),
        Light::new(Vector::new(1.5, 2.5, -1.5), Color::new(0.07, 0.49, 0.071)),
        Light::new(Vector::new(0.0, 3.5, 0.0), Color::new(0.21, 0.21, 0.35)),
    ];
    let camera = Camera::look_at(Vector::new(3.0, 2.0, 4.0), Vector::new(-1.0, 0.5, 0.0));

    Scene::new(things, lights, camera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_contents() {
        let scene = default_scene();
        assert_eq!(scene.thing_count(), 3);
        assert_eq!(scene.light_count(), 4);
        assert!(matches!(scene.things[0], Primitive::Plane(_)));
        assert!(matches!(scene.things[1], Primitive::Sphere(_)));
        assert_eq!(scene.camera.pos, Vector::new(3.0, 2.0, 4.0));
    }

    #[test]
    fn test_default_scene_is_deterministic() {
        assert_eq!(default_scene(), default_scene());
    }

    #[test]
    fn test_empty_scene_is_legal() {
        let camera = Camera::look_at(Vector::ZERO, Vector::NEG_Z);
        let scene = Scene::new(Vec::new(), Vec::new(), camera);
        assert_eq!(scene.thing_count(), 0);
        assert_eq!(scene.light_count(), 0);
    }
}

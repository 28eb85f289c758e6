//! glint core - scene model for the whitted-style ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere` and `Plane`, unified under `Primitive`
//! - **Surfaces**: the procedural `shiny` and `checkerboard` materials
//! - **Scene types**: `Scene`, `Light`, `Camera` and the built-in `default_scene`
//! - **Scene descriptions**: JSON loading with boundary validation
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{default_scene, load_scene};
//!
//! let scene = default_scene();
//! let custom = load_scene("scene.json")?;
//! println!("{} things, {} lights", custom.things.len(), custom.lights.len());
//! ```

pub mod camera;
pub mod description;
pub mod primitive;
pub mod scene;
pub mod surface;

// Re-export commonly used types
pub use camera::Camera;
pub use description::{load_scene, SceneDescription, SceneError, SceneResult};
pub use primitive::{Intersection, Plane, Primitive, Sphere};
pub use scene::{default_scene, Light, Scene};
pub use surface::Surface;

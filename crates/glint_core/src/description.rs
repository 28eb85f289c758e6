//! JSON scene descriptions.
//!
//! The tracer itself consumes an in-memory `Scene`; this module lets callers
//! supply one as a JSON document instead:
//!
//! ```json
//! {
//!   "things": [
//!     { "type": "plane", "normal": [0, 1, 0], "offset": 0, "surface": "checkerboard" },
//!     { "type": "sphere", "center": [0, 1, -0.25], "radius": 1, "surface": "shiny" }
//!   ],
//!   "lights": [ { "pos": [-2, 2.5, 0], "color": [0.49, 0.07, 0.07] } ],
//!   "camera": { "pos": [3, 2, 4], "look_at": [-1, 0.5, 0] }
//! }
//! ```
//!
//! Validation happens here, at the construction boundary. Once a `Scene`
//! exists the tracer never checks its numbers again.

use std::path::{Path, PathBuf};

use glint_math::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Camera, Light, Plane, Primitive, Scene, Sphere, Surface};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scene: {0}")]
    Invalid(String),
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

/// One primitive in a scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ThingDescription {
    Sphere {
        center: [f64; 3],
        radius: f64,
        surface: Surface,
    },
    Plane {
        normal: [f64; 3],
        offset: f64,
        surface: Surface,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub pos: [f64; 3],
    pub color: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    pub pos: [f64; 3],
    pub look_at: [f64; 3],
}

/// Serializable form of a `Scene`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub things: Vec<ThingDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
    pub camera: CameraDescription,
}

impl Default for SceneDescription {
    /// The description of `default_scene()`.
    fn default() -> Self {
        Self {
            things: vec![
                ThingDescription::Plane {
                    normal: [0.0, 1.0, 0.0],
                    offset: 0.0,
                    surface: Surface::Checkerboard,
                },
                ThingDescription::Sphere {
                    center: [0.0, 1.0, -0.25],
                    radius: 1.0,
                    surface: Surface::Shiny,
                },
                ThingDescription::Sphere {
                    center: [-1.0, 0.5, 1.5],
                    radius: 0.5,
                    surface: Surface::Shiny,
                },
            ],
            lights: vec![
                LightDescription { pos: [-2.0, 2.5, 0.0], color: [0.49, 0.07, 0.07] },
                LightDescription { pos: [1.5, 2.5, 1.5], color: [0.07, 0.07, 0.49] },
                LightDescription { pos: [1.5, 2.5, -1.5], color: [0.07, 0.49, 0.071] },
                LightDescription { pos: [0.0, 3.5, 0.0], color: [0.21, 0.21, 0.35] },
            ],
            camera: CameraDescription {
                pos: [3.0, 2.0, 4.0],
                look_at: [-1.0, 0.5, 0.0],
            },
        }
    }
}

impl SceneDescription {
    /// Parse a description from a JSON string.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the description and build a `Scene`.
    pub fn build(&self) -> SceneResult<Scene> {
        let mut things = Vec::with_capacity(self.things.len());
        for (index, thing) in self.things.iter().enumerate() {
            things.push(build_thing(index, thing)?);
        }

        let mut lights = Vec::with_capacity(self.lights.len());
        for (index, light) in self.lights.iter().enumerate() {
            let pos = finite_vector(&format!("lights[{index}].pos"), light.pos)?;
            let color = finite_vector(&format!("lights[{index}].color"), light.color)?;
            lights.push(Light::new(pos, color));
        }

        let pos = finite_vector("camera.pos", self.camera.pos)?;
        let look_at = finite_vector("camera.look_at", self.camera.look_at)?;
        if pos == look_at {
            return Err(SceneError::Invalid(
                "camera.pos and camera.look_at must differ".to_string(),
            ));
        }

        Ok(Scene::new(things, lights, Camera::look_at(pos, look_at)))
    }
}

fn build_thing(index: usize, thing: &ThingDescription) -> SceneResult<Primitive> {
    match *thing {
        ThingDescription::Sphere {
            center,
            radius,
            surface,
        } => {
            let center = finite_vector(&format!("things[{index}].center"), center)?;
            if !radius.is_finite() || radius < 0.0 {
                return Err(SceneError::Invalid(format!(
                    "things[{index}].radius must be finite and non-negative, got {radius}"
                )));
            }
            Ok(Sphere::new(center, radius, surface).into())
        }
        ThingDescription::Plane {
            normal,
            offset,
            surface,
        } => {
            let normal = finite_vector(&format!("things[{index}].normal"), normal)?;
            if normal == Vector::ZERO {
                return Err(SceneError::Invalid(format!(
                    "things[{index}].normal must not be zero"
                )));
            }
            if !offset.is_finite() {
                return Err(SceneError::Invalid(format!(
                    "things[{index}].offset must be finite, got {offset}"
                )));
            }
            // Taken as given: the tracer assumes a unit normal but does not
            // renormalize, so a long normal changes the plane's offset scale.
            if (normal.length() - 1.0).abs() > 1e-6 {
                log::warn!("things[{index}].normal is not unit length");
            }
            Ok(Plane::new(normal, offset, surface).into())
        }
    }
}

fn finite_vector(field: &str, v: [f64; 3]) -> SceneResult<Vector> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(Vector::from_array(v))
    } else {
        Err(SceneError::Invalid(format!(
            "{field} must be finite, got {v:?}"
        )))
    }
}

/// Load and build a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let description = SceneDescription::from_json(&json)?;
    log::info!(
        "Loaded scene {} ({} things, {} lights)",
        path.display(),
        description.things.len(),
        description.lights.len()
    );
    description.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_scene;

    #[test]
    fn test_default_description_builds_default_scene() {
        let scene = SceneDescription::default().build().unwrap();
        assert_eq!(scene, default_scene());
    }

    #[test]
    fn test_json_round_trip_of_default_description() {
        let description = SceneDescription::default();
        let json = description.to_json().unwrap();
        let parsed = SceneDescription::from_json(&json).unwrap();
        assert_eq!(parsed, description);
    }

    #[test]
    fn test_parse_minimal_json() {
        let json = r#"{
            "things": [
                { "type": "sphere", "center": [0, 0, -3], "radius": 1, "surface": "shiny" }
            ],
            "camera": { "pos": [0, 0, 0], "look_at": [0, 0, -1] }
        }"#;
        let scene = SceneDescription::from_json(json).unwrap().build().unwrap();
        assert_eq!(scene.thing_count(), 1);
        assert_eq!(scene.light_count(), 0);
        match scene.things[0] {
            Primitive::Sphere(sphere) => {
                assert_eq!(sphere.center, Vector::new(0.0, 0.0, -3.0));
                assert_eq!(sphere.radius2, 1.0);
                assert_eq!(sphere.surface, Surface::Shiny);
            }
            other => panic!("expected sphere, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_surface_is_rejected() {
        let json = r#"{
            "things": [
                { "type": "plane", "normal": [0, 1, 0], "offset": 0, "surface": "glass" }
            ],
            "camera": { "pos": [0, 0, 0], "look_at": [0, 0, -1] }
        }"#;
        assert!(matches!(
            SceneDescription::from_json(json),
            Err(SceneError::Json(_))
        ));
    }

    #[test]
    fn test_negative_radius_is_rejected() {
        let mut description = SceneDescription::default();
        description.things[1] = ThingDescription::Sphere {
            center: [0.0, 0.0, 0.0],
            radius: -1.0,
            surface: Surface::Shiny,
        };
        let err = description.build().unwrap_err();
        assert!(matches!(err, SceneError::Invalid(_)));
        assert!(err.to_string().contains("things[1].radius"));
    }

    #[test]
    fn test_non_finite_light_is_rejected() {
        let mut description = SceneDescription::default();
        description.lights[2].pos = [f64::NAN, 0.0, 0.0];
        let err = description.build().unwrap_err();
        assert!(err.to_string().contains("lights[2].pos"));
    }

    #[test]
    fn test_zero_plane_normal_is_rejected() {
        let mut description = SceneDescription::default();
        description.things[0] = ThingDescription::Plane {
            normal: [0.0, 0.0, 0.0],
            offset: 0.0,
            surface: Surface::Checkerboard,
        };
        assert!(matches!(description.build(), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_degenerate_camera_is_rejected() {
        let mut description = SceneDescription::default();
        description.camera.look_at = description.camera.pos;
        assert!(matches!(description.build(), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_load_scene_missing_file() {
        let err = load_scene("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
    }

    #[test]
    fn test_load_scene_from_file() {
        let path = std::env::temp_dir().join(format!(
            "glint_scene_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, SceneDescription::default().to_json().unwrap()).unwrap();
        let scene = load_scene(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(scene, default_scene());
    }
}

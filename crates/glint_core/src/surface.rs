//! Procedural surface materials.
//!
//! A surface maps a world-space point to diffuse color, specular color and
//! reflectivity. Roughness (the specular exponent) is a per-surface constant.
//! Surfaces carry no state, so primitives share them by value.

use glint_math::color::{BLACK, GREY, WHITE};
use glint_math::{Color, Vector};
use serde::{Deserialize, Serialize};

/// The built-in materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// White diffuse, grey specular, strongly reflective.
    Shiny,
    /// Alternating black/white unit tiles in the xz plane.
    Checkerboard,
}

impl Surface {
    pub fn diffuse(&self, pos: Vector) -> Color {
        match self {
            Surface::Shiny => WHITE,
            Surface::Checkerboard => {
                if is_odd_tile(pos) {
                    WHITE
                } else {
                    BLACK
                }
            }
        }
    }

    pub fn specular(&self, _pos: Vector) -> Color {
        match self {
            Surface::Shiny => GREY,
            Surface::Checkerboard => WHITE,
        }
    }

    /// Fraction of reflected light, in [0, 1].
    pub fn reflect(&self, pos: Vector) -> f64 {
        match self {
            Surface::Shiny => 0.7,
            Surface::Checkerboard => {
                if is_odd_tile(pos) {
                    0.1
                } else {
                    0.7
                }
            }
        }
    }

    /// Specular exponent.
    pub fn roughness(&self) -> f64 {
        match self {
            Surface::Shiny => 250.0,
            Surface::Checkerboard => 150.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Surface::Shiny => "shiny",
            Surface::Checkerboard => "checkerboard",
        }
    }
}

/// Tile index `floor(z) + floor(x)` is odd. Negative odd indices count as
/// odd too (`-1 % 2 == -1`).
#[inline]
fn is_odd_tile(pos: Vector) -> bool {
    (pos.z.floor() + pos.x.floor()) % 2.0 != 0.0
}

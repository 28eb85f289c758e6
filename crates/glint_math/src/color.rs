//! Unclamped RGB color and conversion to display values.

use glam::DVec3;

/// Color type alias (r, g, b stored in x, y, z).
///
/// Accumulated colors may exceed 1.0 or go negative; they are only
/// clamped by `to_drawing_color`.
pub type Color = DVec3;

pub const BLACK: Color = Color::ZERO;
pub const WHITE: Color = Color::ONE;
pub const GREY: Color = Color::splat(0.5);
pub const BACKGROUND: Color = BLACK;

/// Integer color ready for a pixel sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct DrawingColor {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl DrawingColor {
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Saturate each channel into a byte.
    ///
    /// `to_drawing_color` only clamps the high end, so a negative channel
    /// reaches this point as a negative integer.
    pub fn to_rgb8(self) -> [u8; 3] {
        let byte = |c: i32| c.clamp(0, 255) as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }
}

/// Clamp each channel to at most 1.0, scale by 255 and floor.
///
/// There is no low clamp: `-1.0` maps to `-255`.
pub fn to_drawing_color(color: Color) -> DrawingColor {
    let channel = |c: f64| (c.min(1.0) * 255.0).floor() as i32;
    DrawingColor {
        r: channel(color.x),
        g: channel(color.y),
        b: channel(color.z),
    }
}

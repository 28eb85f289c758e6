use glint_math::{Vector, VectorExt};

/// World-up reference used to build the view basis.
const WORLD_DOWN: Vector = Vector::new(0.0, -1.0, 0.0);

/// Length of the right/up basis vectors; sets the field of view.
const BASIS_SCALE: f64 = 1.5;

/// Pinhole camera with a precomputed view basis.
///
/// `right` and `up` are not unit length: both are scaled by 1.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pos: Vector,
    pub forward: Vector,
    pub right: Vector,
    pub up: Vector,
}

impl Camera {
    /// Build the view basis for a camera at `pos` looking at `look_at`.
    pub fn look_at(pos: Vector, look_at: Vector) -> Self {
        let forward = (look_at - pos).norm();
        let right = BASIS_SCALE * forward.cross(WORLD_DOWN).norm();
        let up = BASIS_SCALE * forward.cross(right).norm();
        Self {
            pos,
            forward,
            right,
            up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_basis_along_neg_z() {
        let camera = Camera::look_at(Vector::ZERO, Vector::new(0.0, 0.0, -1.0));

        assert_eq!(camera.pos, Vector::ZERO);
        assert_eq!(camera.forward, Vector::NEG_Z);
        // (0,0,-1) x (0,-1,0) = (-1,0,0)
        assert_eq!(camera.right, Vector::new(-1.5, 0.0, 0.0));
        // (0,0,-1) x (-1.5,0,0) = (0,1.5,0)
        assert_eq!(camera.up, Vector::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn test_camera_basis_is_orthogonal() {
        let camera = Camera::look_at(Vector::new(3.0, 2.0, 4.0), Vector::new(-1.0, 0.5, 0.0));

        assert!((camera.forward.mag() - 1.0).abs() < 1e-12);
        assert!((camera.right.mag() - 1.5).abs() < 1e-12);
        assert!((camera.up.mag() - 1.5).abs() < 1e-12);
        assert!(camera.forward.dot(camera.right).abs() < 1e-12);
        assert!(camera.forward.dot(camera.up).abs() < 1e-12);
        assert!(camera.right.dot(camera.up).abs() < 1e-12);
    }
}

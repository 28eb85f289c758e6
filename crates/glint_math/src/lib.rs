// Re-export glam for convenience
pub use glam::*;

// glint math types
pub mod color;
mod ray;
mod vector;

pub use color::{to_drawing_color, Color, DrawingColor};
pub use ray::Ray;
pub use vector::{Vector, VectorExt};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_creation() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vector_operations() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector::new(3.0, 3.0, 3.0));
        assert_eq!(2.0 * a, Vector::new(2.0, 4.0, 6.0));
    }
}

//! Math foundation for the lumen ray tracer.
//!
//! Re-exports glam for vectors and matrices and adds the ray tracing
//! specific types on top: rays with parametric bounds, intervals,
//! axis-aligned boxes and color helpers.

// Re-export glam for convenience
pub use glam::*;

mod aabb;
mod color;
mod interval;
mod ray;
mod transform;

pub use aabb::Aabb;
pub use color::{colors, Color, ColorExt};
pub use interval::Interval;
pub use ray::{Ray, RAY_EPSILON};
pub use transform::Mat4Ext;

/// Denominators with a magnitude below this are treated as zero.
pub const DIVISION_EPSILON: f32 = 1e-8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_normalize_is_unit_length() {
        let v = Vec3::new(3.0, -4.0, 12.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_vec4_homogeneous_w() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let point = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let direction = m * Vec4::new(0.0, 0.0, 1.0, 0.0);

        assert_eq!(point.truncate(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(direction.truncate(), Vec3::Z);
    }
}

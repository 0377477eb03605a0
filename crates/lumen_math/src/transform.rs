// Transform utilities for Mat4
//
// glam::Mat4 already provides transform_point3() (translation-affecting)
// and transform_vector3() (translation-ignoring).

use crate::Aabb;
use glam::{Mat4, Vec3};

/// Extension trait for Mat4 to provide additional transform utilities
pub trait Mat4Ext {
    /// Build an affine matrix from basis axes and a translation, stored as
    /// the four columns `{x_axis, y_axis, z_axis, translation}`.
    fn from_basis(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3, translation: Vec3) -> Self;

    /// Transform an axis-aligned bounding box.
    /// Computes the bounding box of all 8 transformed corners.
    fn transform_aabb(&self, aabb: &Aabb) -> Aabb;
}

impl Mat4Ext for Mat4 {
    fn from_basis(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3, translation: Vec3) -> Self {
        Mat4::from_cols(
            x_axis.extend(0.0),
            y_axis.extend(0.0),
            z_axis.extend(0.0),
            translation.extend(1.0),
        )
    }

    fn transform_aabb(&self, aabb: &Aabb) -> Aabb {
        if aabb.is_empty() {
            return Aabb::EMPTY;
        }

        let corners = aabb.corners().map(|corner| self.transform_point3(corner));
        Aabb::enclosing(&corners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_point_and_vector_transforms() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));

        assert_eq!(mat.transform_point3(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(11.0, 22.0, 33.0));
        // Translation should NOT affect vectors (w=0)
        assert_eq!(mat.transform_vector3(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_from_basis() {
        let mat = Mat4::from_basis(Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(0.0, 0.0, -5.0));

        assert_eq!(mat.transform_point3(Vec3::ZERO), Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(mat.transform_vector3(Vec3::Z), Vec3::Z);

        // Swapped basis maps camera-space +Z onto world +X
        let turned = Mat4::from_basis(-Vec3::Z, Vec3::Y, Vec3::X, Vec3::ZERO);
        assert_eq!(turned.transform_vector3(Vec3::Z), Vec3::X);
    }

    #[test]
    fn test_transform_aabb_translation() {
        let mat = Mat4::from_translation(Vec3::new(5.0, 5.0, 5.0));
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::ONE);
        let transformed = mat.transform_aabb(&aabb);

        assert!((transformed.min_point() - Vec3::splat(5.0)).length() < 0.001);
        assert!((transformed.max_point() - Vec3::splat(6.0)).length() < 0.001);
    }

    #[test]
    fn test_transform_aabb_rotation_grows_box() {
        let mat = Mat4::from_rotation_y(FRAC_PI_2 / 2.0);
        let aabb = Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0));
        let transformed = mat.transform_aabb(&aabb);

        let expected = 2.0_f32.sqrt();
        assert!((transformed.x.max - expected).abs() < 0.001);
        assert!((transformed.z.min + expected).abs() < 0.001);
        assert!((transformed.y.max - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_transform_empty_aabb() {
        let mat = Mat4::from_scale(Vec3::splat(2.0));
        assert!(mat.transform_aabb(&Aabb::EMPTY).is_empty());
    }
}

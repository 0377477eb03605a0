//! Infinite plane primitive.

use crate::{HitRecord, Hittable, MaterialId, Ray};
use lumen_math::{Vec3, DIVISION_EPSILON};

/// An infinite plane through `origin` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material: MaterialId,
}

impl Plane {
    /// Create a new plane; the normal is normalized.
    pub fn new(origin: Vec3, normal: Vec3, material: MaterialId) -> Self {
        Self {
            origin,
            normal: normal.normalize_or_zero(),
            material,
        }
    }

    /// `t = dot(origin - ray.origin, n) / dot(ray.direction, n)`, rejected
    /// when the ray runs parallel to the plane or `t` is out of range.
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < DIVISION_EPSILON {
            return None;
        }

        let t = (self.origin - ray.origin).dot(self.normal) / denom;
        ray.interval().contains(t).then_some(t)
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some(t) = self.intersect(ray) else {
            return false;
        };

        rec.record(t, ray.at(t), self.normal, self.material);
        true
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        self.intersect(ray).is_some()
    }
}

//! Sphere primitive for ray tracing.

use crate::{HitRecord, Hittable, MaterialId, Ray};
use lumen_math::{Vec3, DIVISION_EPSILON};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(origin: Vec3, radius: f32, material: MaterialId) -> Self {
        Self {
            origin,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Solve `|O + tD - C|² = r²` and return the nearest root inside
    /// `[ray.min, ray.max]`.
    ///
    /// The farther root is only tried when the nearer one is out of range,
    /// which is what lets a ray starting inside the sphere hit its far wall.
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.origin;
        let a = ray.direction.length_squared();
        if a < DIVISION_EPSILON {
            return None;
        }

        let half_b = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let range = ray.interval();

        let near = (-half_b - sqrtd) / a;
        if range.contains(near) {
            return Some(near);
        }

        let far = (-half_b + sqrtd) / a;
        range.contains(far).then_some(far)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some(t) = self.intersect(ray) else {
            return false;
        };

        let p = ray.at(t);
        let normal = (p - self.origin).normalize();
        rec.record(t, p, normal, self.material);
        true
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        self.intersect(ray).is_some()
    }
}

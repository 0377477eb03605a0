//! Hittable trait and HitRecord for ray-object intersection.

use crate::{MaterialId, Ray};
use lumen_math::Vec3;

/// Record of the closest ray-object intersection seen so far.
///
/// Starts empty with `t = +inf` and is narrowed in place as closer hits
/// are found during a scene query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// World-space point of intersection
    pub origin: Vec3,
    /// Surface normal as stored on the primitive (not flipped toward the ray)
    pub normal: Vec3,
    /// Ray parameter of the intersection
    pub t: f32,
    pub did_hit: bool,
    pub material: MaterialId,
}

impl Default for HitRecord {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            normal: Vec3::ZERO,
            t: f32::INFINITY,
            did_hit: false,
            material: MaterialId::DEFAULT,
        }
    }
}

impl HitRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a hit if it beats the current one.
    ///
    /// A hit replaces the record when it is strictly closer, or at exactly
    /// the same distance with a lower material index, so the result does
    /// not depend on the order primitives are tested in.
    pub fn record(&mut self, t: f32, origin: Vec3, normal: Vec3, material: MaterialId) -> bool {
        let wins = t < self.t || (self.did_hit && t == self.t && material < self.material);
        if wins {
            self.origin = origin;
            self.normal = normal;
            self.t = t;
            self.did_hit = true;
            self.material = material;
        }
        wins
    }
}

/// Trait for objects that can be hit by rays.
///
/// Both queries share the same root-finding; `hit_any` only skips writing
/// the record and may stop at the first intersection it finds.
pub trait Hittable: Send + Sync {
    /// Closest-hit query.
    ///
    /// Returns true if the ray has any valid intersection within
    /// `[ray.min, ray.max]`; the record is only updated when that
    /// intersection is closer than `rec.t`.
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool;

    /// Any-hit query used for shadow rays.
    fn hit_any(&self, ray: &Ray) -> bool;
}

//! Triangle primitive for ray tracing.
//!
//! Plane intersection followed by a cross-product inside test against
//! each edge.

use crate::{HitRecord, Hittable, MaterialId, Ray};
use lumen_math::{Vec3, DIVISION_EPSILON};
use serde::{Deserialize, Serialize};

/// Which side of a triangle is ignored by closest-hit queries.
///
/// The front face is the side the normal points out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CullMode {
    FrontFace,
    #[default]
    BackFace,
    None,
}

impl CullMode {
    /// The cull mode shadow rays use: a shadow ray travels from the surface
    /// toward the light, the opposite way to a camera ray, so the culled
    /// side swaps.
    pub fn inverted(self) -> Self {
        match self {
            CullMode::FrontFace => CullMode::BackFace,
            CullMode::BackFace => CullMode::FrontFace,
            CullMode::None => CullMode::None,
        }
    }

    /// `n_dot_d` is `dot(normal, ray.direction)`; positive means the ray
    /// travels the same way the normal points, i.e. it sees the back face.
    #[inline]
    fn culls(self, n_dot_d: f32) -> bool {
        match self {
            CullMode::BackFace => n_dot_d > 0.0,
            CullMode::FrontFace => n_dot_d < 0.0,
            CullMode::None => false,
        }
    }
}

/// A triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Unit face normal
    pub normal: Vec3,
    pub cull_mode: CullMode,
    pub material: MaterialId,
}

impl Triangle {
    /// Create a triangle whose normal follows the winding order,
    /// `cross(v1 - v0, v2 - v0)`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();
        Self::with_normal(v0, v1, v2, normal)
    }

    /// Create a triangle with a pre-computed normal.
    pub fn with_normal(v0: Vec3, v1: Vec3, v2: Vec3, normal: Vec3) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal: normal.normalize_or_zero(),
            cull_mode: CullMode::default(),
            material: MaterialId::DEFAULT,
        }
    }

    pub fn with_cull_mode(mut self, cull_mode: CullMode) -> Self {
        self.cull_mode = cull_mode;
        self
    }

    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = material;
        self
    }

    /// Intersect under an explicit cull mode, returning `(t, hit point)`.
    fn intersect(&self, ray: &Ray, cull_mode: CullMode) -> Option<(f32, Vec3)> {
        let n_dot_d = self.normal.dot(ray.direction);
        if n_dot_d.abs() < DIVISION_EPSILON || cull_mode.culls(n_dot_d) {
            return None;
        }

        let t = (self.v0 - ray.origin).dot(self.normal) / n_dot_d;
        if !ray.interval().contains(t) {
            return None;
        }

        let p = ray.at(t);
        let inside = [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)]
            .iter()
            .all(|&(start, end)| (end - start).cross(p - start).dot(self.normal) >= 0.0);

        inside.then_some((t, p))
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some((t, p)) = self.intersect(ray, self.cull_mode) else {
            return false;
        };

        rec.record(t, p, self.normal, self.material);
        true
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        self.intersect(ray, self.cull_mode.inverted()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clockwise seen from -Z, so the normal points at a camera on -Z.
    fn facing_camera() -> Triangle {
        Triangle::new(
            Vec3::new(-0.75, 1.5, 0.0),
            Vec3::new(0.75, 0.0, 0.0),
            Vec3::new(-0.75, 0.0, 0.0),
        )
    }

    fn front_ray() -> Ray {
        Ray::new(Vec3::new(-0.25, 0.5, -5.0), Vec3::Z)
    }

    fn back_ray() -> Ray {
        Ray::new(Vec3::new(-0.25, 0.5, 5.0), -Vec3::Z)
    }

    #[test]
    fn test_normal_from_winding() {
        assert!((facing_camera().normal - -Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_triangle_hit() {
        let tri = facing_camera();
        let mut rec = HitRecord::new();

        assert!(tri.hit(&front_ray(), &mut rec));
        assert!((rec.t - 5.0).abs() < 1e-5);
        assert!((rec.origin - Vec3::new(-0.25, 0.5, 0.0)).length() < 1e-5);
        assert_eq!(rec.normal, tri.normal);
    }

    #[test]
    fn test_triangle_miss_outside_edges() {
        let tri = facing_camera().with_cull_mode(CullMode::None);

        for origin in [
            Vec3::new(0.5, 1.0, -5.0),
            Vec3::new(-1.0, 0.5, -5.0),
            Vec3::new(0.0, -0.1, -5.0),
        ] {
            let ray = Ray::new(origin, Vec3::Z);
            assert!(!tri.hit_any(&ray), "origin {origin:?} should miss");
        }
    }

    #[test]
    fn test_edge_point_counts_as_inside() {
        let tri = facing_camera().with_cull_mode(CullMode::None);
        let on_edge = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(tri.hit_any(&on_edge));
    }

    #[test]
    fn test_back_face_culling() {
        let tri = facing_camera().with_cull_mode(CullMode::BackFace);
        let mut rec = HitRecord::new();

        assert!(tri.hit(&front_ray(), &mut rec));
        assert!(!tri.hit(&back_ray(), &mut HitRecord::new()));
    }

    #[test]
    fn test_front_face_culling() {
        let tri = facing_camera().with_cull_mode(CullMode::FrontFace);

        assert!(!tri.hit(&front_ray(), &mut HitRecord::new()));
        assert!(tri.hit(&back_ray(), &mut HitRecord::new()));
    }

    #[test]
    fn test_no_culling_hits_both_sides() {
        let tri = facing_camera().with_cull_mode(CullMode::None);

        assert!(tri.hit(&front_ray(), &mut HitRecord::new()));
        assert!(tri.hit(&back_ray(), &mut HitRecord::new()));
        assert!(tri.hit_any(&front_ray()));
        assert!(tri.hit_any(&back_ray()));
    }

    #[test]
    fn test_any_hit_inverts_facing() {
        for cull_mode in [CullMode::BackFace, CullMode::FrontFace] {
            let tri = facing_camera().with_cull_mode(cull_mode);

            for ray in [front_ray(), back_ray()] {
                let closest = tri.hit(&ray, &mut HitRecord::new());
                assert_ne!(closest, tri.hit_any(&ray), "{cull_mode:?}");
            }
        }
    }

    #[test]
    fn test_perpendicular_ray_never_hits() {
        let tri = facing_camera().with_cull_mode(CullMode::None);
        let grazing = Ray::new(Vec3::new(-2.0, 0.5, 0.0), Vec3::X);

        assert!(!tri.hit(&grazing, &mut HitRecord::new()));
        assert!(!tri.hit_any(&grazing));
    }

    #[test]
    fn test_out_of_range_t() {
        let tri = facing_camera();
        let short = Ray::with_bounds(Vec3::new(-0.25, 0.5, -5.0), Vec3::Z, 1e-4, 4.0);
        assert!(!tri.hit(&short, &mut HitRecord::new()));
    }

    #[test]
    fn test_cull_mode_inverted_round_trips() {
        for mode in [CullMode::FrontFace, CullMode::BackFace, CullMode::None] {
            assert_eq!(mode.inverted().inverted(), mode);
        }
    }
}

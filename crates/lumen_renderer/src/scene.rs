//! Scene container and ray queries.

use crate::{
    Camera, CullMode, HitRecord, Hittable, Light, Material, MaterialId, Plane, Ray, Sphere,
    TriangleMesh,
};
use lumen_math::{Color, Vec3};

/// Owns every primitive, light and material plus the camera.
///
/// Primitives are added through the `add_*` methods, which return an
/// index usable with the matching `*_mut` accessor. Material index 0
/// always exists and is the fallback for ids this scene did not hand out.
#[derive(Debug, Clone)]
pub struct Scene {
    camera: Camera,
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    meshes: Vec<TriangleMesh>,
    lights: Vec<Light>,
    materials: Vec<Material>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            camera: Camera::default(),
            spheres: Vec::new(),
            planes: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            materials: vec![Material::default()],
        }
    }

    pub fn add_sphere(&mut self, origin: Vec3, radius: f32, material: MaterialId) -> usize {
        self.spheres.push(Sphere::new(origin, radius, material));
        self.spheres.len() - 1
    }

    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material: MaterialId) -> usize {
        self.planes.push(Plane::new(origin, normal, material));
        self.planes.len() - 1
    }

    /// Add an empty mesh; fill it through [`Scene::mesh_mut`].
    pub fn add_triangle_mesh(&mut self, cull_mode: CullMode, material: MaterialId) -> usize {
        self.add_mesh(TriangleMesh::new(cull_mode, material))
    }

    pub fn add_mesh(&mut self, mesh: TriangleMesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    pub fn add_point_light(&mut self, origin: Vec3, intensity: f32, color: Color) -> usize {
        self.lights.push(Light::point(origin, intensity, color));
        self.lights.len() - 1
    }

    pub fn add_directional_light(
        &mut self,
        direction: Vec3,
        intensity: f32,
        color: Color,
    ) -> usize {
        self.lights.push(Light::directional(direction, intensity, color));
        self.lights.len() - 1
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId::new(self.materials.len() - 1)
    }

    /// Material for `id`, or the default material for a foreign id.
    pub fn material(&self, id: MaterialId) -> &Material {
        self.materials.get(id.index()).unwrap_or(&self.materials[0])
    }

    pub fn sphere_mut(&mut self, index: usize) -> Option<&mut Sphere> {
        self.spheres.get_mut(index)
    }

    pub fn plane_mut(&mut self, index: usize) -> Option<&mut Plane> {
        self.planes.get_mut(index)
    }

    /// Staged mesh edits take effect at the next [`Scene::commit`].
    pub fn mesh_mut(&mut self, index: usize) -> Option<&mut TriangleMesh> {
        self.meshes.get_mut(index)
    }

    pub fn light_mut(&mut self, index: usize) -> Option<&mut Light> {
        self.lights.get_mut(index)
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn meshes(&self) -> &[TriangleMesh] {
        &self.meshes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// True when the camera or some mesh has staged changes that `commit`
    /// would apply.
    pub fn is_dirty(&self) -> bool {
        self.camera.is_dirty() || self.meshes.iter().any(TriangleMesh::is_dirty)
    }

    /// Finalize per-frame state: apply staged mesh transforms and rebuild
    /// the camera matrix. Must run before a render pass.
    pub fn commit(&mut self) {
        let mut updated = 0;
        for mesh in self.meshes.iter_mut().filter(|mesh| mesh.is_dirty()) {
            mesh.update_transforms();
            updated += 1;
        }
        if updated > 0 {
            log::debug!("Committed {} of {} meshes", updated, self.meshes.len());
        }

        self.camera.calculate_camera_to_world();
    }

    /// Nearest intersection along `ray`, or an empty record.
    pub fn closest_hit(&self, ray: &Ray) -> HitRecord {
        let mut rec = HitRecord::new();

        for sphere in &self.spheres {
            sphere.hit(ray, &mut rec);
        }
        for plane in &self.planes {
            plane.hit(ray, &mut rec);
        }
        for mesh in &self.meshes {
            mesh.hit(ray, &mut rec);
        }

        rec
    }

    /// True if anything blocks `ray` within its bounds.
    pub fn does_hit(&self, ray: &Ray) -> bool {
        self.spheres.iter().any(|sphere| sphere.hit_any(ray))
            || self.planes.iter().any(|plane| plane.hit_any(ray))
            || self.meshes.iter().any(|mesh| mesh.hit_any(ray))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Triangle;
    use lumen_math::colors;

    #[test]
    fn test_default_material() {
        let scene = Scene::new();

        assert_eq!(*scene.material(MaterialId::DEFAULT), Material::solid_color(colors::RED));
        // Ids that were never handed out fall back to the default
        assert_eq!(scene.material(MaterialId::new(42)), scene.material(MaterialId::DEFAULT));
    }

    #[test]
    fn test_add_returns_indices() {
        let mut scene = Scene::new();
        let blue = scene.add_material(Material::solid_color(colors::BLUE));

        assert_eq!(blue.index(), 1);
        assert_eq!(scene.add_sphere(Vec3::ZERO, 1.0, blue), 0);
        assert_eq!(scene.add_sphere(Vec3::X, 1.0, blue), 1);
        assert_eq!(scene.add_plane(Vec3::ZERO, Vec3::Y, blue), 0);
        assert_eq!(scene.add_point_light(Vec3::Y, 1.0, colors::WHITE), 0);
        assert_eq!(scene.add_directional_light(-Vec3::Y, 1.0, colors::WHITE), 1);
        assert_eq!(scene.add_triangle_mesh(CullMode::None, blue), 0);
    }

    #[test]
    fn test_camera_move_marks_scene_dirty() {
        let mut scene = Scene::new();
        assert!(!scene.is_dirty());

        scene.camera_mut().rotate(0.0, 0.5);
        assert!(scene.is_dirty());

        scene.commit();
        assert!(!scene.is_dirty());
    }

    #[test]
    fn test_closest_hit_across_primitive_types() {
        let mut scene = Scene::new();
        let near = scene.add_material(Material::solid_color(colors::GREEN));
        let far = scene.add_material(Material::solid_color(colors::BLUE));

        scene.add_plane(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, far);
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, near);

        let rec = scene.closest_hit(&Ray::new(Vec3::ZERO, Vec3::Z));
        assert!(rec.did_hit);
        assert_eq!(rec.material, near);
        assert!((rec.t - 4.0).abs() < 1e-5);

        let miss = scene.closest_hit(&Ray::new(Vec3::ZERO, -Vec3::Z));
        assert!(!miss.did_hit);
    }

    #[test]
    fn test_closest_hit_ignores_insertion_order() {
        let materials = [
            Material::solid_color(colors::GREEN),
            Material::solid_color(colors::BLUE),
            Material::solid_color(colors::YELLOW),
        ];
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z);

        let build = |order: [usize; 3]| {
            let mut scene = Scene::new();
            let ids: Vec<MaterialId> = materials.iter().map(|m| scene.add_material(*m)).collect();

            for item in order {
                match item {
                    0 => {
                        scene.add_sphere(Vec3::new(0.0, 0.0, 2.0), 1.0, ids[0]);
                    }
                    1 => {
                        // Coincides with the sphere's front at z = 1
                        scene.add_plane(Vec3::new(0.0, 0.0, 1.0), -Vec3::Z, ids[1]);
                    }
                    _ => {
                        let mut mesh = TriangleMesh::new(CullMode::None, ids[2]);
                        mesh.append_triangle(&Triangle::new(
                            Vec3::new(-1.0, -1.0, 3.0),
                            Vec3::new(0.0, 2.0, 3.0),
                            Vec3::new(2.0, -1.0, 3.0),
                        ));
                        scene.add_mesh(mesh);
                    }
                }
            }
            scene.commit();
            scene.closest_hit(&ray)
        };

        let reference = build([0, 1, 2]);
        assert!(reference.did_hit);
        for order in [[0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
            let rec = build(order);
            assert_eq!(rec.t, reference.t, "{order:?}");
            assert_eq!(rec.material, reference.material, "{order:?}");
        }
    }

    #[test]
    fn test_does_hit_respects_ray_bounds() {
        let mut scene = Scene::new();
        scene.add_sphere(Vec3::new(0.0, 5.0, 0.0), 1.0, MaterialId::DEFAULT);

        let up = Ray::with_bounds(Vec3::ZERO, Vec3::Y, 1e-4, 10.0);
        let short = Ray::with_bounds(Vec3::ZERO, Vec3::Y, 1e-4, 3.0);

        assert!(scene.does_hit(&up));
        assert!(!scene.does_hit(&short));
    }

    #[test]
    fn test_commit_applies_staged_mesh_changes() {
        let mut scene = Scene::new();
        let handle = scene.add_triangle_mesh(CullMode::None, MaterialId::DEFAULT);

        if let Some(mesh) = scene.mesh_mut(handle) {
            mesh.append_triangle(&Triangle::new(
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
            ));
            mesh.translate(Vec3::new(0.0, 0.0, 4.0));
        }
        assert!(scene.is_dirty());

        scene.commit();
        assert!(!scene.is_dirty());

        let rec = scene.closest_hit(&Ray::new(Vec3::ZERO, Vec3::Z));
        assert!((rec.t - 4.0).abs() < 1e-5);
    }
}

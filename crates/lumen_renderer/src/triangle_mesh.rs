//! Indexed triangle mesh with a staged transform pipeline.
//!
//! Raw object-space geometry is stored once. Mutators only stage changes
//! and mark the mesh dirty; [`TriangleMesh::update_transforms`] rebuilds
//! the world-space positions, normals and bounding box in one step.
//! `Scene::commit` runs that step for every dirty mesh before a render
//! pass, so a pass never sees stale transformed data.

use crate::{CullMode, HitRecord, Hittable, MaterialId, Ray, Triangle};
use lumen_core::{mesh::face_normals, Mesh};
use lumen_math::{Aabb, Mat4, Mat4Ext, Vec3};

/// A triangle mesh sharing one cull mode and one material.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    positions: Vec<Vec3>,
    /// One normal per triangle
    normals: Vec<Vec3>,
    indices: Vec<u32>,

    cull_mode: CullMode,
    material: MaterialId,

    translation: Vec3,
    /// Rotation about +Y in radians
    yaw: f32,
    scale: Vec3,

    transformed_positions: Vec<Vec3>,
    transformed_normals: Vec<Vec3>,
    object_bounds: Aabb,
    world_bounds: Aabb,

    geometry_dirty: bool,
    transform_dirty: bool,
}

impl TriangleMesh {
    /// Create an empty mesh with an identity transform.
    pub fn new(cull_mode: CullMode, material: MaterialId) -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            cull_mode,
            material,
            translation: Vec3::ZERO,
            yaw: 0.0,
            scale: Vec3::ONE,
            transformed_positions: Vec::new(),
            transformed_normals: Vec::new(),
            object_bounds: Aabb::EMPTY,
            world_bounds: Aabb::EMPTY,
            geometry_dirty: false,
            transform_dirty: false,
        }
    }

    /// Create a mesh from a validated geometry source.
    pub fn from_mesh(mesh: &Mesh, cull_mode: CullMode, material: MaterialId) -> Self {
        let mut triangle_mesh = Self::new(cull_mode, material);
        triangle_mesh.set_geometry(mesh);
        triangle_mesh
    }

    /// Replace the raw geometry with a copy of `mesh`.
    pub fn set_geometry(&mut self, mesh: &Mesh) {
        self.positions = mesh.positions.clone();
        self.indices = mesh.indices.clone();
        self.normals = mesh.normals.clone();
        self.geometry_dirty = true;
    }

    /// Append a stand-alone triangle, keeping its normal.
    pub fn append_triangle(&mut self, triangle: &Triangle) {
        let base = self.positions.len() as u32;

        self.positions.extend_from_slice(&[triangle.v0, triangle.v1, triangle.v2]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
        self.normals.push(triangle.normal);
        self.geometry_dirty = true;
    }

    /// Recompute every face normal from the winding order.
    pub fn calculate_normals(&mut self) {
        self.normals = face_normals(&self.positions, &self.indices);
        self.geometry_dirty = true;
    }

    /// Set the world-space translation.
    pub fn translate(&mut self, translation: Vec3) {
        self.translation = translation;
        self.transform_dirty = true;
    }

    /// Set the rotation about the Y axis, in radians.
    pub fn rotate_y(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.transform_dirty = true;
    }

    /// Set the per-axis scale.
    pub fn scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.transform_dirty = true;
    }

    /// True when staged changes have not been applied yet.
    pub fn is_dirty(&self) -> bool {
        self.geometry_dirty || self.transform_dirty
    }

    /// Object-to-world matrix: scale, then rotate, then translate.
    pub fn world_transform(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_rotation_y(self.yaw)
            * Mat4::from_scale(self.scale)
    }

    /// Apply all staged changes.
    ///
    /// Positions use the full transform. Normals only use the rotation,
    /// so non-uniform scale never bends them.
    pub fn update_transforms(&mut self) {
        if self.geometry_dirty {
            self.object_bounds = Aabb::enclosing(&self.positions);
        }

        let world = self.world_transform();
        let rotation = Mat4::from_rotation_y(self.yaw);

        self.transformed_positions = self
            .positions
            .iter()
            .map(|&p| world.transform_point3(p))
            .collect();
        self.transformed_normals = self
            .normals
            .iter()
            .map(|&n| rotation.transform_vector3(n).normalize_or_zero())
            .collect();
        self.world_bounds = world.transform_aabb(&self.object_bounds);

        log::debug!(
            "Updated mesh transforms: {} triangles, bounds {:?}..{:?}",
            self.triangle_count(),
            self.world_bounds.min_point(),
            self.world_bounds.max_point()
        );

        self.geometry_dirty = false;
        self.transform_dirty = false;
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn transformed_positions(&self) -> &[Vec3] {
        &self.transformed_positions
    }

    pub fn transformed_normals(&self) -> &[Vec3] {
        &self.transformed_normals
    }

    pub fn object_bounds(&self) -> Aabb {
        self.object_bounds
    }

    pub fn world_bounds(&self) -> Aabb {
        self.world_bounds
    }

    pub fn cull_mode(&self) -> CullMode {
        self.cull_mode
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }

    /// World-space triangle `index`, built from the transformed buffers.
    ///
    /// Indices are trusted; the hot loop does not bounds-check them beyond
    /// what slice indexing already does.
    pub fn triangle(&self, index: usize) -> Triangle {
        let face = &self.indices[index * 3..index * 3 + 3];

        Triangle {
            v0: self.transformed_positions[face[0] as usize],
            v1: self.transformed_positions[face[1] as usize],
            v2: self.transformed_positions[face[2] as usize],
            normal: self.transformed_normals[index],
            cull_mode: self.cull_mode,
            material: self.material,
        }
    }
}

impl Hittable for TriangleMesh {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        debug_assert!(!self.is_dirty(), "mesh queried before update_transforms");

        if !self.world_bounds.hit(ray) {
            return false;
        }

        let mut hit_anything = false;
        for index in 0..self.triangle_count() {
            hit_anything |= self.triangle(index).hit(ray, rec);
        }
        hit_anything
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        debug_assert!(!self.is_dirty(), "mesh queried before update_transforms");

        self.world_bounds.hit(ray)
            && (0..self.triangle_count()).any(|index| self.triangle(index).hit_any(ray))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    /// Unit quad in the z = 0 plane facing -Z.
    fn quad() -> TriangleMesh {
        let mesh = Mesh::new(
            vec![
                Vec3::new(-0.5, -0.5, 0.0),
                Vec3::new(-0.5, 0.5, 0.0),
                Vec3::new(0.5, 0.5, 0.0),
                Vec3::new(0.5, -0.5, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
            None,
        )
        .unwrap();

        let mut quad = TriangleMesh::from_mesh(&mesh, CullMode::BackFace, MaterialId::DEFAULT);
        quad.update_transforms();
        quad
    }

    #[test]
    fn test_from_mesh_normals() {
        let quad = quad();

        assert_eq!(quad.triangle_count(), 2);
        for normal in quad.transformed_normals() {
            assert!((*normal - -Vec3::Z).length() < 1e-6);
        }
    }

    #[test]
    fn test_mutators_stage_changes() {
        let mut quad = quad();
        assert!(!quad.is_dirty());

        quad.translate(Vec3::new(0.0, 0.0, 3.0));
        assert!(quad.is_dirty());
        // Nothing moves until the update step runs
        assert_eq!(quad.transformed_positions()[0], Vec3::new(-0.5, -0.5, 0.0));

        quad.update_transforms();
        assert!(!quad.is_dirty());
        assert_eq!(quad.transformed_positions()[0], Vec3::new(-0.5, -0.5, 3.0));
    }

    #[test]
    fn test_scale_doubles_distance_from_translation() {
        let mut mesh = quad();
        let translation = Vec3::new(1.0, 2.0, 3.0);

        mesh.translate(translation);
        mesh.scale(Vec3::splat(2.0));
        mesh.update_transforms();

        for (raw, world) in mesh.positions().iter().zip(mesh.transformed_positions()) {
            let expected = raw.length() * 2.0;
            let actual = (*world - translation).length();
            assert!((actual - expected).abs() < 1e-5, "{actual} != {expected}");
        }
    }

    #[test]
    fn test_normals_ignore_scale() {
        let mut mesh = TriangleMesh::new(CullMode::None, MaterialId::DEFAULT);
        mesh.append_triangle(&Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ));
        let raw = mesh.normals()[0];

        mesh.scale(Vec3::new(1.0, 5.0, 1.0));
        mesh.update_transforms();

        assert!((mesh.transformed_normals()[0] - raw).length() < 1e-6);
    }

    #[test]
    fn test_rotate_y_turns_normals() {
        let mut mesh = quad();

        mesh.rotate_y(FRAC_PI_2);
        mesh.update_transforms();

        for normal in mesh.transformed_normals() {
            assert!((*normal - -Vec3::X).length() < 1e-5, "{normal:?}");
        }
    }

    #[test]
    fn test_world_bounds_enclose_positions() {
        let mut mesh = quad();
        mesh.rotate_y(0.7);
        mesh.scale(Vec3::new(3.0, 1.0, 2.0));
        mesh.translate(Vec3::new(-4.0, 1.0, 10.0));
        mesh.update_transforms();

        let bounds = mesh.world_bounds();
        for p in mesh.transformed_positions() {
            assert!(bounds.x.contains(p.x) && bounds.y.contains(p.y) && bounds.z.contains(p.z));
        }
    }

    #[test]
    fn test_quad_hit_through_center() {
        let mut mesh = quad();
        mesh.translate(Vec3::new(0.0, 0.0, 2.0));
        mesh.update_transforms();

        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);
        let mut rec = HitRecord::new();

        assert!(mesh.hit(&ray, &mut rec));
        assert!(rec.did_hit);
        assert!((rec.t - 5.0).abs() < 1e-5);
        assert!((rec.normal - -Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_bounds_reject_miss() {
        let mesh = quad();
        let ray = Ray::new(Vec3::new(5.0, 5.0, -3.0), Vec3::Z);

        assert!(!mesh.hit(&ray, &mut HitRecord::new()));
        assert!(!mesh.hit_any(&ray));
    }

    #[test]
    fn test_any_hit_uses_inverted_culling() {
        let mesh = quad();
        let toward_front = Ray::new(Vec3::new(0.1, 0.2, -3.0), Vec3::Z);
        let toward_back = Ray::new(Vec3::new(0.1, 0.2, 3.0), -Vec3::Z);

        assert!(mesh.hit(&toward_front, &mut HitRecord::new()));
        assert!(!mesh.hit_any(&toward_front));
        assert!(!mesh.hit(&toward_back, &mut HitRecord::new()));
        assert!(mesh.hit_any(&toward_back));
    }

    #[test]
    fn test_append_triangle_offsets_indices() {
        let mut mesh = quad();
        mesh.append_triangle(&Triangle::new(Vec3::X, Vec3::Y, Vec3::Z));
        mesh.update_transforms();

        assert_eq!(mesh.triangle_count(), 3);
        assert_eq!(&mesh.indices()[6..], &[4, 5, 6]);
        assert_eq!(mesh.triangle(2).v1, Vec3::Y);
    }

    #[test]
    fn test_calculate_normals() {
        let mut mesh = quad();
        mesh.rotate_y(FRAC_PI_2);
        mesh.calculate_normals();
        mesh.update_transforms();

        assert_eq!(mesh.normals().len(), 2);
        assert!((mesh.normals()[0] - -Vec3::Z).length() < 1e-6);
    }
}

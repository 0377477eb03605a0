//! Demo scenes.

use crate::cli::SceneKind;
use anyhow::{Context, Result};
use lumen_core::load_obj;
use lumen_renderer::{
    colors, Color, CullMode, Material, MaterialId, Scene, Triangle, TriangleMesh, Vec3,
};
use std::f32::consts::{FRAC_PI_2, TAU};
use std::path::Path;

/// How a scene's meshes move over time.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Animation {
    Still,
    /// Yaw swings between 0 and a full turn, `(cos t + 1) / 2 · 2π`
    Oscillate,
    /// Constant quarter turn per second
    Spin,
}

/// A scene plus the meshes its animation drives.
pub struct DemoScene {
    pub scene: Scene,
    animated: Vec<usize>,
    animation: Animation,
}

impl DemoScene {
    pub fn build(kind: SceneKind, obj: Option<&Path>) -> Result<Self> {
        let demo = match kind {
            SceneKind::Reference => reference(),
            SceneKind::Spheres => spheres(),
            SceneKind::Mesh => {
                let path = obj.context("the mesh scene needs --obj <file>")?;
                mesh(path)?
            }
        };

        log::info!(
            "Built {:?} scene: {} spheres, {} planes, {} meshes, {} lights",
            kind,
            demo.scene.spheres().len(),
            demo.scene.planes().len(),
            demo.scene.meshes().len(),
            demo.scene.lights().len()
        );
        Ok(demo)
    }

    /// Pose the animated meshes for scene time `time` (seconds).
    ///
    /// Changes are staged; the next render commits them.
    pub fn animate(&mut self, time: f32) {
        let yaw = match self.animation {
            Animation::Still => return,
            Animation::Oscillate => (time.cos() + 1.0) / 2.0 * TAU,
            Animation::Spin => FRAC_PI_2 * time,
        };

        for &handle in &self.animated {
            if let Some(mesh) = self.scene.mesh_mut(handle) {
                mesh.rotate_y(yaw);
            }
        }
    }
}

/// Five Lambert walls shared by the box scenes.
fn add_box(scene: &mut Scene, material: MaterialId) {
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, material);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), -Vec3::X, material);
    scene.add_plane(Vec3::ZERO, Vec3::Y, material);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y, material);
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, material);
}

fn add_warm_lights(scene: &mut Scene) {
    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45));
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, Color::new(0.34, 0.47, 0.68));
}

fn reference() -> DemoScene {
    let mut scene = Scene::new();
    let camera = scene.camera_mut();
    camera.set_origin(Vec3::new(0.0, 3.0, -9.0));
    camera.set_fov_angle(45.0);

    let silver = Color::new(0.972, 0.960, 0.915);
    let gray = Color::splat(0.75);
    let rough_metal = scene.add_material(Material::cook_torrance(silver, 1.0, 1.0));
    let medium_metal = scene.add_material(Material::cook_torrance(silver, 1.0, 0.6));
    let smooth_metal = scene.add_material(Material::cook_torrance(silver, 1.0, 0.1));
    let rough_plastic = scene.add_material(Material::cook_torrance(gray, 0.0, 1.0));
    let medium_plastic = scene.add_material(Material::cook_torrance(gray, 0.0, 0.6));
    let smooth_plastic = scene.add_material(Material::cook_torrance(gray, 0.0, 0.1));
    let walls = scene.add_material(Material::lambert(Color::new(0.49, 0.57, 0.57), 1.0));
    let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));

    add_box(&mut scene, walls);

    scene.add_sphere(Vec3::new(-1.75, 1.0, 0.0), 0.75, rough_metal);
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 0.75, medium_metal);
    scene.add_sphere(Vec3::new(1.75, 1.0, 0.0), 0.75, smooth_metal);
    scene.add_sphere(Vec3::new(-1.75, 3.0, 0.0), 0.75, rough_plastic);
    scene.add_sphere(Vec3::new(0.0, 3.0, 0.0), 0.75, medium_plastic);
    scene.add_sphere(Vec3::new(1.75, 3.0, 0.0), 0.75, smooth_plastic);

    // Clockwise seen from the camera, so the front face points back at it
    let base = Triangle::new(
        Vec3::new(-0.75, 1.5, 0.0),
        Vec3::new(0.75, 0.0, 0.0),
        Vec3::new(-0.75, 0.0, 0.0),
    );

    let mut animated = Vec::new();
    for (cull_mode, x) in [
        (CullMode::BackFace, -1.75),
        (CullMode::FrontFace, 0.0),
        (CullMode::None, 1.75),
    ] {
        let mut mesh = TriangleMesh::new(cull_mode, white);
        mesh.append_triangle(&base);
        mesh.translate(Vec3::new(x, 4.5, 0.0));
        animated.push(scene.add_mesh(mesh));
    }

    add_warm_lights(&mut scene);

    DemoScene {
        scene,
        animated,
        animation: Animation::Oscillate,
    }
}

fn spheres() -> DemoScene {
    let mut scene = Scene::new();
    let camera = scene.camera_mut();
    camera.set_origin(Vec3::new(0.0, 3.0, -9.0));
    camera.set_fov_angle(45.0);

    let red = MaterialId::DEFAULT;
    let blue = scene.add_material(Material::solid_color(colors::BLUE));
    let yellow = scene.add_material(Material::solid_color(colors::YELLOW));
    let green = scene.add_material(Material::solid_color(colors::GREEN));
    let magenta = scene.add_material(Material::solid_color(colors::MAGENTA));

    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, green);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), -Vec3::X, green);
    scene.add_plane(Vec3::ZERO, Vec3::Y, yellow);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y, yellow);
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, magenta);

    for (i, x) in [-1.75, 0.0, 1.75].into_iter().enumerate() {
        let (bottom, top) = if i % 2 == 0 { (red, blue) } else { (blue, red) };
        scene.add_sphere(Vec3::new(x, 1.0, 0.0), 0.75, bottom);
        scene.add_sphere(Vec3::new(x, 3.0, 0.0), 0.75, top);
    }

    scene.add_point_light(Vec3::new(0.0, 5.0, -5.0), 70.0, colors::WHITE);

    DemoScene {
        scene,
        animated: Vec::new(),
        animation: Animation::Still,
    }
}

fn mesh(path: &Path) -> Result<DemoScene> {
    let geometry =
        load_obj(path).with_context(|| format!("Failed to load mesh from {}", path.display()))?;

    let mut scene = Scene::new();
    let camera = scene.camera_mut();
    camera.set_origin(Vec3::new(0.0, 1.0, -5.0));
    camera.set_fov_angle(45.0);

    let walls = scene.add_material(Material::lambert(Color::new(0.49, 0.57, 0.57), 1.0));
    let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));
    add_box(&mut scene, walls);

    let mut mesh = TriangleMesh::from_mesh(&geometry, CullMode::BackFace, white);
    mesh.scale(Vec3::splat(0.7));
    mesh.translate(Vec3::new(0.0, 1.0, 0.0));
    let handle = scene.add_mesh(mesh);

    add_warm_lights(&mut scene);

    Ok(DemoScene {
        scene,
        animated: vec![handle],
        animation: Animation::Spin,
    })
}

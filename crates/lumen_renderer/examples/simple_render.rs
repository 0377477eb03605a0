//! Simple ray tracer example.
//!
//! Renders a box of Lambert walls with a row of Cook-Torrance spheres and
//! saves the result in PPM format.

use lumen_renderer::{colors, Color, ImageBuffer, Material, RenderConfig, Renderer, Scene, Vec3};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    println!("Lumen Ray Tracer - Simple Example");
    println!("=================================");

    let start = std::time::Instant::now();
    let mut scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let mut renderer = Renderer::new(640, 480, RenderConfig::default());

    let start = std::time::Instant::now();
    let image = renderer.render(&mut scene);
    println!("Rendered {}x{} in {:?}", image.width(), image.height(), start.elapsed());

    let filename = "output.ppm";
    save_ppm(image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    let camera = scene.camera_mut();
    camera.set_origin(Vec3::new(0.0, 1.0, -5.0));
    camera.set_fov_angle(45.0);

    let walls = scene.add_material(Material::lambert(Color::new(0.49, 0.57, 0.57), 1.0));
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, walls);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), -Vec3::X, walls);
    scene.add_plane(Vec3::ZERO, Vec3::Y, walls);
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, walls);

    let silver = Color::new(0.972, 0.960, 0.915);
    let metal = scene.add_material(Material::cook_torrance(silver, 1.0, 0.4));
    let plastic = scene.add_material(Material::cook_torrance(Color::splat(0.75), 0.0, 0.4));
    let phong = scene.add_material(Material::lambert_phong(colors::BLUE, 0.5, 0.5, 15.0));
    scene.add_sphere(Vec3::new(-1.75, 1.0, 0.0), 0.75, metal);
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 0.75, plastic);
    scene.add_sphere(Vec3::new(1.75, 1.0, 0.0), 0.75, phong);

    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45));

    scene
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b] = image.rgb(x, y);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}

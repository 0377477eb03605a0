//! Per-pixel render pipeline.
//!
//! One primary ray per pixel, closest-hit visibility and direct lighting
//! from every light with optional hard shadows. Pixels are independent,
//! so the image is split into rows and rendered with rayon.

use crate::{Camera, HitRecord, Ray, Scene};
use lumen_math::{Color, ColorExt, Mat4, Vec3, RAY_EPSILON};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Distance a shadow ray origin is pushed along the surface normal so the
/// ray does not re-hit the surface it starts on.
pub const SHADOW_OFFSET: f32 = 1e-3;

/// Which part of the lighting equation ends up in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingMode {
    /// Lambert cosine term only, as grayscale
    ObservedArea,
    /// Incident light only
    Radiance,
    /// Material response only
    Brdf,
    /// Radiance × cosine × BRDF
    #[default]
    Combined,
}

impl LightingMode {
    /// The mode after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            LightingMode::ObservedArea => LightingMode::Radiance,
            LightingMode::Radiance => LightingMode::Brdf,
            LightingMode::Brdf => LightingMode::Combined,
            LightingMode::Combined => LightingMode::ObservedArea,
        }
    }
}

impl fmt::Display for LightingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LightingMode::ObservedArea => "observed area",
            LightingMode::Radiance => "radiance",
            LightingMode::Brdf => "BRDF",
            LightingMode::Combined => "combined",
        };
        f.write_str(name)
    }
}

/// Render configuration.
///
/// A pass works on its own copy, so changing the renderer's config while
/// a frame is being produced only affects later frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub lighting_mode: LightingMode,
    pub shadows_enabled: bool,
    /// Color of pixels whose ray hits nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lighting_mode: LightingMode::Combined,
            shadows_enabled: true,
            background: Color::ZERO,
        }
    }
}

/// Output pixels, packed as `0x00RRGGBB`, row-major from the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl ImageBuffer {
    /// Create a black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Packed pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Unpacked `[r, g, b]` at (x, y).
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        unpack(self.pixel(x, y))
    }

    /// Tightly packed RGB bytes, the layout `image::RgbImage` expects.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&p| unpack(p)).collect()
    }
}

fn unpack(pixel: u32) -> [u8; 3] {
    [(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8]
}

/// Per-frame ray generation state, computed once before the pixel loop.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    origin: Vec3,
    camera_to_world: Mat4,
    width: f32,
    height: f32,
    aspect_ratio: f32,
    fov_scale: f32,
}

impl FrameContext {
    /// Uses the camera's cached matrix; `Scene::commit` refreshes it.
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        let (width, height) = (width as f32, height as f32);
        Self {
            origin: camera.origin(),
            camera_to_world: camera.camera_to_world(),
            width,
            height,
            aspect_ratio: width / height,
            fov_scale: camera.fov_scale(),
        }
    }

    /// World-space ray through the center of pixel (px, py).
    pub fn primary_ray(&self, px: u32, py: u32) -> Ray {
        let x = (2.0 * (px as f32 + 0.5) / self.width - 1.0) * self.aspect_ratio * self.fov_scale;
        let y = (1.0 - 2.0 * (py as f32 + 0.5) / self.height) * self.fov_scale;

        let direction = Vec3::new(x, y, 1.0).normalize();
        Ray::new(self.origin, self.camera_to_world.transform_vector3(direction))
    }
}

/// The visible hit of one pixel and its final, tone-mapped color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSample {
    pub hit: HitRecord,
    pub color: Color,
}

/// Trace and shade a single pixel.
pub fn render_pixel(
    scene: &Scene,
    frame: &FrameContext,
    config: &RenderConfig,
    px: u32,
    py: u32,
) -> PixelSample {
    let ray = frame.primary_ray(px, py);
    let hit = scene.closest_hit(&ray);

    let color = if hit.did_hit {
        shade(scene, &hit, -ray.direction, config)
    } else {
        config.background
    };

    PixelSample {
        hit,
        color: color.max_to_one(),
    }
}

/// Direct lighting at a hit for the configured lighting mode.
///
/// `view_dir` points from the surface toward the viewer. The result is
/// not tone-mapped.
pub fn shade(scene: &Scene, hit: &HitRecord, view_dir: Vec3, config: &RenderConfig) -> Color {
    let material = scene.material(hit.material);
    let offset = hit.origin + hit.normal * SHADOW_OFFSET;
    let mut color = Color::ZERO;

    for light in scene.lights() {
        let (light_dir, distance) = light.direction_to(offset);
        if light_dir == Vec3::ZERO {
            continue;
        }

        if config.shadows_enabled {
            let shadow_ray = Ray::with_bounds(offset, light_dir, RAY_EPSILON, distance);
            if scene.does_hit(&shadow_ray) {
                continue;
            }
        }

        let observed_area = hit.normal.dot(light_dir);

        match config.lighting_mode {
            LightingMode::ObservedArea => {
                if observed_area > 0.0 {
                    color += Color::splat(observed_area);
                }
            }
            LightingMode::Radiance => color += light.radiance(hit.origin),
            LightingMode::Brdf => color += material.shade(hit, light_dir, view_dir),
            LightingMode::Combined => {
                if observed_area > 0.0 {
                    let brdf = material.shade(hit, light_dir, view_dir);
                    color += light.radiance(hit.origin) * observed_area * brdf;
                }
            }
        }
    }

    color
}

/// Render every pixel of `buffer` in parallel.
///
/// The scene must already be committed. [`Renderer::render`] is the public
/// entry point and commits first.
pub(crate) fn render(scene: &Scene, config: &RenderConfig, buffer: &mut ImageBuffer) {
    debug_assert!(!scene.is_dirty(), "scene rendered before commit");

    let (width, height) = (buffer.width, buffer.height);
    if width == 0 || height == 0 {
        return;
    }

    let start = Instant::now();
    let frame = FrameContext::new(scene.camera(), width, height);

    buffer
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(py, row)| {
            for (px, pixel) in row.iter_mut().enumerate() {
                let sample = render_pixel(scene, &frame, config, px as u32, py as u32);
                *pixel = sample.color.to_packed_rgb();
            }
        });

    log::info!(
        "Rendered {}x{} ({} lighting, shadows {}) in {:.2?}",
        width,
        height,
        config.lighting_mode,
        if config.shadows_enabled { "on" } else { "off" },
        start.elapsed()
    );
}

/// Owns the output buffer and the runtime controls.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    buffer: ImageBuffer,
}

impl Renderer {
    pub fn new(width: u32, height: u32, config: RenderConfig) -> Self {
        Self {
            config,
            buffer: ImageBuffer::new(width, height),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    pub fn cycle_lighting_mode(&mut self) -> LightingMode {
        self.config.lighting_mode = self.config.lighting_mode.next();
        log::info!("Lighting mode: {}", self.config.lighting_mode);
        self.config.lighting_mode
    }

    pub fn toggle_shadows(&mut self) -> bool {
        self.config.shadows_enabled = !self.config.shadows_enabled;
        log::info!(
            "Shadows {}",
            if self.config.shadows_enabled { "enabled" } else { "disabled" }
        );
        self.config.shadows_enabled
    }

    /// Commit the scene, then render a frame with a snapshot of the
    /// current config.
    pub fn render(&mut self, scene: &mut Scene) -> &ImageBuffer {
        scene.commit();

        let config = self.config;
        render(scene, &config, &mut self.buffer);
        &self.buffer
    }

    pub fn buffer(&self) -> &ImageBuffer {
        &self.buffer
    }

    /// Resize the output; the new buffer starts black.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.buffer = ImageBuffer::new(width, height);
    }
}

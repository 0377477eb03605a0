//! Lumen Renderer - CPU ray tracing
//!
//! One primary ray per pixel, closest-hit visibility, direct lighting
//! from point and directional lights with hard shadows.
//!
//! Frame flow: `Camera` → `Renderer` (ray generation) → `Scene`
//! (intersection) → `Material` (shading) → `ImageBuffer`.

mod brdf;
mod camera;
mod hittable;
mod light;
mod material;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod triangle;
mod triangle_mesh;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable};
pub use light::{Light, LightKind};
pub use material::{CookTorrance, Lambert, LambertPhong, Material, MaterialId, SolidColor};
pub use plane::Plane;
pub use renderer::{
    render_pixel, shade, FrameContext, ImageBuffer, LightingMode, PixelSample,
    RenderConfig, Renderer, SHADOW_OFFSET,
};
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::{CullMode, Triangle};
pub use triangle_mesh::TriangleMesh;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{colors, Aabb, Color, ColorExt, Interval, Mat4, Ray, Vec3, RAY_EPSILON};

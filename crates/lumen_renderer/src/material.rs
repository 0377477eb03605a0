//! Surface materials.
//!
//! A closed set of shading models. Each variant is a pure function of the
//! hit, the unit direction toward the light and the unit direction toward
//! the viewer.

use crate::{brdf, HitRecord};
use lumen_math::{Color, Vec3};

/// Index of a material owned by a `Scene`.
///
/// Only the scene hands these out, so an id always refers to a material
/// that exists. Index 0 is the scene's default material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MaterialId(usize);

impl MaterialId {
    /// The default material every scene is created with.
    pub const DEFAULT: MaterialId = MaterialId(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Constant color, ignores lighting geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    pub color: Color,
}

/// Ideal diffuse reflector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambert {
    pub color: Color,
    /// Diffuse reflectance
    pub kd: f32,
}

/// Lambert diffuse plus a Phong specular lobe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertPhong {
    pub color: Color,
    pub kd: f32,
    pub ks: f32,
    pub exponent: f32,
}

/// Microfacet model: GGX distribution, Schlick Fresnel, Smith geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CookTorrance {
    pub albedo: Color,
    /// 0 = dielectric, 1 = metal
    pub metalness: f32,
    /// Perceptual roughness in `[0, 1]`
    pub roughness: f32,
}

/// Reflectance at normal incidence for dielectrics.
const DIELECTRIC_F0: f32 = 0.04;

impl SolidColor {
    pub fn shade(&self) -> Color {
        self.color
    }
}

impl Lambert {
    pub fn shade(&self) -> Color {
        brdf::lambert(self.kd, self.color)
    }
}

impl LambertPhong {
    pub fn shade(&self, normal: Vec3, light_dir: Vec3, view_dir: Vec3) -> Color {
        let diffuse = brdf::lambert(self.kd, self.color);
        let specular = brdf::phong(self.ks, self.exponent, light_dir, view_dir, normal);
        diffuse + Color::splat(specular)
    }
}

impl CookTorrance {
    pub fn shade(&self, normal: Vec3, light_dir: Vec3, view_dir: Vec3) -> Color {
        let f0 = Color::splat(DIELECTRIC_F0).lerp(self.albedo, self.metalness);
        let half = (view_dir + light_dir).normalize_or_zero();

        let fresnel = brdf::fresnel_schlick(half, view_dir, f0);
        let n_dot_l = normal.dot(light_dir).max(0.0);
        let n_dot_v = normal.dot(view_dir).max(0.0);

        let specular = if n_dot_l > 0.0 && n_dot_v > 0.0 {
            let d = brdf::normal_distribution_ggx(normal, half, self.roughness);
            let g = brdf::geometry_smith(normal, view_dir, light_dir, self.roughness);
            fresnel * (d * g / (4.0 * n_dot_v * n_dot_l))
        } else {
            Color::ZERO
        };

        let kd = (Vec3::ONE - fresnel) * (1.0 - self.metalness);
        let diffuse = brdf::lambert(1.0, kd * self.albedo);

        diffuse + specular
    }
}

/// Shading model of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    SolidColor(SolidColor),
    Lambert(Lambert),
    LambertPhong(LambertPhong),
    CookTorrance(CookTorrance),
}

impl Material {
    pub fn solid_color(color: Color) -> Self {
        Material::SolidColor(SolidColor { color })
    }

    pub fn lambert(color: Color, kd: f32) -> Self {
        Material::Lambert(Lambert { color, kd })
    }

    pub fn lambert_phong(color: Color, kd: f32, ks: f32, exponent: f32) -> Self {
        Material::LambertPhong(LambertPhong {
            color,
            kd,
            ks,
            exponent,
        })
    }

    pub fn cook_torrance(albedo: Color, metalness: f32, roughness: f32) -> Self {
        Material::CookTorrance(CookTorrance {
            albedo,
            metalness: metalness.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
        })
    }

    /// Reflected color for light arriving from `light_dir` and leaving
    /// toward `view_dir`. Both point away from the surface.
    pub fn shade(&self, hit: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color {
        match self {
            Material::SolidColor(m) => m.shade(),
            Material::Lambert(m) => m.shade(),
            Material::LambertPhong(m) => m.shade(hit.normal, light_dir, view_dir),
            Material::CookTorrance(m) => m.shade(hit.normal, light_dir, view_dir),
        }
    }
}

impl Default for Material {
    /// Solid red, the color a surface shows when nothing else was assigned.
    fn default() -> Self {
        Material::solid_color(lumen_math::colors::RED)
    }
}

use lumen_math::{Color, Vec3};
use std::f32::consts::PI;

/// Lowest squared roughness the GGX lobe accepts; zero would collapse
/// the distribution into a spike that evaluates to NaN at `n·h = 1`.
const MIN_ALPHA_SQ: f32 = 1e-6;

pub fn lambert(kd: f32, color: Color) -> Color {
    color * kd / PI
}

pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Phong specular lobe around the mirror direction of `l`.
pub fn phong(ks: f32, exponent: f32, l: Vec3, v: Vec3, n: Vec3) -> f32 {
    let r = reflect(-l, n);
    let cos_alpha = r.dot(v).max(0.0);
    ks * cos_alpha.powf(exponent)
}

pub fn fresnel_schlick(h: Vec3, v: Vec3, f0: Color) -> Color {
    let cos_theta = h.dot(v).clamp(0.0, 1.0);
    f0 + (Vec3::ONE - f0) * (1.0 - cos_theta).powi(5)
}

/// GGX / Trowbridge-Reitz normal distribution. `roughness` is the
/// perceptual roughness, squared once here.
pub fn normal_distribution_ggx(n: Vec3, h: Vec3, roughness: f32) -> f32 {
    let alpha = roughness * roughness;
    let a2 = (alpha * alpha).max(MIN_ALPHA_SQ);
    let n_dot_h = n.dot(h).max(0.0);
    let denom = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom)
}

pub fn geometry_schlick_ggx(n: Vec3, v: Vec3, roughness: f32) -> f32 {
    let alpha = roughness * roughness;
    let k = (alpha + 1.0) * (alpha + 1.0) / 8.0;
    let n_dot_v = n.dot(v).max(0.0);
    n_dot_v / (n_dot_v * (1.0 - k) + k)
}

/// Smith masking-shadowing: one Schlick-GGX term per direction.
pub fn geometry_smith(n: Vec3, v: Vec3, l: Vec3, roughness: f32) -> f32 {
    geometry_schlick_ggx(n, v, roughness) * geometry_schlick_ggx(n, l, roughness)
}

//! Point and directional lights.

use lumen_math::{Color, Vec3};

/// Where a light's energy comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Radiates from a position, falling off with the squared distance.
    Point { origin: Vec3 },
    /// Parallel rays travelling along `direction`, no falloff.
    Directional { direction: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
}

impl Light {
    pub fn point(origin: Vec3, intensity: f32, color: Color) -> Self {
        Self {
            kind: LightKind::Point { origin },
            color,
            intensity,
        }
    }

    /// `direction` is the way the light travels, e.g. `-Y` for light
    /// shining straight down.
    pub fn directional(direction: Vec3, intensity: f32, color: Color) -> Self {
        Self {
            kind: LightKind::Directional {
                direction: direction.normalize_or_zero(),
            },
            color,
            intensity,
        }
    }

    /// Unit direction from `target` toward the light and the distance to it.
    ///
    /// Directional lights are infinitely far away and report `f32::MAX`.
    /// A point light sitting exactly on `target` yields a zero direction.
    pub fn direction_to(&self, target: Vec3) -> (Vec3, f32) {
        match self.kind {
            LightKind::Point { origin } => {
                let to_light = origin - target;
                let distance = to_light.length();
                (to_light.normalize_or_zero(), distance)
            }
            LightKind::Directional { direction } => (-direction, f32::MAX),
        }
    }

    /// Incident radiance at `target`, ignoring occlusion.
    pub fn radiance(&self, target: Vec3) -> Color {
        let irradiance = self.color * self.intensity;

        match self.kind {
            LightKind::Point { origin } => {
                let distance_sq = origin.distance_squared(target);
                if distance_sq > 0.0 {
                    irradiance / distance_sq
                } else {
                    Color::ZERO
                }
            }
            LightKind::Directional { .. } => irradiance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_light_direction() {
        let light = Light::point(Vec3::new(0.0, 5.0, 0.0), 25.0, Color::ONE);
        let (dir, distance) = light.direction_to(Vec3::new(0.0, 1.0, 0.0));

        assert!((dir - Vec3::Y).length() < 1e-6);
        assert!((distance - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_light_inverse_square() {
        let light = Light::point(Vec3::ZERO, 50.0, Color::new(1.0, 0.5, 0.0));

        let near = light.radiance(Vec3::new(0.0, 0.0, 1.0));
        let far = light.radiance(Vec3::new(0.0, 0.0, 2.0));
        assert!((near - Color::new(50.0, 25.0, 0.0)).length() < 1e-4);
        assert!((near.x / far.x - 4.0).abs() < 1e-4);
        assert_eq!(light.radiance(Vec3::ZERO), Color::ZERO);
    }

    #[test]
    fn test_directional_light() {
        let light = Light::directional(Vec3::new(0.0, -2.0, 0.0), 2.0, Color::ONE);
        let (dir, distance) = light.direction_to(Vec3::new(100.0, -3.0, 7.0));

        assert_eq!(dir, Vec3::Y);
        assert_eq!(distance, f32::MAX);
        assert_eq!(light.radiance(Vec3::splat(1e6)), Color::splat(2.0));
    }
}

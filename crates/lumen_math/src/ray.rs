use crate::{Interval, Vec3};

/// Default lower bound for ray parameters, keeps rays from re-hitting
/// the surface they start on.
pub const RAY_EPSILON: f32 = 1e-4;

/// A ray in 3D space with a valid parametric range `[min, max]`.
///
/// The direction is not required to be normalized; `t` is always measured
/// in units of `direction`, so `min`/`max` must be chosen with that in mind.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub min: f32,
    pub max: f32,
}

impl Ray {
    /// Create a ray covering `[RAY_EPSILON, f32::MAX]`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            min: RAY_EPSILON,
            max: f32::MAX,
        }
    }

    /// Create a ray with an explicit parametric range.
    pub fn with_bounds(origin: Vec3, direction: Vec3, min: f32, max: f32) -> Self {
        Self {
            origin,
            direction,
            min,
            max,
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The valid parameter range as an interval.
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.min, self.max)
    }
}

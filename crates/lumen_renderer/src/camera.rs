//! Pinhole camera.
//!
//! Orientation is stored as accumulated pitch and yaw. The basis and the
//! camera-to-world matrix are rebuilt once per frame by
//! [`Camera::calculate_camera_to_world`] and then shared by every pixel.

use lumen_math::{Mat4, Mat4Ext, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Pitch stays this far from straight up/down so `forward` never lines up
/// with the world up vector.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 1e-3;

const WORLD_UP: Vec3 = Vec3::Y;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    origin: Vec3,
    /// Vertical field of view in degrees
    fov_angle: f32,

    total_pitch: f32,
    total_yaw: f32,

    forward: Vec3,
    right: Vec3,
    up: Vec3,
    camera_to_world: Mat4,
    /// Set by every mutator, cleared when the matrix is rebuilt
    dirty: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 90.0)
    }
}

impl Camera {
    /// Camera at `origin` looking down +Z.
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        let mut camera = Self {
            origin,
            fov_angle,
            total_pitch: 0.0,
            total_yaw: 0.0,
            forward: Vec3::Z,
            right: Vec3::X,
            up: Vec3::Y,
            camera_to_world: Mat4::IDENTITY,
            dirty: true,
        };
        camera.calculate_camera_to_world();
        camera
    }

    /// Accumulate a rotation in radians. Positive pitch looks up, positive
    /// yaw turns toward +X.
    pub fn rotate(&mut self, delta_pitch: f32, delta_yaw: f32) {
        self.total_pitch = (self.total_pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.total_yaw += delta_yaw;

        let (sin_pitch, cos_pitch) = self.total_pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.total_yaw.sin_cos();
        self.forward = Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch).normalize();
        self.dirty = true;
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.origin += delta;
        self.dirty = true;
    }

    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
        self.dirty = true;
    }

    pub fn set_fov_angle(&mut self, degrees: f32) {
        self.fov_angle = degrees;
        self.dirty = true;
    }

    /// Rebuild the orthonormal basis from `forward` and cache the
    /// camera-to-world matrix.
    pub fn calculate_camera_to_world(&mut self) -> Mat4 {
        self.right = WORLD_UP.cross(self.forward).normalize();
        self.up = self.forward.cross(self.right).normalize();
        self.camera_to_world = Mat4::from_basis(self.right, self.up, self.forward, self.origin);
        self.dirty = false;

        log::debug!(
            "Camera basis: right {:?}, up {:?}, forward {:?}",
            self.right,
            self.up,
            self.forward
        );
        self.camera_to_world
    }

    /// True when the cached matrix no longer matches the camera's pose.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn fov_angle(&self) -> f32 {
        self.fov_angle
    }

    /// `tan(fov / 2)`, the half-width of the image plane at distance 1.
    pub fn fov_scale(&self) -> f32 {
        (self.fov_angle.to_radians() / 2.0).tan()
    }

    pub fn look_direction(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// The matrix cached by the last [`Camera::calculate_camera_to_world`].
    pub fn camera_to_world(&self) -> Mat4 {
        self.camera_to_world
    }
}

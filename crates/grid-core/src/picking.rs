//! Casting the pointer onto the floor.

use crate::pointer::PointerState;
use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera `height` units above the origin looking straight down at the floor.
    /// Screen-up points towards -Z so rows run top to bottom on screen.
    pub fn top_down(height: f32, fov_deg: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, height, 0.0),
            target: Vec3::ZERO,
            up: Vec3::NEG_Z,
            aspect,
            fovy_radians: fov_deg.to_radians(),
            znear: crate::constants::CAMERA_ZNEAR,
            zfar: crate::constants::CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through an NDC point, as `(origin, direction)`.
    pub fn ray_through(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye;
        let rd = (p1 - ro).normalize_or_zero();
        (ro, rd)
    }
}

/// Where the pointer ray meets the ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionPoint {
    pub x: f32,
    pub z: f32,
}

/// Ray parameter `t` where `ro + rd * t` crosses the horizontal plane `y = plane_y`.
/// `None` when the ray runs parallel to the plane or the hit lies behind the origin.
#[inline]
pub fn ray_plane_y(ro: Vec3, rd: Vec3, plane_y: f32) -> Option<f32> {
    if rd.y.abs() <= 1e-6 {
        return None;
    }
    let t = (plane_y - ro.y) / rd.y;
    (t >= 0.0).then_some(t)
}

/// Project the pointer through `camera` onto the floor at `ground_y`.
pub fn project(pointer: PointerState, camera: &Camera, ground_y: f32) -> Option<IntersectionPoint> {
    let (ro, rd) = camera.ray_through(pointer.x, pointer.y);
    let t = ray_plane_y(ro, rd, ground_y)?;
    let hit = ro + rd * t;
    Some(IntersectionPoint { x: hit.x, z: hit.z })
}

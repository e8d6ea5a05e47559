//! View and projection composition for the demos.
//!
//! The follow camera trails the runner player; the orbit camera circles a
//! fixed target for the curve and animator demos. Both are presentation
//! concerns only and never feed back into the simulation.

use glam::{Mat4, Vec3, vec3};

const NEAR: f32 = 0.1;
const FAR: f32 = 200.0;

/// Trails a moving target with exponential smoothing.
pub struct FollowCamera {
    position: Vec3,
    target: Vec3,
    /// Offset from the target to the ideal camera position.
    offset: Vec3,
    /// Exponential follow rate, same shape as the runner's lane lerp.
    stiffness: f32,
    pub fov: f32,
}

impl FollowCamera {
    pub fn new(target: Vec3, offset: Vec3, stiffness: f32, fov: f32) -> Self {
        Self {
            position: target + offset,
            target,
            offset,
            stiffness,
            fov,
        }
    }

    /// Moves the camera toward its ideal spot behind the new target.
    pub fn update(&mut self, dt: f32, target: Vec3) {
        self.target = target;
        let ideal = target + self.offset;
        let t = (self.stiffness * dt).clamp(0.0, 1.0);
        self.position += (ideal - self.position) * t;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target + vec3(0.0, 1.0, 4.0), Vec3::Y)
    }

    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, NEAR, FAR)
    }
}

/// Circles a fixed target; driven by mouse drag and scroll.
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
}

impl OrbitCamera {
    pub fn new(target: Vec3, distance: f32, fov: f32) -> Self {
        Self {
            target,
            distance,
            yaw: -90.0,
            pitch: 20.0,
            fov,
        }
    }

    /// Applies a mouse drag in degrees per pixel of motion.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx;
        self.pitch = (self.pitch + dy).clamp(-89.0, 89.0);
    }

    /// Applies scroll-wheel zoom.
    pub fn zoom(&mut self, amount: f32) {
        self.distance = (self.distance - amount).clamp(2.0, 60.0);
    }

    fn eye(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.target
            + vec3(
                yaw.cos() * pitch.cos(),
                pitch.sin(),
                yaw.sin() * pitch.cos(),
            ) * self.distance
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, NEAR, FAR)
    }
}

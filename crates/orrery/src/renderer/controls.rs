use glam::{Vec2, Vec3};

use crate::api::config::ControlsConfig;
use crate::renderer::camera::PerspectiveCamera;

/// Orbit camera controls: drag to rotate around the target, wheel to zoom.
///
/// Input sets goal angles/distance; `update` eases the camera toward them
/// once per frame.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Rotation around Y (radians). 0 looks down -Z from +Z.
    pub azimuth: f32,
    /// Angle above the XZ plane (radians), clamped short of the poles.
    pub elevation: f32,
    pub distance: f32,
    pub target: Vec3,
    goal_azimuth: f32,
    goal_elevation: f32,
    goal_distance: f32,
    config: ControlsConfig,
    drag_from: Option<Vec2>,
}

impl OrbitControls {
    const MAX_ELEVATION: f32 = 1.5; // ~86 degrees

    /// Derive spherical coordinates from the camera's current placement.
    pub fn from_camera(camera: &PerspectiveCamera, config: &ControlsConfig) -> Self {
        let offset = camera.eye - camera.target;
        let distance = offset.length().max(f32::EPSILON);
        let azimuth = offset.x.atan2(offset.z);
        let elevation = (offset.y / distance).clamp(-1.0, 1.0).asin();
        Self {
            azimuth,
            elevation,
            distance,
            target: camera.target,
            goal_azimuth: azimuth,
            goal_elevation: elevation,
            goal_distance: distance,
            config: config.clone(),
            drag_from: None,
        }
    }

    pub fn begin_drag(&mut self, pos: Vec2) {
        self.drag_from = Some(pos);
    }

    /// Rotate by the pointer delta since the previous drag position.
    /// Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, pos: Vec2) {
        let Some(from) = self.drag_from else { return };
        let delta = pos - from;
        self.goal_azimuth -= delta.x * self.config.rotate_speed;
        self.goal_elevation = (self.goal_elevation + delta.y * self.config.rotate_speed)
            .clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
        self.drag_from = Some(pos);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    /// Zoom by wheel notches (positive = zoom in).
    pub fn zoom(&mut self, notches: f32) {
        let factor = self.config.zoom_step.powf(-notches);
        self.goal_distance = (self.goal_distance * factor)
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Ease toward the goal and write the result into the camera.
    pub fn update(&mut self, camera: &mut PerspectiveCamera, dt: f32) {
        let damping = self.config.damping.clamp(0.0, 0.99);
        let lerp_factor = if damping <= 0.0 {
            1.0
        } else {
            1.0 - damping.powf(dt * 60.0)
        };
        self.azimuth += (self.goal_azimuth - self.azimuth) * lerp_factor;
        self.elevation += (self.goal_elevation - self.elevation) * lerp_factor;
        self.distance += (self.goal_distance - self.distance) * lerp_factor;

        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        let offset = Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az) * self.distance;
        camera.eye = self.target + offset;
        camera.target = self.target;
    }
}

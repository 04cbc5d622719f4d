use std::f32::consts::PI;

use glam::{Vec2, Vec3};
use relief_config::schema::ControlsConfig;

use super::spherical::Spherical;
use crate::camera::PerspectiveCamera;

/// Minimum squared camera displacement reported as movement by `update`.
const MOVE_EPSILON: f32 = 1e-6;

/// Closest the camera may get to the target, whatever `min_distance` says.
const MIN_RADIUS: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Rotate,
    Dolly,
    Pan,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    mode: DragMode,
    last: Vec2,
}

/// Orbits a camera around `target`.
///
/// Input handlers accumulate a pending spherical delta, a dolly scale and a
/// pan offset; `update` folds them into the camera. With damping enabled only
/// `damping_factor` of the pending motion is applied per call and the rest
/// decays, so `update` must run once per frame for inertia to play out.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,

    spherical_delta: Spherical,
    scale: f32,
    pan_offset: Vec3,
    drag: Option<Drag>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::from_config(&ControlsConfig::default())
    }
}

impl OrbitControls {
    pub fn from_config(config: &ControlsConfig) -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: config.enable_damping,
            damping_factor: config.damping_factor,
            rotate_speed: config.rotate_speed,
            zoom_speed: config.zoom_speed,
            pan_speed: config.pan_speed,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            spherical_delta: Spherical::default(),
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            drag: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a drag. Left rotates (pans with shift), middle dollies, right pans.
    pub fn pointer_down(&mut self, button: PointerButton, position: Vec2, shift: bool) {
        let mode = match button {
            PointerButton::Left if shift => DragMode::Pan,
            PointerButton::Left => DragMode::Rotate,
            PointerButton::Middle => DragMode::Dolly,
            PointerButton::Right => DragMode::Pan,
        };
        self.drag = Some(Drag {
            mode,
            last: position,
        });
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Feed a cursor position in logical pixels. Returns `true` when a drag
    /// was in progress and the camera was updated.
    pub fn pointer_move(
        &mut self,
        position: Vec2,
        camera: &mut PerspectiveCamera,
        viewport_height: f32,
    ) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let delta = position - drag.last;
        drag.last = position;
        let mode = drag.mode;

        let height = viewport_height.max(1.0);
        match mode {
            DragMode::Rotate => {
                let rotate = delta * self.rotate_speed;
                self.rotate_left(2.0 * PI * rotate.x / height);
                self.rotate_up(2.0 * PI * rotate.y / height);
            }
            DragMode::Dolly => {
                if delta.y > 0.0 {
                    self.dolly_out(self.zoom_scale());
                } else if delta.y < 0.0 {
                    self.dolly_in(self.zoom_scale());
                }
            }
            DragMode::Pan => {
                let pan = delta * self.pan_speed;
                self.pan(pan, camera, height);
            }
        }

        self.update(camera);
        true
    }

    /// Wheel input; positive `delta` zooms in (toward the target).
    pub fn wheel(&mut self, delta: f32, camera: &mut PerspectiveCamera) {
        if delta > 0.0 {
            self.dolly_in(self.zoom_scale());
        } else if delta < 0.0 {
            self.dolly_out(self.zoom_scale());
        } else {
            return;
        }
        self.update(camera);
    }

    /// Apply pending motion to the camera. Returns `true` if it moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let offset = camera.position - self.target;
        let mut spherical = Spherical::from_vec3(offset);

        if self.enable_damping {
            spherical.theta += self.spherical_delta.theta * self.damping_factor;
            spherical.phi += self.spherical_delta.phi * self.damping_factor;
        } else {
            spherical.theta += self.spherical_delta.theta;
            spherical.phi += self.spherical_delta.phi;
        }

        spherical.phi = spherical
            .phi
            .max(self.min_polar_angle)
            .min(self.max_polar_angle);
        spherical.make_safe();

        spherical.radius = (spherical.radius * self.scale)
            .max(self.min_distance)
            .min(self.max_distance)
            .max(MIN_RADIUS);

        if self.enable_damping {
            self.target += self.pan_offset * self.damping_factor;
        } else {
            self.target += self.pan_offset;
        }

        let previous = camera.position;
        camera.position = self.target + spherical.to_vec3();
        camera.look_at(self.target);

        if self.enable_damping {
            let decay = 1.0 - self.damping_factor;
            self.spherical_delta.theta *= decay;
            self.spherical_delta.phi *= decay;
            self.pan_offset *= decay;
        } else {
            self.spherical_delta = Spherical::default();
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        previous.distance_squared(camera.position) > MOVE_EPSILON
    }

    fn zoom_scale(&self) -> f32 {
        0.95f32.powf(self.zoom_speed)
    }

    fn rotate_left(&mut self, angle: f32) {
        self.spherical_delta.theta -= angle;
    }

    fn rotate_up(&mut self, angle: f32) {
        self.spherical_delta.phi -= angle;
    }

    fn dolly_in(&mut self, dolly_scale: f32) {
        self.scale *= dolly_scale;
    }

    fn dolly_out(&mut self, dolly_scale: f32) {
        self.scale /= dolly_scale;
    }

    /// Screen-space pan: one viewport height of drag moves the target by the
    /// visible height at the target distance.
    fn pan(&mut self, delta: Vec2, camera: &PerspectiveCamera, height: f32) {
        let offset = camera.position - self.target;
        let target_distance = offset.length() * (camera.fov.to_radians() / 2.0).tan();
        let world = camera.world_matrix();

        let left = world.x_axis.truncate() * -(2.0 * delta.x * target_distance / height);
        let up = world.y_axis.truncate() * (2.0 * delta.y * target_distance / height);
        self.pan_offset += left + up;
    }
}

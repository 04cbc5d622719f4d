//! Perspective camera with a cached projection matrix.

use glam::{Mat4, Vec3};
use relief_config::schema::CameraConfig;

#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Camera from config, placed at the configured position and looking at the origin.
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self::new(config.fov, aspect, config.near, config.far);
        camera.position = Vec3::from_array(config.position);
        camera.look_at(Vec3::ZERO);
        camera
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Must be called after changing `fov`, `aspect`, `near` or `far`.
    pub fn update_projection_matrix(&mut self) {
        let aspect = if self.aspect.is_finite() && self.aspect > 0.0 {
            self.aspect
        } else {
            1.0
        };
        self.projection =
            Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far);
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Camera-to-world transform (inverse of the view matrix).
    pub fn world_matrix(&self) -> Mat4 {
        self.view_matrix().inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn from_config_uses_defaults() {
        let camera = PerspectiveCamera::from_config(&CameraConfig::default(), 1.6);
        assert_eq!(camera.fov, 75.0);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 100.0);
        assert_eq!(camera.position, Vec3::new(1.0, 1.0, 3.0));
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn set_aspect_rebuilds_projection() {
        let mut camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0);
        let before = camera.projection_matrix();
        camera.set_aspect(2.0);
        let after = camera.projection_matrix();
        assert!(approx(after.x_axis.x * 2.0, before.x_axis.x));
        assert!(approx(after.y_axis.y, before.y_axis.y));
    }

    #[test]
    fn stale_projection_until_updated() {
        let mut camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0);
        let before = camera.projection_matrix();
        camera.aspect = 4.0;
        assert_eq!(camera.projection_matrix(), before);
        camera.update_projection_matrix();
        assert_ne!(camera.projection_matrix(), before);
    }

    #[test]
    fn view_matrix_maps_target_onto_negative_z() {
        let camera = PerspectiveCamera::from_config(&CameraConfig::default(), 1.0);
        let eye_space = camera.view_matrix().transform_point3(Vec3::ZERO);
        let distance = Vec3::new(1.0, 1.0, 3.0).length();
        assert!(approx(eye_space.x, 0.0));
        assert!(approx(eye_space.y, 0.0));
        assert!(approx(eye_space.z, -distance));
    }

    #[test]
    fn world_matrix_translation_is_camera_position() {
        let camera = PerspectiveCamera::from_config(&CameraConfig::default(), 1.0);
        let origin = camera.world_matrix().transform_point3(Vec3::ZERO);
        assert!(approx(origin.x, 1.0));
        assert!(approx(origin.y, 1.0));
        assert!(approx(origin.z, 3.0));
    }

    #[test]
    fn degenerate_aspect_falls_back_to_square() {
        let mut camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0);
        let square = camera.projection_matrix();
        camera.set_aspect(f32::NAN);
        assert_eq!(camera.projection_matrix(), square);
    }
}

//! Frame rendering and resize handling.

use winit::dpi::PhysicalSize;

use super::core::ReliefApp;

impl ReliefApp {
    /// Render a single frame of the scene.
    pub(super) fn render_frame(&mut self) {
        if let Some(ref mut rs) = self.render_state {
            if let Err(e) = rs.render_frame(&self.camera, self.mesh.as_ref()) {
                tracing::error!("Render error: {e}");
            }
        }
    }

    /// Apply a new inner size and scale factor: camera aspect, drawing
    /// buffer, then an immediate frame.
    pub(super) fn handle_resize(&mut self, size: PhysicalSize<u32>, scale_factor: f64) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        let max_ratio = self.config.window.max_pixel_ratio;
        self.viewport =
            relief_renderer::Viewport::from_physical(size.width, size.height, scale_factor, max_ratio);
        self.camera.set_aspect(self.viewport.aspect());

        let buffer = self.viewport.drawing_buffer_size();
        if let Some(ref mut rs) = self.render_state {
            rs.resize(buffer);
        }
        tracing::debug!(
            width = buffer.width,
            height = buffer.height,
            aspect = self.viewport.aspect(),
            "Viewport resized"
        );
        self.render_frame();
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use relief_config::ReliefConfig;

    use super::*;

    #[test]
    fn resize_updates_camera_aspect_without_renderer() {
        let mut app = ReliefApp::new(ReliefConfig::default());
        app.handle_resize(PhysicalSize::new(1600, 800), 2.0);

        assert!((app.camera.aspect - 2.0).abs() < 1e-6);
        assert_eq!(app.viewport.size().width, 800.0);
        // Default pixel ratio cap is 2.
        assert_eq!(app.viewport.drawing_buffer_size().width, 1600);
    }

    #[test]
    fn zero_size_resize_is_ignored() {
        let mut app = ReliefApp::new(ReliefConfig::default());
        let before = app.camera.aspect;
        app.handle_resize(PhysicalSize::new(0, 600), 1.0);
        assert_eq!(app.camera.aspect, before);
    }
}

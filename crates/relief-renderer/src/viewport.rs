//! Logical window size, device pixel ratio and the derived drawing-buffer size.

use relief_common::LogicalSize;

use crate::gpu::PhysicalSize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    size: LogicalSize,
    device_pixel_ratio: f64,
    max_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(size: LogicalSize, device_pixel_ratio: f64, max_pixel_ratio: f64) -> Self {
        Self {
            size,
            device_pixel_ratio,
            max_pixel_ratio,
        }
    }

    /// Build a viewport from the physical inner size and scale factor winit reports.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64, max_pixel_ratio: f64) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self::new(
            LogicalSize::new(width as f64 / scale, height as f64 / scale),
            scale,
            max_pixel_ratio,
        )
    }

    pub fn size(&self) -> LogicalSize {
        self.size
    }

    pub fn aspect(&self) -> f32 {
        self.size.aspect() as f32
    }

    /// The device pixel ratio clamped to the configured maximum.
    pub fn pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio.min(self.max_pixel_ratio)
    }

    /// Drawing-buffer size in device pixels, never smaller than 1x1.
    pub fn drawing_buffer_size(&self) -> PhysicalSize {
        let ratio = self.pixel_ratio();
        PhysicalSize::new(
            (self.size.width * ratio).round() as u32,
            (self.size.height * ratio).round() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_is_clamped_to_max() {
        let vp = Viewport::new(LogicalSize::new(800.0, 600.0), 3.0, 2.0);
        assert_eq!(vp.pixel_ratio(), 2.0);
        assert_eq!(vp.drawing_buffer_size(), PhysicalSize::new(1600, 1200));
    }

    #[test]
    fn low_density_display_keeps_its_ratio() {
        let vp = Viewport::new(LogicalSize::new(1000.0, 500.0), 1.0, 2.0);
        assert_eq!(vp.pixel_ratio(), 1.0);
        assert_eq!(vp.drawing_buffer_size(), PhysicalSize::new(1000, 500));
        assert!((vp.aspect() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn fractional_ratio_rounds_buffer_size() {
        let vp = Viewport::new(LogicalSize::new(101.0, 51.0), 1.5, 2.0);
        assert_eq!(vp.drawing_buffer_size(), PhysicalSize::new(152, 77));
    }

    #[test]
    fn physical_resize_updates_aspect_and_buffer() {
        let vp = Viewport::from_physical(2400, 800, 2.0, 2.0);
        assert!((vp.aspect() - 3.0).abs() < 1e-6);
        assert_eq!(vp.drawing_buffer_size(), PhysicalSize::new(2400, 800));
    }

    #[test]
    fn minimized_window_yields_one_pixel_buffer() {
        let vp = Viewport::new(LogicalSize::new(0.0, 0.0), 2.0, 2.0);
        assert_eq!(vp.drawing_buffer_size(), PhysicalSize::new(1, 1));
    }

    #[test]
    fn from_physical_recovers_logical_size() {
        let vp = Viewport::from_physical(2560, 1600, 2.0, 2.0);
        assert_eq!(vp.size(), LogicalSize::new(1280.0, 800.0));
        assert_eq!(vp.drawing_buffer_size(), PhysicalSize::new(2560, 1600));

        let vp = Viewport::from_physical(3000, 1500, 3.0, 2.0);
        assert_eq!(vp.size(), LogicalSize::new(1000.0, 500.0));
        assert_eq!(vp.drawing_buffer_size(), PhysicalSize::new(2000, 1000));
    }
}

use std::sync::Arc;
use winit::window::Window;

use relief_common::Color;

use super::depth::DepthTarget;
use super::helpers::clear_color;
use crate::geometry::TextGeometry;
use crate::gpu::{GpuContext, PhysicalSize, RendererError};
use crate::matcap::{MatcapImage, MatcapPipeline};

/// Core rendering state: GPU context, depth buffer and the matcap pipeline.
pub struct RenderState {
    pub gpu: GpuContext,
    pub depth: DepthTarget,
    pub matcap: MatcapPipeline,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state for `window` with the given
    /// drawing-buffer size.
    pub async fn new(
        window: Arc<Window>,
        size: PhysicalSize,
        vsync: bool,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, size, vsync).await?;
        let depth = DepthTarget::new(&gpu.device, gpu.size);
        let matcap = MatcapPipeline::new(&gpu.device, &gpu.queue, gpu.format());

        Ok(Self {
            gpu,
            depth,
            matcap,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Reconfigure the surface and depth buffer for a new drawing-buffer size.
    pub fn resize(&mut self, size: PhysicalSize) {
        if size == self.gpu.size {
            return;
        }
        self.gpu.resize(size);
        self.depth.resize(&self.gpu.device, size);
    }

    pub fn set_clear_color(&mut self, color: &Color) {
        self.clear_color = clear_color(color);
    }

    pub fn set_matcap(&mut self, image: &MatcapImage) {
        self.matcap.set_matcap(&self.gpu.device, &self.gpu.queue, image);
    }

    /// Replace the uploaded text geometry, destroying the previous buffer.
    pub fn set_mesh(&mut self, geometry: &TextGeometry) {
        self.matcap.set_mesh(&self.gpu.device, geometry);
    }
}

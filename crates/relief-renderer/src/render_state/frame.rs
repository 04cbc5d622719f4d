use crate::camera::PerspectiveCamera;
use crate::gpu::RendererError;
use crate::matcap::MatcapUniforms;
use crate::text_mesh::TextMesh;

use super::helpers::log_first_frame;
use super::state::RenderState;

impl RenderState {
    /// Render one frame of the scene: clear, then draw the text mesh if any.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render_frame(
        &mut self,
        camera: &PerspectiveCamera,
        mesh: Option<&TextMesh>,
    ) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("Surface texture timed out, skipping frame");
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        if let Some(mesh) = mesh {
            let uniforms = MatcapUniforms::new(
                mesh.model_matrix(),
                camera.view_matrix(),
                camera.projection_matrix(),
            );
            self.matcap.update_uniforms(&self.gpu.queue, &uniforms);
        }

        let mut encoder =
            self.gpu
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("relief frame encoder"),
                });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("relief main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if mesh.is_some() {
                self.matcap.draw(&mut pass);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}

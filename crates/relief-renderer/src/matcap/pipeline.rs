//! wgpu render pipeline for matcap-shaded meshes.

use glam::{Mat3, Mat4};

use super::texture::{MatcapImage, MatcapTexture};
use crate::geometry::{MeshVertex, TextGeometry};
use crate::render_state::DEPTH_FORMAT;

/// Per-frame transforms, uploaded to binding 0.
///
/// All matrices are column-major. `normal_matrix` is the inverse transpose
/// of model-view, padded to 4x4 for uniform alignment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MatcapUniforms {
    pub model: [f32; 16],
    pub view: [f32; 16],
    pub projection: [f32; 16],
    pub normal_matrix: [f32; 16],
}

impl MatcapUniforms {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        let normal = Mat3::from_mat4(view * model).inverse().transpose();
        Self {
            model: model.to_cols_array(),
            view: view.to_cols_array(),
            projection: projection.to_cols_array(),
            normal_matrix: Mat4::from_mat3(normal).to_cols_array(),
        }
    }
}

/// GPU copy of a text geometry.
pub struct MeshBuffer {
    pub buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

pub struct MatcapPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub uniform_buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    texture: MatcapTexture,
    mesh: Option<MeshBuffer>,
}

impl MatcapPipeline {
    /// Create the pipeline with the placeholder matcap bound and no mesh.
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("matcap shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/matcap.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("matcap uniforms"),
            size: std::mem::size_of::<MatcapUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("matcap bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<MatcapUniforms>() as u64,
                        ),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let texture = MatcapTexture::upload(device, queue, &MatcapImage::placeholder());
        let bind_group =
            Self::create_bind_group(device, &bind_group_layout, &uniform_buffer, &texture);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("matcap pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("matcap pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[MeshVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group_layout,
            bind_group,
            texture,
            mesh: None,
        }
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        uniform_buffer: &wgpu::Buffer,
        texture: &MatcapTexture,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("matcap bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        })
    }

    /// Replace the bound matcap, releasing the previous texture.
    pub fn set_matcap(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, image: &MatcapImage) {
        let texture = MatcapTexture::upload(device, queue, image);
        let bind_group =
            Self::create_bind_group(device, &self.bind_group_layout, &self.uniform_buffer, &texture);
        let old = std::mem::replace(&mut self.texture, texture);
        old.texture.destroy();
        self.bind_group = bind_group;
    }

    /// Upload new geometry. The previous vertex buffer is destroyed first;
    /// empty geometry leaves nothing to draw.
    pub fn set_mesh(&mut self, device: &wgpu::Device, geometry: &TextGeometry) {
        use wgpu::util::DeviceExt;

        if let Some(old) = self.mesh.take() {
            old.buffer.destroy();
        }
        if geometry.is_empty() {
            return;
        }

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("text vertex buffer"),
            contents: bytemuck::cast_slice(geometry.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        self.mesh = Some(MeshBuffer {
            buffer,
            vertex_count: geometry.vertex_count() as u32,
        });
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &MatcapUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Record the mesh draw into an open pass. No-op without a mesh.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        let Some(mesh) = &self.mesh else {
            return;
        };
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, mesh.buffer.slice(..));
        pass.draw(0..mesh.vertex_count, 0..1);
    }
}

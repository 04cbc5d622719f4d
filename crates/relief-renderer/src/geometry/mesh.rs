use glam::Vec3;

use super::bounds::Aabb;

/// A single vertex of the text mesh.
///
/// Layout: position(vec3) + normal(vec3) = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// wgpu vertex buffer layout for `MeshVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };

    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Non-indexed triangle list plus its bounding box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextGeometry {
    vertices: Vec<MeshVertex>,
    bounding_box: Aabb,
}

impl TextGeometry {
    pub fn new(vertices: Vec<MeshVertex>) -> Self {
        let bounding_box = Aabb::from_points(vertices.iter().map(|v| Vec3::from(v.position)));
        Self {
            vertices,
            bounding_box,
        }
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn bounding_box(&self) -> Aabb {
        self.bounding_box
    }

    /// Translate every vertex so the bounding-box centre sits at the origin.
    pub fn center(&mut self) {
        let offset = -self.bounding_box.center();
        if offset == Vec3::ZERO {
            return;
        }
        for v in &mut self.vertices {
            v.position = (Vec3::from(v.position) + offset).to_array();
        }
        self.bounding_box = self.bounding_box.translated(offset);
    }
}

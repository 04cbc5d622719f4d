pub mod camera;
pub mod controls;
pub mod font;
pub mod geometry;
pub mod gpu;
pub mod matcap;
pub mod render_state;
pub mod text_mesh;
pub mod viewport;

#[cfg(test)]
mod test_support;

pub use camera::PerspectiveCamera;
pub use controls::{OrbitControls, PointerButton};
pub use font::{Font, FontError, FontFormat};
pub use geometry::{Aabb, GeometryError, MeshVertex, TextGeometry};
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use matcap::MatcapImage;
pub use render_state::RenderState;
pub use text_mesh::{TextMesh, TextMeshBuilder, TextStyle};
pub use viewport::Viewport;

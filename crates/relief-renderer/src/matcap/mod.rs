//! Matcap material: texture decoding/upload and the mesh pipeline.
//!
//! Shading looks up a sphere texture with the view-space normal, so no
//! lights are involved.

mod pipeline;
mod texture;

pub use pipeline::{MatcapPipeline, MatcapUniforms, MeshBuffer};
pub use texture::{MatcapImage, MatcapTexture};

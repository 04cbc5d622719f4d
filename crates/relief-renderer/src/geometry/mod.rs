//! Extruded text geometry: outline flattening, contour orientation, bevelled
//! extrusion and cap tessellation, producing a flat-shaded triangle list.

mod bounds;
mod cap;
mod contour;
mod extrude;
mod mesh;


pub use bounds::Aabb;
pub use contour::{classify_contours, flatten, miter_directions, signed_area, Contour};
pub use extrude::{extrude_glyph, Bevel, ExtrudeSettings, Layer};
pub use mesh::{MeshVertex, TextGeometry};

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("cap tessellation failed: {0}")]
    Tessellation(String),
}

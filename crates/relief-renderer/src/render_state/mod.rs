//! Surface, depth buffer and matcap pipeline tied together per window.

mod depth;
mod frame;
mod helpers;
mod state;

pub use depth::{DepthTarget, DEPTH_FORMAT};
pub use state::RenderState;

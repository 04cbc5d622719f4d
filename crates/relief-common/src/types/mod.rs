mod color;
mod size;

pub use color::*;
pub use size::*;

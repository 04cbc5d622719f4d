//! Orbit camera controls: rotate, pan and dolly around a target with
//! optional inertial damping.

mod orbit;
mod spherical;


pub use orbit::{OrbitControls, PointerButton};
pub use spherical::Spherical;

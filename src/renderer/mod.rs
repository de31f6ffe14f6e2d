//! WebGPU rendering module
//!
//! Flat-colored triangle meshes. The simulation hands over a read-only view
//! each frame and this module turns it into pixels; nothing here feeds back
//! into gameplay.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;

//! WebGPU rendering module
//!
//! The simulation records a [`DrawList`](crate::canvas::DrawList) each frame;
//! `shapes` tessellates it into colored triangles and `pipeline` draws them.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;

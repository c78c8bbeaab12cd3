//! WebGPU rendering module
//!
//! The city is drawn as a flat plan view: `mesh` tessellates the scene on the
//! CPU each frame and `pipeline` pushes the triangles through one shader.

pub mod mesh;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use mesh::build_scene;
pub use pipeline::RenderState;
pub use vertex::Vertex;

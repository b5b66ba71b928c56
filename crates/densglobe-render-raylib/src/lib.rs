//! Raylib-side rendering for the density globe: the morph-blending shader,
//! GPU upload of the morph mesh, and the backdrop sphere.
// Unsafe is required for Raylib mesh upload and raw vertex-attribute binding in this crate.

mod globe;
mod gpu_mesh;
mod morph_shader;
pub mod shader_template;

pub use globe::GlobeModel;
pub use gpu_mesh::GpuMorphMesh;
pub use morph_shader::MorphShader;
pub use shader_template::{MorphShaderTemplate, ShaderPatchError};

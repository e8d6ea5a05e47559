//! Mesh building and the GLSL sources under `render/shaders/`.

pub mod meshing;

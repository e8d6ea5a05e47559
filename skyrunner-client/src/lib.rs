//! SDL2 + OpenGL presentation layer for the Skyrunner demos.
//!
//! Each demo is a separate binary under `src/bin/`; this library carries
//! the shared plumbing: window/context setup, shader and mesh wrappers,
//! cameras, settings and logging.

pub mod abs;
pub mod camera;
pub mod config;
pub mod logger;
pub mod other;
pub mod render;

/// Compiles and links one of the shader programs under
/// `src/render/shaders/<name>/`. `$path_prefix` is the caller's path back
/// to `src` (`"."` from the crate root, `".."` from `src/bin`).
#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr, $path_prefix:literal) => {{
        let vert = $crate::abs::Shader::new(
            &$gl,
            glow::VERTEX_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
        )
        .unwrap();
        let frag = $crate::abs::Shader::new(
            &$gl,
            glow::FRAGMENT_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
        )
        .unwrap();
        $crate::abs::ShaderProgram::new(&$gl, &[&vert, &frag]).unwrap()
    }};
}

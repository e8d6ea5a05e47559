//! Flat-shaded geometry builders shared by the demos.

use std::sync::Arc;

use glam::{Vec3, vec3};
use glow::HasContext;

use crate::abs::{Mesh, Vertex};

/// Vertex with a position and a face normal, for the `solid` shader.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct SolidVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Vertex for SolidVertex {
    fn vertex_attribs(gl: &glow::Context) {
        let stride = std::mem::size_of::<SolidVertex>() as i32;
        unsafe {
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, 12);
        }
    }
}

/// Position-only vertex for the `line` shader.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct LineVertex {
    pub position: Vec3,
}

impl Vertex for LineVertex {
    fn vertex_attribs(gl: &glow::Context) {
        let stride = std::mem::size_of::<LineVertex>() as i32;
        unsafe {
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        }
    }
}

/// Axis-aligned cuboid centered at the origin with the given half extents.
pub fn cube_mesh(gl: &Arc<glow::Context>, half: Vec3) -> Mesh {
    // One quad per face, normal pointing out.
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (i, (normal, right, up)) in FACES.into_iter().enumerate() {
        let center = normal * half;
        let right = right * half;
        let up = up * half;
        for corner in [
            center - right - up,
            center + right - up,
            center + right + up,
            center - right + up,
        ] {
            vertices.push(SolidVertex {
                position: corner,
                normal,
            });
        }
        let base = (i * 4) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(gl, &vertices, &indices, glow::TRIANGLES)
}

/// Square line grid in the XZ plane, centered at the origin.
pub fn grid_mesh(gl: &Arc<glow::Context>, half_size: f32, step: f32) -> Mesh {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let lines = (2.0 * half_size / step).round() as i32;
    for i in 0..=lines {
        let offset = -half_size + i as f32 * step;
        for (a, b) in [
            (vec3(offset, 0.0, -half_size), vec3(offset, 0.0, half_size)),
            (vec3(-half_size, 0.0, offset), vec3(half_size, 0.0, offset)),
        ] {
            let base = vertices.len() as u32;
            vertices.push(LineVertex { position: a });
            vertices.push(LineVertex { position: b });
            indices.extend_from_slice(&[base, base + 1]);
        }
    }

    Mesh::new(gl, &vertices, &indices, glow::LINES)
}

/// Connects the given points into a single line strip.
pub fn line_strip_mesh(gl: &Arc<glow::Context>, points: &[Vec3]) -> Mesh {
    let vertices: Vec<LineVertex> = points
        .iter()
        .map(|&position| LineVertex { position })
        .collect();
    let indices: Vec<u32> = (0..vertices.len() as u32).collect();
    Mesh::new(gl, &vertices, &indices, glow::LINE_STRIP)
}

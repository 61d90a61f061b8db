#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Zeroable, bytemuck::Pod)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_uv: [f32; 2],
    pub normal: [f32; 3],
}

/// Unit cube centered on the origin, four vertices per face so each face
/// gets its own normal and UVs. Shared by every scene piece and bulb marker.
pub const VERTICES_CUBE: &[Vertex] = &[
    // Front face
    Vertex {
        position: [-0.5, -0.5, 0.5],
        tex_uv: [0.0, 0.0],
        normal: [0.0, 0.0, 1.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.5],
        tex_uv: [1.0, 0.0],
        normal: [0.0, 0.0, 1.0],
    },
    Vertex {
        position: [0.5, 0.5, 0.5],
        tex_uv: [1.0, 1.0],
        normal: [0.0, 0.0, 1.0],
    },
    Vertex {
        position: [-0.5, 0.5, 0.5],
        tex_uv: [0.0, 1.0],
        normal: [0.0, 0.0, 1.0],
    },
    // Back face
    Vertex {
        position: [-0.5, -0.5, -0.5],
        tex_uv: [1.0, 0.0],
        normal: [0.0, 0.0, -1.0],
    },
    Vertex {
        position: [-0.5, 0.5, -0.5],
        tex_uv: [1.0, 1.0],
        normal: [0.0, 0.0, -1.0],
    },
    Vertex {
        position: [0.5, 0.5, -0.5],
        tex_uv: [0.0, 1.0],
        normal: [0.0, 0.0, -1.0],
    },
    Vertex {
        position: [0.5, -0.5, -0.5],
        tex_uv: [0.0, 0.0],
        normal: [0.0, 0.0, -1.0],
    },
    // Left face
    Vertex {
        position: [-0.5, -0.5, -0.5],
        tex_uv: [0.0, 0.0],
        normal: [-1.0, 0.0, 0.0],
    },
    Vertex {
        position: [-0.5, -0.5, 0.5],
        tex_uv: [1.0, 0.0],
        normal: [-1.0, 0.0, 0.0],
    },
    Vertex {
        position: [-0.5, 0.5, 0.5],
        tex_uv: [1.0, 1.0],
        normal: [-1.0, 0.0, 0.0],
    },
    Vertex {
        position: [-0.5, 0.5, -0.5],
        tex_uv: [0.0, 1.0],
        normal: [-1.0, 0.0, 0.0],
    },
    // Right face
    Vertex {
        position: [0.5, -0.5, 0.5],
        tex_uv: [0.0, 0.0],
        normal: [1.0, 0.0, 0.0],
    },
    Vertex {
        position: [0.5, -0.5, -0.5],
        tex_uv: [1.0, 0.0],
        normal: [1.0, 0.0, 0.0],
    },
    Vertex {
        position: [0.5, 0.5, -0.5],
        tex_uv: [1.0, 1.0],
        normal: [1.0, 0.0, 0.0],
    },
    Vertex {
        position: [0.5, 0.5, 0.5],
        tex_uv: [0.0, 1.0],
        normal: [1.0, 0.0, 0.0],
    },
    // Top face
    Vertex {
        position: [-0.5, 0.5, 0.5],
        tex_uv: [0.0, 0.0],
        normal: [0.0, 1.0, 0.0],
    },
    Vertex {
        position: [0.5, 0.5, 0.5],
        tex_uv: [1.0, 0.0],
        normal: [0.0, 1.0, 0.0],
    },
    Vertex {
        position: [0.5, 0.5, -0.5],
        tex_uv: [1.0, 1.0],
        normal: [0.0, 1.0, 0.0],
    },
    Vertex {
        position: [-0.5, 0.5, -0.5],
        tex_uv: [0.0, 1.0],
        normal: [0.0, 1.0, 0.0],
    },
    // Bottom face
    Vertex {
        position: [-0.5, -0.5, -0.5],
        tex_uv: [0.0, 0.0],
        normal: [0.0, -1.0, 0.0],
    },
    Vertex {
        position: [0.5, -0.5, -0.5],
        tex_uv: [1.0, 0.0],
        normal: [0.0, -1.0, 0.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.5],
        tex_uv: [1.0, 1.0],
        normal: [0.0, -1.0, 0.0],
    },
    Vertex {
        position: [-0.5, -0.5, 0.5],
        tex_uv: [0.0, 1.0],
        normal: [0.0, -1.0, 0.0],
    },
];

pub const INDICES_CUBE: &[u16] = &[
    0, 1, 2, 2, 3, 0, // Front
    4, 5, 6, 6, 7, 4, // Back
    8, 9, 10, 10, 11, 8, // Left
    12, 13, 14, 14, 15, 12, // Right
    16, 17, 18, 18, 19, 16, // Top
    20, 21, 22, 22, 23, 20, // Bottom
];

pub fn create_vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    use std::mem::size_of;
    wgpu::VertexBufferLayout {
        array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                // Position
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                // Tex UV
                offset: size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
            wgpu::VertexAttribute {
                // Normal
                offset: size_of::<[f32; 3]>() as u64 + size_of::<[f32; 2]>() as u64,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x3,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_six_indexed_faces() {
        assert_eq!(VERTICES_CUBE.len(), 24);
        assert_eq!(INDICES_CUBE.len(), 36);
        assert!(INDICES_CUBE
            .iter()
            .all(|&i| (i as usize) < VERTICES_CUBE.len()));
    }

    #[test]
    fn cube_normals_are_unit_axis_vectors() {
        for v in VERTICES_CUBE {
            let len_sq: f32 = v.normal.iter().map(|c| c * c).sum();
            assert!((len_sq - 1.0).abs() < 1e-6);
        }
    }
}

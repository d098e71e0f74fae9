use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::voxels::face::Face;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    // Face as u32, so the shader can derive the normal
    pub face: u32,
}

#[derive(Debug, Default, Clone)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        MeshData::default()
    }

    /// Appends one quad for `face` of the unit cube placed at `offset`
    pub fn push_face(&mut self, face: Face, offset: Vec3) {
        let start_index = self.vertices.len() as u32;

        for (corner, uv) in face.corners().into_iter().zip(Face::uvs()) {
            let position = offset + corner.as_vec3();
            self.vertices.push(MeshVertex {
                position: position.to_array(),
                uv,
                face: face as u32,
            });
        }

        self.indices.extend_from_slice(&Face::indices(start_index));
    }

    pub fn face_count(&self) -> usize {
        self.vertices.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Unit cube shared by every voxel of a chunk
#[derive(Debug)]
pub struct CubeMesh {
    data: MeshData,
}

impl CubeMesh {
    pub fn new() -> Self {
        let mut data = MeshData::new();
        for face in Face::ALL {
            data.push_face(face, Vec3::ZERO);
        }
        CubeMesh { data }
    }

    pub fn data(&self) -> &MeshData {
        &self.data
    }
}

impl Default for CubeMesh {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::Arc;

use glam::Vec3;

use crate::{assets::materials::MaterialHandle, mesh_generation::cube_mesh::CubeMesh};

/// Geometry and material a voxel is drawn with. Both are owned outside the chunk.
#[derive(Debug, Clone)]
pub struct Renderable {
    pub mesh: Arc<CubeMesh>,
    pub material: MaterialHandle,
}

#[derive(Debug, Clone)]
pub struct Voxel {
    id: u32,
    position: Vec3,
    renderable: Renderable,
}

impl Voxel {
    pub const AIR_ID: u32 = 0;

    pub fn new(id: u32, position: Vec3, renderable: Renderable) -> Self {
        Voxel {
            id,
            position,
            renderable,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_air(&self) -> bool {
        self.id == Self::AIR_ID
    }

    /// World-space position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn material(&self) -> MaterialHandle {
        self.renderable.material
    }

    /// Called once per update cycle for every present voxel.
    pub fn update(&mut self) {
        // Voxels have no per-tick behaviour yet
    }
}

use std::sync::Arc;

use glam::UVec3;

use crate::{
    assets::materials::BlockMaterials,
    mesh_generation::cube_mesh::CubeMesh,
    voxels::{
        coord::{ChunkDimensions, ChunkOrigin},
        voxel::{Renderable, Voxel},
    },
};

/// Placeholder terrain: the block id is the product of the grid coordinates, so
/// every voxel touching the `x = 0`, `y = 0` or `z = 0` planes is air.
pub fn placeholder_block_id(pos: UVec3) -> u32 {
    pos.x.wrapping_mul(pos.y).wrapping_mul(pos.z)
}

/// Turns a work item's coordinate into a voxel
pub struct CellFactory {
    dimensions: ChunkDimensions,
    origin: ChunkOrigin,
    materials: BlockMaterials,
    cube_mesh: Arc<CubeMesh>,
}

impl CellFactory {
    pub fn new(
        dimensions: ChunkDimensions,
        origin: ChunkOrigin,
        materials: BlockMaterials,
        cube_mesh: Arc<CubeMesh>,
    ) -> Self {
        CellFactory {
            dimensions,
            origin,
            materials,
            cube_mesh,
        }
    }

    pub fn create(&self, pos: UVec3) -> Voxel {
        Voxel::new(
            placeholder_block_id(pos),
            self.origin.world_position(pos),
            Renderable {
                mesh: self.cube_mesh.clone(),
                material: self.materials.select(self.dimensions, pos),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::assets::materials::MaterialHandle;

    #[test]
    fn test_created_voxel_follows_cell_policy() {
        let materials = BlockMaterials {
            top: MaterialHandle(0),
            interior: MaterialHandle(1),
        };
        let factory = CellFactory::new(
            ChunkDimensions::new(4, 6, 4),
            ChunkOrigin::new(10.0, -24.0, 0.0),
            materials,
            Arc::new(CubeMesh::new()),
        );

        let top = factory.create(UVec3::new(1, 5, 2));
        assert_eq!(top.id(), 10);
        assert_eq!(top.material(), materials.top);
        assert_eq!(top.position(), Vec3::new(11.0, -19.0, 2.0));

        let below = factory.create(UVec3::new(0, 4, 3));
        assert!(below.is_air());
        assert_eq!(below.material(), materials.interior);
    }
}

use glam::UVec3;

use crate::voxels::voxel::Voxel;

/// Receives the voxels a chunk considers visible each frame. Drawing, ordering and GPU
/// resources are entirely up to the implementation.
pub trait VoxelRenderer {
    /// Camera or other per-frame context the implementation needs
    type View;

    fn draw_voxel(&mut self, pos: UVec3, voxel: &Voxel, view: &Self::View);
}

use glam::{UVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::{
    error::ChunkError,
    limits::{DEPTH_FACTOR, MAX_CHUNK_VOLUME},
    voxels::face::Face,
};

/// Extent of a chunk's voxel grid: `(size_x, depth_y, size_z)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkDimensions(pub UVec3);

impl ChunkDimensions {
    pub const fn new(size_x: u32, depth_y: u32, size_z: u32) -> Self {
        ChunkDimensions(UVec3::new(size_x, depth_y, size_z))
    }

    /// Square footprint of `size` with the depth derived from it
    pub fn from_size(size: u32) -> Result<Self, ChunkError> {
        let Some(depth) = size.checked_mul(DEPTH_FACTOR) else {
            return Err(ChunkError::InvalidDimensions {
                dimensions: UVec3::new(size, u32::MAX, size),
            });
        };

        let dimensions = Self::new(size, depth, size);
        dimensions.validate()?;
        Ok(dimensions)
    }

    pub const fn size_x(&self) -> u32 {
        self.0.x
    }

    pub const fn depth_y(&self) -> u32 {
        self.0.y
    }

    pub const fn size_z(&self) -> u32 {
        self.0.z
    }

    /// Number of cells. Saturates for dimensions that `validate` rejects.
    pub fn volume(&self) -> usize {
        self.checked_volume().unwrap_or(usize::MAX)
    }

    fn checked_volume(&self) -> Option<usize> {
        (self.0.x as usize)
            .checked_mul(self.0.y as usize)?
            .checked_mul(self.0.z as usize)
    }

    pub fn validate(&self) -> Result<(), ChunkError> {
        let too_large = self
            .checked_volume()
            .is_none_or(|volume| volume > MAX_CHUNK_VOLUME);

        if self.0.cmpeq(UVec3::ZERO).any() || too_large {
            return Err(ChunkError::InvalidDimensions { dimensions: self.0 });
        }
        Ok(())
    }

    pub fn contains(&self, pos: UVec3) -> bool {
        pos.cmplt(self.0).all()
    }

    pub fn is_on_boundary(&self, pos: UVec3) -> bool {
        let max = self.0 - UVec3::ONE;
        pos.cmpeq(UVec3::ZERO).any() || pos.cmpeq(max).any()
    }

    /// Neighbouring coordinate across `face`, or `None` when it falls outside the chunk
    pub fn neighbor(&self, pos: UVec3, face: Face) -> Option<UVec3> {
        let neighbor = pos.as_ivec3() + face.normal();
        if neighbor.cmplt(glam::IVec3::ZERO).any() {
            return None;
        }

        let neighbor = neighbor.as_uvec3();
        self.contains(neighbor).then_some(neighbor)
    }

    /// Linear storage index, X-major then Y then Z.
    /// Panics if `pos` is outside the dimensions.
    pub fn index_of(&self, pos: UVec3) -> usize {
        if !self.contains(pos) {
            panic!(
                "Voxel coordinates out of bounds: {:?} for dimensions {:?}",
                pos, self.0
            );
        }

        let UVec3 { x, y, z } = pos;
        (x as usize * self.0.y as usize + y as usize) * self.0.z as usize + z as usize
    }

    /// Inverse of [`ChunkDimensions::index_of`]
    pub fn position_at(&self, index: usize) -> UVec3 {
        if index >= self.volume() {
            panic!("Voxel index out of bounds: {}", index);
        }

        let size_z = self.0.z as usize;
        let depth_y = self.0.y as usize;
        let z = index % size_z;
        let y = (index / size_z) % depth_y;
        let x = index / (size_z * depth_y);
        UVec3::new(x as u32, y as u32, z as u32)
    }

    pub fn is_top_layer(&self, pos: UVec3) -> bool {
        pos.y == self.0.y - 1
    }
}

/// World-space position of a chunk's `(0, 0, 0)` voxel
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChunkOrigin(pub Vec3);

impl ChunkOrigin {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        ChunkOrigin(Vec3::new(x, y, z))
    }

    pub fn world_position(&self, pos: UVec3) -> Vec3 {
        self.0 + pos.as_vec3()
    }
}

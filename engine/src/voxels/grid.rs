use glam::UVec3;

use crate::{
    error::ChunkError,
    voxels::{coord::ChunkDimensions, voxel::Voxel},
};

/// Dense storage of a chunk's cells. A cell is `None` until its voxel has been created.
///
/// There is no internal locking: the grid is only ever written by the thread that owns
/// the chunk.
pub struct VoxelGrid {
    dimensions: ChunkDimensions,
    // X-major, then Y, then Z. See `ChunkDimensions::index_of`
    cells: Box<[Option<Voxel>]>,
}

impl VoxelGrid {
    pub fn new(dimensions: ChunkDimensions) -> Result<Self, ChunkError> {
        dimensions.validate()?;

        let cells = std::iter::repeat_with(|| None)
            .take(dimensions.volume())
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Ok(VoxelGrid { dimensions, cells })
    }

    pub fn dimensions(&self) -> ChunkDimensions {
        self.dimensions
    }

    pub fn contains(&self, pos: UVec3) -> bool {
        self.dimensions.contains(pos)
    }

    /// Panics if `pos` is outside the grid.
    pub fn get(&self, pos: UVec3) -> Option<&Voxel> {
        self.cells[self.dimensions.index_of(pos)].as_ref()
    }

    pub fn try_get(&self, pos: UVec3) -> Result<Option<&Voxel>, ChunkError> {
        let index = self.checked_index(pos)?;
        Ok(self.cells[index].as_ref())
    }

    pub fn set(&mut self, pos: UVec3, voxel: Voxel) -> Result<(), ChunkError> {
        let index = self.checked_index(pos)?;
        self.cells[index] = Some(voxel);
        Ok(())
    }

    /// Empties a cell and returns what it held
    pub fn remove(&mut self, pos: UVec3) -> Result<Option<Voxel>, ChunkError> {
        let index = self.checked_index(pos)?;
        Ok(self.cells[index].take())
    }

    fn checked_index(&self, pos: UVec3) -> Result<usize, ChunkError> {
        if !self.dimensions.contains(pos) {
            return Err(ChunkError::OutOfBounds {
                pos,
                dimensions: self.dimensions,
            });
        }
        Ok(self.dimensions.index_of(pos))
    }

    pub fn is_present(&self, pos: UVec3) -> bool {
        self.get(pos).is_some()
    }

    pub fn present_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Present cells in storage order
    pub fn iter_present(&self) -> impl Iterator<Item = (UVec3, &Voxel)> + '_ {
        let dimensions = self.dimensions;
        self.cells.iter().enumerate().filter_map(move |(index, cell)| {
            cell.as_ref()
                .map(|voxel| (dimensions.position_at(index), voxel))
        })
    }

    pub fn iter_present_mut(&mut self) -> impl Iterator<Item = &mut Voxel> + '_ {
        self.cells.iter_mut().filter_map(Option::as_mut)
    }
}

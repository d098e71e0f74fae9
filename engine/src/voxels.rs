pub mod chunk;
pub mod coord;
pub mod face;
pub mod grid;
pub mod voxel;

use std::io;

use glam::UVec3;
use thiserror::Error;

use crate::{limits::MAX_CHUNK_VOLUME, voxels::coord::ChunkDimensions};

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error(
        "Invalid chunk dimensions {dimensions:?}: every axis must be at least 1 and the volume at most {max} voxels",
        max = MAX_CHUNK_VOLUME
    )]
    InvalidDimensions { dimensions: UVec3 },

    #[error("Invalid worker count {0}: at least one generation worker is required")]
    InvalidWorkerCount(usize),

    #[error("Invalid drain count {0}: at least one work item must be drained per cycle")]
    InvalidDrainCount(usize),

    #[error("Voxel coordinate {pos:?} is outside of chunk dimensions {dimensions:?}")]
    OutOfBounds {
        pos: UVec3,
        dimensions: ChunkDimensions,
    },

    #[error("Material '{0}' is not defined")]
    MissingMaterial(String),

    #[error("Failed to spawn generation worker {index}")]
    WorkerSpawn { index: usize, source: io::Error },
}

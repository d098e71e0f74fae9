//! Concurrent generation, throttled integration and visibility selection for a single
//! voxel chunk.

pub mod assets;
pub mod camera;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod generation;
pub mod limits;
pub mod mesh_generation;
pub mod renderer;
pub mod visibility;
pub mod voxels;

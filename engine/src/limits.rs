// Width and length of a chunk along X and Z
pub const DEFAULT_CHUNK_SIZE: u32 = 8;
// Depth (Y) is derived from the footprint
pub const DEPTH_FACTOR: u32 = 3;
// Upper bound on cells per chunk, the grid is allocated up front
pub const MAX_CHUNK_VOLUME: usize = 1 << 22;

pub const DEFAULT_WORKER_COUNT: usize = 8;

// How many work items the owner thread integrates per update cycle.
// Keeping this small bounds the per-frame cost when the backlog is large.
pub const DEFAULT_DRAIN_PER_CYCLE: usize = 1;

use std::sync::Arc;

use ahash::AHashMap;
use glam::UVec3;

use crate::{
    assets::materials::{BlockMaterials, MaterialHandle},
    error::ChunkError,
    generation::{
        cell_factory::CellFactory,
        partition::{WorkItem, partition},
        task_queue::DeferredTaskQueue,
        worker_pool::GenerationWorkerPool,
    },
    limits::{DEFAULT_DRAIN_PER_CYCLE, DEFAULT_WORKER_COUNT},
    mesh_generation::{
        cube_mesh::{CubeMesh, MeshData},
        exposed_faces::build_exposed_faces,
    },
    renderer::VoxelRenderer,
    visibility::{VisibilityMode, is_visible_with},
    voxels::{
        coord::{ChunkDimensions, ChunkOrigin},
        grid::VoxelGrid,
        voxel::Voxel,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkState {
    // Never stored: `Chunk::new` returns either a generating chunk or an error
    Constructing,
    // Workers are still enumerating, or work items are waiting to be drained
    Generating,
    Steady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSettings {
    pub dimensions: ChunkDimensions,
    pub worker_count: usize,
    pub drain_per_cycle: usize,
    pub visibility: VisibilityMode,
}

impl ChunkSettings {
    pub fn new(dimensions: ChunkDimensions) -> Self {
        ChunkSettings {
            dimensions,
            worker_count: DEFAULT_WORKER_COUNT,
            drain_per_cycle: DEFAULT_DRAIN_PER_CYCLE,
            visibility: VisibilityMode::default(),
        }
    }

    pub fn with_worker_count(self, worker_count: usize) -> Self {
        ChunkSettings {
            worker_count,
            ..self
        }
    }

    pub fn with_drain_per_cycle(self, drain_per_cycle: usize) -> Self {
        ChunkSettings {
            drain_per_cycle,
            ..self
        }
    }

    pub fn with_visibility(self, visibility: VisibilityMode) -> Self {
        ChunkSettings { visibility, ..self }
    }

    pub fn validate(&self) -> Result<(), ChunkError> {
        self.dimensions.validate()?;
        if self.worker_count == 0 {
            return Err(ChunkError::InvalidWorkerCount(self.worker_count));
        }
        if self.drain_per_cycle == 0 {
            return Err(ChunkError::InvalidDrainCount(self.drain_per_cycle));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChunkStats {
    pub update_cycles: u64,
    pub drained_items: u64,
    pub present_voxels: usize,
    // Snapshot, workers may still be pushing
    pub pending_items: usize,
    pub running_workers: usize,
}

/// A single chunk: its grid, the workers generating it and the queue between them.
///
/// Everything except enumeration happens on the thread that owns the `Chunk`, which is
/// the only writer of the grid.
pub struct Chunk {
    origin: ChunkOrigin,
    settings: ChunkSettings,
    grid: VoxelGrid,
    queue: Arc<DeferredTaskQueue<WorkItem>>,
    workers: GenerationWorkerPool,
    cell_factory: CellFactory,
    state: ChunkState,
    update_cycles: u64,
    drained_items: u64,
}

impl Chunk {
    /// Allocates the grid and starts generation. Returns without waiting for any worker.
    pub fn new(
        origin: ChunkOrigin,
        settings: ChunkSettings,
        materials: BlockMaterials,
    ) -> Result<Self, ChunkError> {
        settings.validate()?;

        let dimensions = settings.dimensions;
        let grid = VoxelGrid::new(dimensions)?;
        let bands = partition(dimensions, settings.worker_count)?;
        let queue = Arc::new(DeferredTaskQueue::new());
        let cell_factory =
            CellFactory::new(dimensions, origin, materials, Arc::new(CubeMesh::new()));

        let workers = GenerationWorkerPool::spawn(bands, dimensions, queue.clone())?;

        log::info!(
            "Generating chunk at {:?} with dimensions {:?} on {} workers",
            origin.0,
            dimensions.0,
            settings.worker_count
        );

        Ok(Chunk {
            origin,
            settings,
            grid,
            queue,
            workers,
            cell_factory,
            state: ChunkState::Generating,
            update_cycles: 0,
            drained_items: 0,
        })
    }

    pub fn origin(&self) -> ChunkOrigin {
        self.origin
    }

    pub fn settings(&self) -> &ChunkSettings {
        &self.settings
    }

    pub fn dimensions(&self) -> ChunkDimensions {
        self.settings.dimensions
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn state(&self) -> ChunkState {
        self.state
    }

    pub fn pending_items(&self) -> usize {
        self.queue.len()
    }

    pub fn stats(&self) -> ChunkStats {
        ChunkStats {
            update_cycles: self.update_cycles,
            drained_items: self.drained_items,
            present_voxels: self.grid.present_count(),
            pending_items: self.queue.len(),
            running_workers: self.workers.running_workers(),
        }
    }

    /// Integrates at most `drain_per_cycle` work items into the grid, then runs the
    /// per-voxel update hook. Returns how many items were integrated.
    #[profiling::function]
    pub fn update_cycle(&mut self) -> Result<usize, ChunkError> {
        let mut drained = 0;
        let mut result = Ok(());
        while drained < self.settings.drain_per_cycle {
            // An empty queue just means there is nothing to do this cycle
            let Some(item) = self.queue.try_pop() else {
                break;
            };
            result = self.execute(item);
            if let Err(error) = &result {
                log::error!("Dropping work item {:?}: {}", item.pos, error);
                break;
            }
            drained += 1;
        }

        for voxel in self.grid.iter_present_mut() {
            voxel.update();
        }

        self.update_cycles += 1;
        self.drained_items += drained as u64;
        self.refresh_state();
        result.map(|()| drained)
    }

    fn execute(&mut self, item: WorkItem) -> Result<(), ChunkError> {
        let voxel = self.cell_factory.create(item.pos);
        self.grid.set(item.pos, voxel)
    }

    fn refresh_state(&mut self) {
        if self.state != ChunkState::Generating {
            return;
        }

        // Workers must be checked first: a worker can push between the two checks
        if self.workers.is_finished() && self.queue.is_empty() {
            self.state = ChunkState::Steady;
            log::info!(
                "Chunk at {:?} is steady after {} update cycles ({} voxels)",
                self.origin.0,
                self.update_cycles,
                self.grid.present_count()
            );
        }
    }

    /// Visible voxels with their grid coordinate. Recomputed from the grid on every call.
    pub fn select_visible(&self) -> impl Iterator<Item = (UVec3, &Voxel)> + '_ {
        let mode = self.settings.visibility;
        self.grid
            .iter_present()
            .filter(move |&(pos, _)| is_visible_with(&self.grid, pos, mode))
    }

    /// Hands every visible voxel to `renderer`. Returns the number of voxels submitted.
    #[profiling::function]
    pub fn render<R: VoxelRenderer>(&self, renderer: &mut R, view: &R::View) -> usize {
        let mut submitted = 0;
        for (pos, voxel) in self.select_visible() {
            renderer.draw_voxel(pos, voxel, view);
            submitted += 1;
        }
        submitted
    }

    /// Meshes made of the exposed faces of visible voxels, one per material
    pub fn build_mesh(&self) -> AHashMap<MaterialHandle, MeshData> {
        build_exposed_faces(&self.grid, self.settings.visibility)
    }

    /// Blocks until every worker has enumerated its band. Queued items still need to be
    /// drained by `update_cycle`.
    pub fn wait_for_generation(&mut self) {
        self.workers.wait();
    }

    /// Stops generation: the queue stops accepting items, workers are joined and whatever
    /// is still queued is discarded. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.queue.is_closed() {
            return;
        }

        self.queue.close();
        self.workers.shutdown();
        let discarded = self.queue.clear();

        if self.state == ChunkState::Generating {
            self.state = ChunkState::Steady;
        }

        log::info!(
            "Chunk at {:?} shut down, {} pending work items discarded",
            self.origin.0,
            discarded
        );
    }
}

impl Drop for Chunk {
    fn drop(&mut self) {
        self.shutdown();
    }
}

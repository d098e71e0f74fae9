use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread::JoinHandle,
};

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use crate::{
    error::ChunkError,
    generation::{
        partition::{Band, WorkItem},
        task_queue::DeferredTaskQueue,
    },
    voxels::coord::ChunkDimensions,
};

// Used by the chunk to communicate with its generation workers
enum WorkerCommand {
    Shutdown,
}

/// Fixed set of threads, one per band, that enumerate their band into the shared queue.
/// Workers never touch the grid.
pub struct GenerationWorkerPool {
    worker_handles: Vec<JoinHandle<()>>,
    command_sender: Option<Sender<WorkerCommand>>,
    running_workers: Arc<AtomicUsize>,
}

// Decrements the running counter when a worker exits, even by panicking
struct RunningGuard(Arc<AtomicUsize>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

impl GenerationWorkerPool {
    pub fn spawn(
        bands: Vec<Band>,
        dimensions: ChunkDimensions,
        queue: Arc<DeferredTaskQueue<WorkItem>>,
    ) -> Result<Self, ChunkError> {
        let (command_sender, command_receiver) = crossbeam_channel::unbounded();

        // If spawning fails halfway, dropping the pool stops the workers that did start
        let mut pool = GenerationWorkerPool {
            worker_handles: Vec::with_capacity(bands.len()),
            command_sender: Some(command_sender),
            running_workers: Arc::new(AtomicUsize::new(0)),
        };

        for band in bands {
            let queue = queue.clone();
            let command_receiver = command_receiver.clone();

            pool.running_workers.fetch_add(1, Ordering::AcqRel);
            let guard = RunningGuard(pool.running_workers.clone());

            let handle = std::thread::Builder::new()
                .name(format!("Chunk generation worker {}", band.index))
                .spawn(move || {
                    let _guard = guard;
                    let mut worker = GenerationWorker {
                        band,
                        dimensions,
                        queue,
                        command_receiver,
                    };
                    worker.enumerate_band();
                })
                .map_err(|source| ChunkError::WorkerSpawn {
                    index: band.index,
                    source,
                })?;

            pool.worker_handles.push(handle);
        }

        Ok(pool)
    }

    pub fn worker_count(&self) -> usize {
        self.worker_handles.len()
    }

    pub fn running_workers(&self) -> usize {
        self.running_workers.load(Ordering::Acquire)
    }

    pub fn is_finished(&self) -> bool {
        self.running_workers() == 0
    }

    /// Blocks until every worker has finished its band.
    pub fn wait(&mut self) {
        for handle in self.worker_handles.drain(..) {
            let name = handle.thread().name().unwrap_or("unnamed").to_string();
            if handle.join().is_err() {
                log::error!("Generation worker '{}' panicked", name);
            }
        }
    }

    /// Asks the workers to stop after their current item and joins them.
    pub fn shutdown(&mut self) {
        let Some(sender) = self.command_sender.take() else {
            return;
        };

        for _ in 0..self.worker_handles.len() {
            // Workers that already finished have dropped their receiver
            let _ = sender.send(WorkerCommand::Shutdown);
        }
        drop(sender);

        self.wait();
    }
}

impl Drop for GenerationWorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

struct GenerationWorker {
    band: Band,
    dimensions: ChunkDimensions,
    queue: Arc<DeferredTaskQueue<WorkItem>>,
    command_receiver: Receiver<WorkerCommand>,
}

impl GenerationWorker {
    fn should_stop(&self) -> bool {
        match self.command_receiver.try_recv() {
            Ok(WorkerCommand::Shutdown) | Err(TryRecvError::Disconnected) => true,
            Err(TryRecvError::Empty) => false,
        }
    }

    fn enumerate_band(&mut self) {
        log::debug!(
            "Worker {} enumerating x = [{}, {})",
            self.band.index,
            self.band.start_x,
            self.band.end_x
        );

        let mut pushed = 0usize;
        for item in self.band.work_items(self.dimensions) {
            if self.should_stop() || !self.queue.push(item) {
                log::debug!(
                    "Worker {} stopped early after {} of {} items",
                    self.band.index,
                    pushed,
                    self.band.len(self.dimensions)
                );
                return;
            }
            pushed += 1;
        }

        log::debug!("Worker {} queued {} items", self.band.index, pushed);
    }
}

pub mod cell_factory;
pub mod partition;
pub mod task_queue;
pub mod worker_pool;

pub mod pool_error;
pub mod pool_report;
pub mod pool_submitter;
pub mod worker_pool;

pub use pool_error::PoolError;
pub use pool_report::{PoolReport, TaskFailure};
pub use pool_submitter::PoolSubmitter;
pub use worker_pool::WorkerPool;

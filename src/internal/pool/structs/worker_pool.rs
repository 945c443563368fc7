//! 固定大小的工作池
//!
//! - 创建即启动全部 worker，每个 worker 循环从共享的有界队列取任务并调用处理函数
//! - 队列容量等于 worker 数，提交方在队列满时被挂起
//! - 处理失败的任务记录下来后丢弃，不重试，也不影响其他 worker
//! - `drain` 关闭本池的提交端，等待所有 worker 取空队列后退出，返回汇总结果
//!
//! ```rust,no_run
//! # use segment_dl::pool::WorkerPool;
//! # use tokio_util::sync::CancellationToken;
//! # async fn example() {
//! let pool: WorkerPool<u64, String> =
//!     WorkerPool::create(4, CancellationToken::new(), |n: u64| async move {
//!         if n % 2 == 0 { Ok(()) } else { Err(format!("{n} 是奇数")) }
//!     });
//! for n in 0..10 {
//!     pool.submit(n).await.unwrap();
//! }
//! let report = pool.drain().await;
//! assert_eq!(report.completed, 5);
//! # }
//! ```

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::pool_error::PoolError;
use super::pool_report::{PoolReport, TaskFailure};
use super::pool_submitter::PoolSubmitter;

/// 单个 worker 退出时带回的统计。
struct WorkerTally<T, E> {
    completed: usize,
    failures: Vec<TaskFailure<T, E>>,
}

/// 固定大小的工作池，每次传输创建一个，不复用。
pub struct WorkerPool<T, E> {
    submitter: Option<PoolSubmitter<T>>,
    workers: JoinSet<WorkerTally<T, E>>,
    worker_count: usize,
}

impl<T, E> WorkerPool<T, E>
where
    T: Clone + Send + 'static,
    E: Display + Send + 'static,
{
    /// 创建工作池并立即启动 `worker_count` 个 worker（至少 1 个）。
    ///
    /// `cancel` 被触发后，worker 不再取新任务；正在执行的处理函数需自行响应取消。
    pub fn create<H, Fut>(
        worker_count: usize,
        cancel: CancellationToken,
        handler: H,
    ) -> Self
    where
        H: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
    {
        let worker_count = worker_count.max(1);
        let (sender, receiver) = mpsc::channel::<T>(worker_count);
        let receiver = Arc::new(Mutex::new(receiver));
        let handler = Arc::new(handler);

        let mut workers = JoinSet::new();
        for worker_id in 0..worker_count {
            workers.spawn(run_worker(
                worker_id,
                Arc::clone(&receiver),
                Arc::clone(&handler),
                cancel.clone(),
            ));
        }

        Self {
            submitter: Some(PoolSubmitter { sender, cancel }),
            workers,
            worker_count,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// 取得一个可移交给其他任务的提交端。
    pub fn submitter(&self) -> Result<PoolSubmitter<T>, PoolError> {
        self.submitter.clone().ok_or(PoolError::Closed)
    }

    /// 提交一个任务，队列满时等待。
    pub async fn submit(&self, task: T) -> Result<(), PoolError> {
        match &self.submitter {
            Some(s) => s.submit(task).await,
            None => Err(PoolError::Closed),
        }
    }

    /// 声明本池不再提交任务。外部持有的提交端释放后队列才真正关闭。
    pub fn close(&mut self) {
        self.submitter = None;
    }

    /// 关闭并等待全部 worker 退出，汇总每个任务的结果。
    pub async fn drain(mut self) -> PoolReport<T, E> {
        self.close();

        let mut report = PoolReport::new();
        while let Some(joined) = self.workers.join_next().await {
            match joined {
                Ok(tally) => {
                    report.completed += tally.completed;
                    report.failures.extend(tally.failures);
                }
                Err(join_err) => {
                    warn!(error = %join_err, "worker 异常退出");
                    report.panicked.push(join_err.to_string());
                }
            }
        }
        report
    }
}

async fn run_worker<T, E, H, Fut>(
    worker_id: usize,
    receiver: Arc<Mutex<mpsc::Receiver<T>>>,
    handler: Arc<H>,
    cancel: CancellationToken,
) -> WorkerTally<T, E>
where
    T: Clone + Send + 'static,
    E: Display + Send + 'static,
    H: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
{
    let mut tally = WorkerTally {
        completed: 0,
        failures: Vec::new(),
    };

    loop {
        // 只在取任务时持锁，处理任务期间其他 worker 可以继续取
        let next = {
            let mut rx = receiver.lock().await;
            tokio::select! {
                biased;

                _ = cancel.cancelled() => None,
                task = rx.recv() => task,
            }
        };
        let Some(task) = next else {
            break;
        };

        match handler(task.clone()).await {
            Ok(()) => tally.completed += 1,
            Err(error) => {
                warn!(worker = worker_id, error = %error, "任务处理失败，已丢弃");
                tally.failures.push(TaskFailure { task, error });
            }
        }
    }

    debug!(
        worker = worker_id,
        completed = tally.completed,
        failed = tally.failures.len(),
        "worker 退出"
    );
    tally
}

//! 分段并发传输编排器
//!
//! 将单个远程资源按固定大小切成连续字节区间，交给有界工作池并发拉取，
//! 每段直接写到临时文件的对应偏移，全部成功后改名为目标文件。
//!
//! ## 阶段
//!
//! `Probing → Planning → Transferring → Draining → Done`，任一阶段出错进入 `Failed`，
//! 取消进入 `Cancelled`。
//!
//! - **Probing**：HEAD 探测 `Content-Length`，缺失、无法解析或为 0 都直接失败
//! - **Planning**：切分分段、计算 worker 数、预分配临时文件（目标名加 `.part`）、创建工作池
//! - **Transferring**：按偏移升序提交分段，同时运行吞吐监控
//! - **Draining**：等待工作池取空队列、全部 worker 退出
//! - **Done**：落盘并把临时文件改名为目标文件；有分段被丢弃时整体失败，只删除临时文件，
//!   已有的同名目标文件保持不变
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use segment_dl::transfer::{SegmentedTransfer, TransferConfig};
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TransferConfig::new("https://example.com/big.iso", "big.iso")
//!     .max_workers(8)
//!     .segment_size(4 * 1024 * 1024);
//!
//! let transfer = SegmentedTransfer::new(config)?
//!     .with_on_speed_hook(|s| println!("download speed: {s}"));
//! let cancel = transfer.cancel_token();
//! tokio::spawn(async move {
//!     let _ = tokio::signal::ctrl_c().await;
//!     cancel.cancel();
//! });
//!
//! let report = transfer.send().await?;
//! println!("耗时 {:?}", report.elapsed);
//! # Ok(())
//! # }
//! ```

mod segment_task;

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::internal::pool::structs::{PoolError, PoolReport, WorkerPool};
use crate::internal::transfer::functions::write_segment::remove_partial;
use crate::internal::transfer::functions::{
    build_client, monitor_throughput, parse_source_url, partial_path, preallocate,
    probe_content_length, promote_partial, sync_file, MonitorThroughputParams,
};
use crate::internal::transfer::traits::transfer_hook::TransferHook;

use super::hook_adapters::{OnProgressHookAdapter, OnSpeedHookAdapter, OnStatusHookAdapter};
use super::segment::Segment;
use super::segment_plan::SegmentPlan;
use super::speed_sample::SpeedSample;
use super::transfer_config::TransferConfig;
use super::transfer_error::TransferError;
use super::transfer_hooks_container::TransferHooksContainer;
use super::transfer_progress::TransferProgress;
use super::transfer_report::TransferReport;
use super::transfer_status::TransferStatus;
use segment_task::{transfer_segment, SegmentContext};

/// 默认吞吐采样周期
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// 分段并发传输，一个实例对应一次传输，`send` 后即被消耗。
///
/// 阶段、进度与吞吐都通过钩子发布（见 [`TransferHook`]）。
pub struct SegmentedTransfer {
    config: Arc<TransferConfig>,
    client: Client,
    cancel: CancellationToken,
    sample_interval: Duration,
    hooks: TransferHooksContainer,
}

impl SegmentedTransfer {
    /// 校验配置并构建客户端；此时不发起任何请求。
    pub fn new(config: TransferConfig) -> Result<Self, TransferError> {
        config.validate()?;
        let client = build_client(&config)?;

        Ok(Self {
            config: Arc::new(config),
            client,
            cancel: CancellationToken::new(),
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            hooks: TransferHooksContainer::default(),
        })
    }

    /// 设置吞吐采样周期，默认 1 秒。
    pub fn sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = interval;
        self
    }

    /// 注册「阶段切换」钩子。
    pub fn with_on_status_hook<F>(mut self, f: F) -> Self
    where
        F: Fn(&TransferStatus) + Send + Sync + 'static,
    {
        self.hooks.add(OnStatusHookAdapter(f));
        self
    }

    /// 注册「进度推进」钩子。
    pub fn with_on_progress_hook<F>(mut self, f: F) -> Self
    where
        F: Fn(&TransferProgress) + Send + Sync + 'static,
    {
        self.hooks.add(OnProgressHookAdapter(f));
        self
    }

    /// 注册「吞吐采样」钩子。
    pub fn with_on_speed_hook<F>(mut self, f: F) -> Self
    where
        F: Fn(&SpeedSample) + Send + Sync + 'static,
    {
        self.hooks.add(OnSpeedHookAdapter(f));
        self
    }

    /// 添加完整钩子。
    pub fn with_hook(mut self, hook: impl TransferHook + 'static) -> Self {
        self.hooks.add(hook);
        self
    }

    pub fn config(&self) -> &TransferConfig {
        &self.config
    }

    /// 取消令牌；触发后所有请求、写入、提交与采样在下一个挂起点停止。
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// 执行传输，返回唯一的最终结果。
    ///
    /// 只有全部分段都成功写入才返回 `Ok`；失败或取消时删除临时文件。
    pub async fn send(self) -> Result<TransferReport, TransferError> {
        let run = TransferRun {
            config: self.config,
            client: self.client,
            cancel: self.cancel,
            sample_interval: self.sample_interval,
            hooks: Arc::new(self.hooks),
        };
        run.execute().await
    }
}

/// `send` 期间的运行态，钩子改为共享。
struct TransferRun {
    config: Arc<TransferConfig>,
    client: Client,
    cancel: CancellationToken,
    sample_interval: Duration,
    hooks: Arc<TransferHooksContainer>,
}

impl TransferRun {
    fn set_status(&self, status: TransferStatus) {
        self.hooks.run_on_status(&status);
    }

    async fn execute(self) -> Result<TransferReport, TransferError> {
        let started = Instant::now();
        let result = self.run_phases(started).await;

        match &result {
            Ok(report) => {
                info!(
                    total = report.total,
                    elapsed = ?report.elapsed,
                    "download finish"
                );
                self.set_status(TransferStatus::Done {
                    elapsed: report.elapsed,
                });
            }
            Err(TransferError::Cancelled) => {
                info!("传输已取消");
                self.set_status(TransferStatus::Cancelled);
            }
            Err(e) => {
                error!(error = %e, "传输失败");
                self.set_status(TransferStatus::Failed(e.to_string()));
            }
        }
        result
    }

    async fn run_phases(&self, started: Instant) -> Result<TransferReport, TransferError> {
        let url = parse_source_url(&self.config.url)?;
        let save_path = self.config.save_path.clone();
        let partial = partial_path(&save_path);

        // Probing
        self.set_status(TransferStatus::Probing);
        let total = probe_content_length(&self.client, &url, &self.cancel).await?;
        if total == 0 {
            return Err(TransferError::EmptyResource);
        }
        info!(total, "Content-Length");

        // Planning
        self.set_status(TransferStatus::Planning { total });
        let plan = SegmentPlan::new(
            &url,
            &partial,
            total,
            self.config.segment_size,
            self.config.max_workers,
        );
        info!(
            workers = plan.worker_count,
            segments = plan.segment_count(),
            "download thread count"
        );
        if let Err(e) = preallocate(&partial, total).await {
            remove_partial(&partial).await;
            return Err(e);
        }

        let bytes_done = Arc::new(AtomicU64::new(0));
        let ctx = Arc::new(SegmentContext {
            client: self.client.clone(),
            total,
            bytes_done: Arc::clone(&bytes_done),
            publish: Mutex::new(()),
            hooks: Arc::clone(&self.hooks),
            cancel: self.cancel.clone(),
            max_retries: self.config.max_retries,
            retry_delay: self.config.retry_delay(),
        });
        let pool: WorkerPool<Segment, TransferError> =
            WorkerPool::create(plan.worker_count, self.cancel.clone(), move |segment: Segment| {
                let ctx = Arc::clone(&ctx);
                async move { transfer_segment(&ctx, segment).await }
            });

        // Transferring
        self.set_status(TransferStatus::Transferring {
            total,
            workers: pool.worker_count(),
            segments: plan.segment_count(),
        });

        let submitter = pool.submitter()?;
        let segments = plan.segments.clone();
        let submit_handle = tokio::spawn(async move {
            for segment in segments {
                submitter.submit(segment).await?;
            }
            Ok::<(), PoolError>(())
        });

        let monitor_stop = self.cancel.child_token();
        let monitor_handle = tokio::spawn(monitor_throughput(MonitorThroughputParams {
            bytes_done: Arc::clone(&bytes_done),
            interval: self.sample_interval,
            hooks: Arc::clone(&self.hooks),
            stop: monitor_stop.clone(),
        }));

        let submitted = submit_handle.await;

        // Draining
        self.set_status(TransferStatus::Draining);
        let report = pool.drain().await;
        monitor_stop.cancel();
        if let Err(join_err) = monitor_handle.await {
            warn!(error = %join_err, "吞吐监控异常退出");
        }

        let finished = match self.check_outcome(&plan, submitted, &report) {
            Ok(()) => self.finish(&partial, &save_path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = finished {
            remove_partial(&partial).await;
            return Err(e);
        }

        Ok(TransferReport {
            total,
            bytes_written: bytes_done.load(Ordering::Relaxed),
            segments: plan.segment_count(),
            workers: plan.worker_count,
            elapsed: started.elapsed(),
        })
    }

    /// 落盘后把临时文件改名为目标文件。
    async fn finish(&self, partial: &Path, save_path: &Path) -> Result<(), TransferError> {
        sync_file(partial).await?;
        promote_partial(partial, save_path).await
    }

    /// 判断工作池排空后传输是否完整。取消优先于其他错误。
    fn check_outcome(
        &self,
        plan: &SegmentPlan,
        submitted: Result<Result<(), PoolError>, tokio::task::JoinError>,
        report: &PoolReport<Segment, TransferError>,
    ) -> Result<(), TransferError> {
        if self.cancel.is_cancelled() {
            return Err(TransferError::Cancelled);
        }
        if let Some(panic) = report.panicked.first() {
            return Err(TransferError::WorkerPanicked(panic.clone()));
        }
        if !report.failures.is_empty() {
            let details = report
                .failures
                .iter()
                .map(|f| f.error.to_string())
                .collect();
            return Err(TransferError::SegmentsFailed {
                failed: report.failures.len(),
                total: plan.segment_count(),
                details,
            });
        }
        match submitted {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e.into()),
            Err(join_err) => return Err(TransferError::WorkerPanicked(join_err.to_string())),
        }
        if report.completed != plan.segment_count() {
            return Err(TransferError::SegmentsFailed {
                failed: plan.segment_count() - report.completed,
                total: plan.segment_count(),
                details: vec!["部分分段未被处理".to_string()],
            });
        }
        Ok(())
    }
}

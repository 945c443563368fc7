//! 单个分段的处理：拉取、写入、计数，失败按配置重试。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::internal::transfer::functions::{fetch_range, write_at, FetchRangeParams};
use crate::internal::transfer::structs::{
    Segment, TransferError, TransferHooksContainer, TransferProgress,
};

/// 所有 worker 共享的分段处理上下文。
pub(super) struct SegmentContext {
    pub client: Client,
    pub total: u64,
    /// 已写入字节数，只通过原子加法修改；吞吐监控只读它
    pub bytes_done: Arc<AtomicU64>,
    /// 计数与发布进度在同一把锁内完成，钩子看到的进度按序递增
    pub publish: Mutex<()>,
    pub hooks: Arc<TransferHooksContainer>,
    pub cancel: CancellationToken,
    pub max_retries: usize,
    pub retry_delay: Duration,
}

/// 处理一个分段：最多尝试 `1 + max_retries` 次，取消时立即返回。
pub(super) async fn transfer_segment(
    ctx: &SegmentContext,
    segment: Segment,
) -> Result<(), TransferError> {
    let mut retries = 0usize;

    loop {
        match attempt(ctx, &segment).await {
            Ok(written) => {
                {
                    let _guard = ctx.publish.lock().unwrap_or_else(PoisonError::into_inner);
                    let current = ctx.bytes_done.fetch_add(written, Ordering::Relaxed) + written;
                    ctx.hooks.run_on_progress(&TransferProgress {
                        bytes_done: current,
                        total: ctx.total,
                    });
                }
                debug!(start = segment.start, length = segment.length, "分段完成");
                return Ok(());
            }
            Err(TransferError::Cancelled) => return Err(TransferError::Cancelled),
            Err(e) => {
                if retries >= ctx.max_retries {
                    let message = e.to_string();
                    error!(
                        start = segment.start,
                        length = segment.length,
                        retries,
                        error = %message,
                        "分段重试耗尽，已丢弃"
                    );
                    ctx.hooks.run_on_segment_dropped(&segment, &message);
                    return Err(TransferError::SegmentFailed {
                        start: segment.start,
                        length: segment.length,
                        retries,
                        message,
                    });
                }

                retries += 1;
                warn!(
                    start = segment.start,
                    length = segment.length,
                    attempt = retries,
                    error = %e,
                    "分段失败，稍后重试"
                );
                tokio::select! {
                    biased;

                    _ = ctx.cancel.cancelled() => return Err(TransferError::Cancelled),
                    _ = tokio::time::sleep(ctx.retry_delay) => {}
                }
            }
        }
    }
}

/// 单次尝试：拉取成功后才写入，返回写入的字节数。
async fn attempt(ctx: &SegmentContext, segment: &Segment) -> Result<u64, TransferError> {
    let body = fetch_range(FetchRangeParams {
        client: &ctx.client,
        segment,
        total: ctx.total,
        cancel: &ctx.cancel,
    })
    .await?;

    if ctx.cancel.is_cancelled() {
        return Err(TransferError::Cancelled);
    }
    write_at(&segment.save_path, segment.start, &body).await?;
    Ok(body.len() as u64)
}

//! 分段规划：把总长度切成固定大小的连续区间，并决定 worker 数。

use std::path::Path;
use std::sync::Arc;

use url::Url;

use super::segment::Segment;

/// 一次传输的分段计划。
///
/// 各分段按起始偏移升序，互不重叠且恰好覆盖 `[0, total)`。
#[derive(Debug, Clone)]
pub struct SegmentPlan {
    pub total: u64,
    pub worker_count: usize,
    pub segments: Vec<Segment>,
}

impl SegmentPlan {
    /// 按 `segment_size` 切分 `total`，最后一段取余下的 `total - i` 字节。
    ///
    /// `total` 为 0 时得到空计划（0 个分段、0 个 worker），由调用方拒绝。
    pub fn new(
        url: &Url,
        save_path: &Path,
        total: u64,
        segment_size: u64,
        max_workers: usize,
    ) -> Self {
        let worker_count = worker_count(total, segment_size, max_workers);
        if total == 0 || segment_size == 0 {
            return Self {
                total,
                worker_count,
                segments: Vec::new(),
            };
        }

        let url = Arc::new(url.clone());
        let save_path = Arc::new(save_path.to_path_buf());
        let mut segments = Vec::with_capacity(total.div_ceil(segment_size) as usize);
        let mut start = 0u64;
        while start < total {
            let length = segment_size.min(total - start);
            segments.push(Segment {
                url: Arc::clone(&url),
                save_path: Arc::clone(&save_path),
                start,
                length,
            });
            start += length;
        }

        Self {
            total,
            worker_count,
            segments,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// worker 数：`max(1, min(max_workers, total / segment_size))`，`total` 为 0 时为 0。
pub fn worker_count(total: u64, segment_size: u64, max_workers: usize) -> usize {
    if total == 0 || segment_size == 0 || max_workers == 0 {
        return 0;
    }
    let by_size = usize::try_from(total / segment_size).unwrap_or(usize::MAX);
    by_size.min(max_workers).max(1)
}

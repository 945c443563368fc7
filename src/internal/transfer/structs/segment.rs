use std::path::PathBuf;
use std::sync::Arc;

use url::Url;

/// 一个分段：源资源中一段连续字节区间，独立下载、独立写入。
///
/// 地址与路径用 `Arc` 共享，克隆分段不会复制底层数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub url: Arc<Url>,
    pub save_path: Arc<PathBuf>,
    /// 起始偏移（含）
    pub start: u64,
    /// 字节数，大于 0
    pub length: u64,
}

impl Segment {
    /// 结束偏移（不含）。
    pub fn end(&self) -> u64 {
        self.start + self.length
    }

    /// 最后一个字节的偏移（含），即 Range 头里的 end。
    pub fn last_byte(&self) -> u64 {
        self.end() - 1
    }

    /// `Range` 请求头：`bytes=start-end`，end 含在区间内。
    pub fn range_header(&self) -> String {
        format!("bytes={}-{}", self.start, self.last_byte())
    }

    /// 随请求附带的 `Content-Range` 头：`bytes start-end/total`。
    pub fn content_range_header(&self, total: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.last_byte(), total)
    }
}

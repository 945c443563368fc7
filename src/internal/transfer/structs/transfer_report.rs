use std::time::Duration;

/// 一次成功传输的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReport {
    /// 远程资源总长度
    pub total: u64,
    /// 实际写入的字节数，成功时等于 `total`
    pub bytes_written: u64,
    pub segments: usize,
    pub workers: usize,
    /// 从探测开始到全部 worker 退出的耗时
    pub elapsed: Duration,
}

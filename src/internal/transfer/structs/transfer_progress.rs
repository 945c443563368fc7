/// 传输进度：已写入字节数与总长度，经 [`TransferHook::on_progress`](crate::transfer::TransferHook::on_progress) 发布。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferProgress {
    /// 已成功写入的字节数
    pub bytes_done: u64,
    pub total: u64,
}

impl TransferProgress {
    /// 进度百分比（0～100）；总长度为 0 时返回 `f64::NAN`。
    pub fn pct(&self) -> f64 {
        if self.total == 0 {
            return f64::NAN;
        }
        self.bytes_done as f64 / self.total as f64 * 100.0
    }
}

use std::time::Duration;

/// 传输阶段，每次切换经 [`TransferHook::on_status`](crate::transfer::TransferHook::on_status) 发布
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferStatus {
    Probing,
    Planning { total: u64 },
    Transferring { total: u64, workers: usize, segments: usize },
    Draining,
    Done { elapsed: Duration },
    Failed(String),
    Cancelled,
}

impl TransferStatus {
    /// 是否已到终态。
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Done { .. } | Self::Failed(_) | Self::Cancelled)
    }
}

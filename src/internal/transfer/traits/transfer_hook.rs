//! 传输钩子接口，供编排器在各阶段回调。

use crate::internal::transfer::structs::{Segment, SpeedSample, TransferProgress, TransferStatus};

/// 传输流程钩子：阶段切换、进度推进、吞吐采样、分段被丢弃时调用。
///
/// 钩子在传输任务内同步执行，应尽快返回；钩子不能改变传输结果。
/// 注册方式二选一（可混用）：
/// - 用 `with_on_status_hook` / `with_on_progress_hook` / `with_on_speed_hook` 传入闭包；
/// - 实现本 trait，通过 `with_hook` 注册。
pub trait TransferHook: Send + Sync {
    /// 阶段切换后调用，每个阶段恰好一次。
    fn on_status(&self, _status: &TransferStatus) {}

    /// 每个分段写入成功后调用，`bytes_done` 严格递增。
    fn on_progress(&self, _progress: &TransferProgress) {}

    /// 每个采样周期调用一次。
    fn on_speed(&self, _sample: &SpeedSample) {}

    /// 分段重试耗尽、被丢弃时调用。
    fn on_segment_dropped(&self, _segment: &Segment, _error: &str) {}
}

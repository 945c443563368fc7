use thiserror::Error;

/// 向工作池提交任务失败的原因。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("任务队列已关闭")]
    Closed,

    #[error("工作池已取消")]
    Cancelled,
}

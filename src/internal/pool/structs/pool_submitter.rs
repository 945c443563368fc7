use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::pool_error::PoolError;

/// 工作池的提交端，可克隆后交给独立的提交任务使用。
///
/// 所有提交端（包括工作池自身持有的那份）都释放后，队列即关闭，
/// worker 处理完剩余任务便退出。
#[derive(Debug)]
pub struct PoolSubmitter<T> {
    pub(crate) sender: mpsc::Sender<T>,
    pub(crate) cancel: CancellationToken,
}

impl<T> Clone for PoolSubmitter<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            cancel: self.cancel.clone(),
        }
    }
}

impl<T> PoolSubmitter<T> {
    /// 提交一个任务；队列已满时等待空位（背压），取消时立即返回。
    pub async fn submit(&self, task: T) -> Result<(), PoolError> {
        tokio::select! {
            biased;

            _ = self.cancel.cancelled() => Err(PoolError::Cancelled),
            sent = self.sender.send(task) => sent.map_err(|_| PoolError::Closed),
        }
    }
}

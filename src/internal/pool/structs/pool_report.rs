/// 单个失败任务：原任务与处理函数返回的错误。
#[derive(Debug)]
pub struct TaskFailure<T, E> {
    pub task: T,
    pub error: E,
}

/// 工作池排空后的汇总结果。
///
/// 只有 `failures` 与 `panicked` 都为空时，才说明每个被取出的任务都处理成功；
/// 取消后留在队列里的任务既不算成功也不算失败。
#[derive(Debug)]
pub struct PoolReport<T, E> {
    /// 处理成功的任务数
    pub completed: usize,
    /// 处理失败的任务
    pub failures: Vec<TaskFailure<T, E>>,
    /// 异常退出（panic）的 worker 描述
    pub panicked: Vec<String>,
}

impl<T, E> PoolReport<T, E> {
    pub(crate) fn new() -> Self {
        Self {
            completed: 0,
            failures: Vec::new(),
            panicked: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.panicked.is_empty()
    }
}

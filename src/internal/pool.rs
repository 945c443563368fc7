//! 有界工作池：固定数量的 worker 共享一个有界任务队列，任务结果逐个汇总。

pub mod structs;

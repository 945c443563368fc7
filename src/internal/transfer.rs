//! 分段并发传输：探测长度、规划分段、工作池并发拉取并按偏移写入。
//!
//! 对外导出以 [`crate::transfer`] 为准，此处仅做模块划分。

pub mod functions;
pub mod structs;
pub mod traits;

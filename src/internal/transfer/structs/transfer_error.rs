//! 传输相关错误类型。

use thiserror::Error;

use crate::internal::pool::structs::PoolError;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("无效的地址: {0}")]
    InvalidUrl(String),

    #[error("配置无效: {0}")]
    InvalidConfig(String),

    #[error("创建 HTTP 客户端失败: {0}")]
    BuildClient(reqwest::Error),

    #[error("无效的请求头 {name}: {message}")]
    InvalidHeader { name: String, message: String },

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("服务器未返回 Content-Length")]
    MissingContentLength,

    #[error("无法解析 Content-Length: {0}")]
    InvalidContentLength(String),

    #[error("远程资源长度为 0，没有可下载的内容")]
    EmptyResource,

    #[error("服务器返回异常状态码: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("服务器不支持 Range 请求（状态码 {status}）")]
    RangeNotSupported { status: u16 },

    #[error("分段长度不符：预期 {expected} 字节，实际 {actual} 字节")]
    BodyLengthMismatch { expected: u64, actual: u64 },

    #[error("打开文件失败: {0}")]
    OpenFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),

    #[error("预分配文件空间失败: {0}")]
    PreallocateFile(std::io::Error),

    #[error("临时文件改名为目标文件失败: {0}")]
    RenameFile(std::io::Error),

    #[error("传输被取消")]
    Cancelled,

    #[error("分段 [{start}, +{length}) 失败，已重试 {retries} 次: {message}")]
    SegmentFailed {
        start: u64,
        length: u64,
        retries: usize,
        message: String,
    },

    #[error("{failed}/{total} 个分段下载失败: {details:?}")]
    SegmentsFailed {
        failed: usize,
        total: usize,
        details: Vec<String>,
    },

    #[error("worker 异常退出: {0}")]
    WorkerPanicked(String),

    #[error("提交分段失败: {0}")]
    Submit(#[from] PoolError),
}

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::transfer_error::TransferError;

/// 默认最大 worker 数
pub const DEFAULT_MAX_WORKERS: usize = 10;

/// 默认分段大小：2MB
pub const DEFAULT_SEGMENT_SIZE: u64 = 2 * 1024 * 1024;

/// 默认分段重试次数（不含首次尝试）
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// 默认重试间隔（毫秒）
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// 默认读超时：连续这么久收不到任何字节即判定连接停滞
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// 默认建连超时
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// 默认浏览器标识
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3770.142 Safari/537.36";

/// 单次传输的配置，传输开始后不可变。
#[derive(Debug, Clone)]
pub struct TransferConfig {
    /// 源地址
    pub url: String,
    /// 本地保存路径
    pub save_path: PathBuf,
    /// 最大 worker 数
    pub max_workers: usize,
    /// 每个分段的字节数
    pub segment_size: u64,
    /// 代理地址，作用于所有协议
    pub proxy: Option<String>,
    /// 分段失败后的最大重试次数
    pub max_retries: usize,
    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,
    /// 单次请求的总时长上限（含读取 body），`None` 表示不限制
    pub request_timeout: Option<Duration>,
    /// 两次读到数据之间的最长间隔，每读到数据就重新计时；`None` 表示不限制
    pub read_timeout: Option<Duration>,
    pub connect_timeout: Duration,
    pub user_agent: String,
    /// 附加的静态请求头
    pub headers: Vec<(String, String)>,
    /// Basic 认证的用户名与密码
    pub(crate) basic_auth: Option<(String, String)>,
}

impl TransferConfig {
    pub fn new(url: impl Into<String>, save_path: impl AsRef<Path>) -> Self {
        Self {
            url: url.into(),
            save_path: save_path.as_ref().to_path_buf(),
            max_workers: DEFAULT_MAX_WORKERS,
            segment_size: DEFAULT_SEGMENT_SIZE,
            proxy: None,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            request_timeout: None,
            read_timeout: Some(DEFAULT_READ_TIMEOUT),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
            basic_auth: None,
        }
    }

    pub fn max_workers(mut self, n: usize) -> Self {
        self.max_workers = n;
        self
    }

    pub fn segment_size(mut self, size: u64) -> Self {
        self.segment_size = size;
        self
    }

    /// 设置代理；传空字符串表示不使用代理。
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        let p = proxy.into();
        self.proxy = if p.is_empty() { None } else { Some(p) };
        self
    }

    pub fn max_retries(mut self, n: usize) -> Self {
        self.max_retries = n;
        self
    }

    pub fn retry_delay_ms(mut self, ms: u64) -> Self {
        self.retry_delay_ms = ms;
        self
    }

    pub fn request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// 追加一个静态请求头，每个请求都会携带。
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// 使用 Basic 认证，生成固定的 `Authorization` 头。
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    pub(crate) fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// 校验配置；worker 数与分段大小都必须大于 0，保存路径必须以文件名结尾。
    pub fn validate(&self) -> Result<(), TransferError> {
        if self.max_workers == 0 {
            return Err(TransferError::InvalidConfig("max_workers 必须大于 0".into()));
        }
        if self.segment_size == 0 {
            return Err(TransferError::InvalidConfig("segment_size 必须大于 0".into()));
        }
        if self.save_path.file_name().is_none() {
            return Err(TransferError::InvalidConfig(format!(
                "保存路径缺少文件名: {}",
                self.save_path.display()
            )));
        }
        Ok(())
    }
}

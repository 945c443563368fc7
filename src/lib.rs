/// 内部实现模块
mod internal;

#[cfg(test)]
mod tests;

/// 分段并发传输：对外入口
pub mod transfer {
    use crate::internal;
    pub use internal::transfer::structs::*;
    pub use internal::transfer::traits::transfer_hook::TransferHook;
    pub use internal::transfer::structs::transfer_config::{
        DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_RETRIES, DEFAULT_MAX_WORKERS,
        DEFAULT_READ_TIMEOUT, DEFAULT_RETRY_DELAY_MS, DEFAULT_SEGMENT_SIZE,
        DEFAULT_USER_AGENT,
    };
    pub use internal::transfer::structs::segmented_transfer::DEFAULT_SAMPLE_INTERVAL;

    /// 各组成部分单独可用：探测、拉取、写入、监控
    pub mod functions {
        use crate::internal;
        pub use internal::transfer::functions::*;
    }
}

/// 有界工作池，不限于分段传输
pub mod pool {
    use crate::internal;
    pub use internal::pool::structs::*;
}

//! 命令行入口：`segment_dl --url <地址> [--name <文件名>]`

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use percent_encoding::percent_decode_str;
use tracing_subscriber::EnvFilter;
use url::Url;

use segment_dl::transfer::{
    SegmentedTransfer, TransferConfig, TransferStatus, DEFAULT_MAX_RETRIES, DEFAULT_MAX_WORKERS,
    DEFAULT_SEGMENT_SIZE,
};

/// 未能从地址得出文件名时使用的默认名
const FALLBACK_FILE_NAME: &str = "download.bin";

#[derive(Parser)]
#[command(name = "segment_dl", about = "分段并发下载单个 HTTP 资源")]
struct Args {
    /// 下载地址
    #[arg(long)]
    url: String,

    /// 保存的文件名，默认取地址最后一段
    #[arg(long)]
    name: Option<String>,

    /// 最大 worker 数
    #[arg(long, default_value_t = DEFAULT_MAX_WORKERS)]
    workers: usize,

    /// 分段大小（字节）
    #[arg(long, default_value_t = DEFAULT_SEGMENT_SIZE)]
    segment_size: u64,

    /// 代理地址
    #[arg(long)]
    proxy: Option<String>,

    /// 分段失败重试次数
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    retries: usize,
}

/// 取地址路径的最后一段并做百分号解码；为空时返回默认名。
fn file_name_from_url(raw: &str) -> String {
    let Ok(url) = Url::parse(raw) else {
        return FALLBACK_FILE_NAME.to_string();
    };
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .map(|last| percent_decode_str(last).decode_utf8_lossy().into_owned())
        .filter(|name| !name.is_empty() && name != "." && name != "..")
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let name = args.name.unwrap_or_else(|| file_name_from_url(&args.url));

    let mut config = TransferConfig::new(&args.url, &name)
        .max_workers(args.workers)
        .segment_size(args.segment_size)
        .max_retries(args.retries);
    if let Some(proxy) = args.proxy {
        config = config.proxy(proxy);
    }

    let transfer = match SegmentedTransfer::new(config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let transfer = transfer
        .with_on_status_hook(|status| {
            if let TransferStatus::Transferring { total, workers, .. } = status {
                println!("Content-Length: {total}");
                println!("download thread count: {workers}");
            }
        })
        .with_on_speed_hook(|sample| println!("download speed: {sample}"));

    let cancel = transfer.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let before = Instant::now();
    match transfer.send().await {
        Ok(_) => {
            println!("download finish, cost time: {:?}", before.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("download failed: {e}");
            ExitCode::FAILURE
        }
    }
}

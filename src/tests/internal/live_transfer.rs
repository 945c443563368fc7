//! 真实服务器测试：`src/tests/env/live.env` 中配置了 `SEGMENT_DL_URL` 才会运行。

use tempfile::TempDir;

use crate::tests::load_live_url_optional;
use crate::transfer::{SegmentedTransfer, TransferConfig};

#[tokio::test]
async fn live_download_matches_content_length() {
    let Some(url) = load_live_url_optional() else {
        eprintln!("未配置 SEGMENT_DL_URL，跳过");
        return;
    };
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("live.bin");

    let report = SegmentedTransfer::new(TransferConfig::new(&url, &path))
        .unwrap()
        .with_on_speed_hook(|s| println!("download speed: {s}"))
        .send()
        .await
        .unwrap();

    assert_eq!(report.bytes_written, report.total);
    assert_eq!(std::fs::metadata(&path).unwrap().len(), report.total);
}

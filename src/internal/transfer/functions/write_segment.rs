//! 文件写入：把分段数据写到目标文件的绝对偏移处。
//!
//! 每次写入单独打开文件，游标只属于本次打开的句柄；
//! 各分段区间互不重叠，多个 worker 并发写同一文件不会相互覆盖。

use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncSeekExt, AsyncWriteExt};

use crate::internal::transfer::structs::TransferError;

/// 从 `offset` 起写入 `data`，不截断文件，不动区间外的字节；文件不存在时创建。
pub async fn write_at(path: &Path, offset: u64, data: &[u8]) -> Result<(), TransferError> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .await
        .map_err(TransferError::OpenFile)?;

    file.seek(SeekFrom::Start(offset))
        .await
        .map_err(TransferError::WriteFile)?;
    file.write_all(data)
        .await
        .map_err(TransferError::WriteFile)?;
    file.flush().await.map_err(TransferError::WriteFile)?;
    Ok(())
}

/// 创建（或清空）目标文件并预分配到 `total` 字节。
pub async fn preallocate(path: &Path, total: u64) -> Result<(), TransferError> {
    let file = File::create(path).await.map_err(TransferError::OpenFile)?;
    file.set_len(total)
        .await
        .map_err(TransferError::PreallocateFile)?;
    Ok(())
}

/// 全部分段写完后落盘。
pub async fn sync_file(path: &Path) -> Result<(), TransferError> {
    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .await
        .map_err(TransferError::OpenFile)?;
    file.sync_all().await.map_err(TransferError::WriteFile)
}

/// 传输期间使用的临时文件：与目标同目录，文件名追加 `.part`。
pub fn partial_path(save_path: &Path) -> PathBuf {
    let mut name = save_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    save_path.with_file_name(name)
}

/// 全部分段落盘后把临时文件改名为目标文件，覆盖已有的同名文件。
pub async fn promote_partial(partial: &Path, save_path: &Path) -> Result<(), TransferError> {
    tokio::fs::rename(partial, save_path)
        .await
        .map_err(TransferError::RenameFile)
}

/// 失败或取消时清理未完成的临时文件。
pub(crate) async fn remove_partial(path: &Path) {
    let _ = tokio::fs::remove_file(path).await;
}

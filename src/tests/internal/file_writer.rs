//! 文件写入测试：按偏移写入、不截断、并发写不同区间。

use std::sync::Arc;

use tempfile::TempDir;

use crate::tests::random_payload;
use crate::transfer::functions::{partial_path, preallocate, promote_partial, write_at};

#[tokio::test]
async fn writes_at_offset_without_truncating() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.bin");
    std::fs::write(&path, b"aaaaaaaaaa").unwrap();

    write_at(&path, 3, b"XYZ").await.unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"aaaXYZaaaa");
}

#[tokio::test]
async fn creates_missing_file_and_extends_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.bin");

    write_at(&path, 4, b"tail").await.unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"\0\0\0\0tail");
}

#[tokio::test]
async fn preallocate_sets_length_and_clears_old_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pre.bin");
    std::fs::write(&path, vec![7u8; 64]).unwrap();

    preallocate(&path, 16).await.unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), vec![0u8; 16]);
}

#[tokio::test]
async fn concurrent_disjoint_writes_match_sequential() {
    let dir = TempDir::new().unwrap();
    let concurrent = Arc::new(dir.path().join("concurrent.bin"));
    let sequential = dir.path().join("sequential.bin");

    let data = Arc::new(random_payload(64 * 1024));
    let chunk = 4096usize;

    for offset in (0..data.len()).step_by(chunk) {
        write_at(&sequential, offset as u64, &data[offset..offset + chunk])
            .await
            .unwrap();
    }

    // 倒序发起，打乱完成顺序
    let mut handles = Vec::new();
    for offset in (0..data.len()).step_by(chunk).rev() {
        let path = Arc::clone(&concurrent);
        let data = Arc::clone(&data);
        handles.push(tokio::spawn(async move {
            write_at(&path, offset as u64, &data[offset..offset + chunk]).await
        }));
    }
    for h in handles {
        h.await.unwrap().unwrap();
    }

    let a = std::fs::read(concurrent.as_path()).unwrap();
    let b = std::fs::read(&sequential).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, *data);
}

#[tokio::test]
async fn write_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("x.bin");
    assert!(write_at(&path, 0, b"x").await.is_err());
}

#[test]
fn partial_path_is_sibling_with_suffix() {
    assert_eq!(
        partial_path(std::path::Path::new("/data/movie.mkv")),
        std::path::PathBuf::from("/data/movie.mkv.part")
    );
    assert_eq!(
        partial_path(std::path::Path::new("plain")),
        std::path::PathBuf::from("plain.part")
    );
}

#[tokio::test]
async fn promote_replaces_existing_destination() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("final.bin");
    let partial = partial_path(&dest);
    std::fs::write(&dest, b"old").unwrap();
    std::fs::write(&partial, b"new content").unwrap();

    promote_partial(&partial, &dest).await.unwrap();

    assert_eq!(std::fs::read(&dest).unwrap(), b"new content");
    assert!(!partial.exists());
}

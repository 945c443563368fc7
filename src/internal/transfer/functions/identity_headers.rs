use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use url::Url;

use crate::internal::transfer::structs::TransferError;

/// 解析源地址，只接受带主机名的 http / https 地址。
pub fn parse_source_url(raw: &str) -> Result<Url, TransferError> {
    let url = Url::parse(raw).map_err(|e| TransferError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(TransferError::InvalidUrl(format!("不支持的协议: {other}")));
        }
    }
    if url.host_str().is_none() {
        return Err(TransferError::InvalidUrl(format!("缺少主机名: {raw}")));
    }
    Ok(url)
}

/// 地址的 authority 部分：`host` 或 `host:port`。
pub fn authority(url: &Url) -> Result<String, TransferError> {
    let host = url
        .host_str()
        .ok_or_else(|| TransferError::InvalidUrl(format!("缺少主机名: {url}")))?;
    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// 探测与分段请求共用的 `Referer` 头，由地址的 authority 得出。
///
/// `Host` 由 hyper 按每次实际请求的地址生成，重定向后随目标主机变化。
pub fn identity_headers(url: &Url) -> Result<HeaderMap, TransferError> {
    let referer = format!("{}://{}/", url.scheme(), authority(url)?);
    let value = HeaderValue::from_str(&referer).map_err(|e| TransferError::InvalidHeader {
        name: REFERER.to_string(),
        message: e.to_string(),
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(REFERER, value);
    Ok(headers)
}

//! 长度探测：只取元数据（HEAD），从 `Content-Length` 得到资源总长度。

use reqwest::header::{HeaderValue, CONTENT_LENGTH};
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::internal::transfer::structs::TransferError;

use super::identity_headers::identity_headers;

/// 发起 HEAD 请求并解析 `Content-Length`。
///
/// 头缺失或无法解析都是错误；长度为 0 原样返回，由调用方决定是否拒绝。
pub async fn probe_content_length(
    client: &Client,
    url: &Url,
    cancel: &CancellationToken,
) -> Result<u64, TransferError> {
    let request = client.head(url.clone()).headers(identity_headers(url)?);

    let resp = tokio::select! {
        biased;

        _ = cancel.cancelled() => return Err(TransferError::Cancelled),
        resp = request.send() => resp?,
    };

    let status = resp.status();
    if !status.is_success() {
        return Err(TransferError::UnexpectedStatus {
            status: status.as_u16(),
        });
    }

    // HEAD 响应没有 body，不能用 `resp.content_length()`，只能读头
    parse_content_length(resp.headers().get(CONTENT_LENGTH))
}

/// 解析 `Content-Length` 头的值。
pub fn parse_content_length(raw: Option<&HeaderValue>) -> Result<u64, TransferError> {
    let raw = raw.ok_or(TransferError::MissingContentLength)?;
    let text = raw
        .to_str()
        .map_err(|e| TransferError::InvalidContentLength(e.to_string()))?;
    text.trim()
        .parse::<u64>()
        .map_err(|_| TransferError::InvalidContentLength(text.to_string()))
}

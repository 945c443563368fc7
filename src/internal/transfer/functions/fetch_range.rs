//! 分段拉取：带 `Range` 头的 GET，校验状态码与长度后返回完整分段数据。

use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use reqwest::header::{CONTENT_RANGE, RANGE};
use reqwest::{Client, StatusCode};
use tokio_util::sync::CancellationToken;

use crate::internal::transfer::structs::{Segment, TransferError};

use super::identity_headers::identity_headers;

/// 拉取分段时的参数（形参超过 3 个，用 struct 承载）。
pub struct FetchRangeParams<'a> {
    pub client: &'a Client,
    pub segment: &'a Segment,
    /// 资源总长度，用于 `Content-Range` 头与 200 响应的判断
    pub total: u64,
    pub cancel: &'a CancellationToken,
}

/// 拉取一个分段的全部字节。
///
/// 服务器须返回 206；只有分段覆盖整个资源时才接受 200。
/// 收到的字节数必须与分段长度一致。
pub async fn fetch_range(params: FetchRangeParams<'_>) -> Result<Bytes, TransferError> {
    let segment = params.segment;
    let request = params
        .client
        .get(segment.url.as_ref().clone())
        .headers(identity_headers(&segment.url)?)
        .header(RANGE, segment.range_header())
        .header(CONTENT_RANGE, segment.content_range_header(params.total));

    let resp = tokio::select! {
        biased;

        _ = params.cancel.cancelled() => return Err(TransferError::Cancelled),
        resp = request.send() => resp?,
    };

    let status = resp.status();
    let whole_resource = segment.start == 0 && segment.length == params.total;
    match status {
        StatusCode::PARTIAL_CONTENT => {}
        StatusCode::OK if whole_resource => {}
        StatusCode::OK => {
            return Err(TransferError::RangeNotSupported {
                status: status.as_u16(),
            });
        }
        _ => {
            return Err(TransferError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
    }

    let expected = segment.length;
    let mut body = BytesMut::with_capacity(usize::try_from(expected).unwrap_or(0));
    let mut stream = resp.bytes_stream();

    loop {
        let next = tokio::select! {
            biased;

            _ = params.cancel.cancelled() => return Err(TransferError::Cancelled),
            next = stream.next() => next,
        };
        let Some(chunk) = next else {
            break;
        };
        let chunk = chunk?;
        if body.len() as u64 + chunk.len() as u64 > expected {
            return Err(TransferError::BodyLengthMismatch {
                expected,
                actual: body.len() as u64 + chunk.len() as u64,
            });
        }
        body.extend_from_slice(&chunk);
    }

    if body.len() as u64 != expected {
        return Err(TransferError::BodyLengthMismatch {
            expected,
            actual: body.len() as u64,
        });
    }
    Ok(body.freeze())
}

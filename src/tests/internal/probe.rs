//! 长度探测测试。

use reqwest::header::HeaderValue;
use tokio_util::sync::CancellationToken;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::tests::{random_payload, FixedResponseServer, RangeResponder, RangeServer, FILE_PATH};
use crate::transfer::functions::{
    authority, build_client, identity_headers, parse_content_length, parse_source_url,
    probe_content_length,
};
use crate::transfer::{TransferConfig, TransferError};

fn client() -> reqwest::Client {
    build_client(&TransferConfig::new("http://unused", "unused")).unwrap()
}

#[tokio::test]
async fn probe_reads_content_length() {
    let server = RangeServer::start(RangeResponder::new(random_payload(12345))).await;
    let url = Url::parse(&server.url()).unwrap();

    let total = probe_content_length(&client(), &url, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(total, 12345);
}

#[tokio::test]
async fn redirect_to_another_host_carries_target_host() {
    let target = MockServer::start().await;
    let target_host = target.address().to_string();
    Mock::given(path(FILE_PATH))
        .and(header("host", target_host.as_str()))
        .respond_with(RangeResponder::new(random_payload(777)))
        .mount(&target)
        .await;

    let origin = MockServer::start().await;
    let location = format!("{}{}", target.uri(), FILE_PATH);
    Mock::given(path(FILE_PATH))
        .respond_with(ResponseTemplate::new(302).insert_header("location", location.as_str()))
        .mount(&origin)
        .await;
    let url = Url::parse(&format!("{}{}", origin.uri(), FILE_PATH)).unwrap();

    let total = probe_content_length(&client(), &url, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(total, 777);
}

#[tokio::test]
async fn head_without_length_is_missing() {
    let server = FixedResponseServer::start("HTTP/1.1 200 OK\r\nconnection: close\r\n\r\n").await;
    let url = Url::parse(&server.url()).unwrap();

    let err = probe_content_length(&client(), &url, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::MissingContentLength));
}

#[tokio::test]
async fn probe_fails_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let url = Url::parse(&format!("{}/missing", server.uri())).unwrap();

    let err = probe_content_length(&client(), &url, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::UnexpectedStatus { status: 404 }));
}

#[tokio::test]
async fn probe_respects_cancellation() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let url = Url::parse("http://127.0.0.1:9/never").unwrap();

    let err = probe_content_length(&client(), &url, &cancel).await.unwrap_err();

    assert!(matches!(err, TransferError::Cancelled));
}

#[test]
fn content_length_parsing() {
    assert_eq!(parse_content_length(Some(&HeaderValue::from_static("42"))).unwrap(), 42);
    assert_eq!(parse_content_length(Some(&HeaderValue::from_static(" 7 "))).unwrap(), 7);
    assert!(matches!(
        parse_content_length(None),
        Err(TransferError::MissingContentLength)
    ));
    assert!(matches!(
        parse_content_length(Some(&HeaderValue::from_static("abc"))),
        Err(TransferError::InvalidContentLength(_))
    ));
    assert!(matches!(
        parse_content_length(Some(&HeaderValue::from_static("-1"))),
        Err(TransferError::InvalidContentLength(_))
    ));
}

#[test]
fn referer_comes_from_authority() {
    let url = Url::parse("https://cdn.example.com:8443/a/b.iso?x=1").unwrap();
    assert_eq!(authority(&url).unwrap(), "cdn.example.com:8443");

    let headers = identity_headers(&url).unwrap();
    assert_eq!(headers.get("referer").unwrap(), "https://cdn.example.com:8443/");
    // Host 交给 HTTP 栈按实际请求地址生成
    assert!(headers.get("host").is_none());

    let plain = Url::parse("http://example.com/file").unwrap();
    assert_eq!(authority(&plain).unwrap(), "example.com");
}

#[test]
fn source_url_must_be_http() {
    assert!(parse_source_url("https://example.com/f").is_ok());
    assert!(matches!(
        parse_source_url("ftp://example.com/f"),
        Err(TransferError::InvalidUrl(_))
    ));
    assert!(matches!(
        parse_source_url("not a url"),
        Err(TransferError::InvalidUrl(_))
    ));
}

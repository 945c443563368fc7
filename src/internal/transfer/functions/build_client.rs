//! 按传输配置构建 HTTP 客户端：浏览器标识、静态请求头、代理与超时。

use base64::Engine;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Proxy};

use crate::internal::transfer::structs::{TransferConfig, TransferError};

/// 构建本次传输共用的客户端；`Client` 内部是 `Arc`，克隆给各 worker 即可。
pub fn build_client(config: &TransferConfig) -> Result<Client, TransferError> {
    let mut headers = HeaderMap::new();

    for (name, value) in &config.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            TransferError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
            }
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            TransferError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
            }
        })?;
        headers.append(header_name, header_value);
    }

    if let Some((username, password)) = &config.basic_auth {
        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{username}:{password}"));
        let mut auth_value = HeaderValue::from_str(&format!("Basic {}", token))
            .map_err(|e| TransferError::InvalidHeader {
                name: AUTHORIZATION.to_string(),
                message: e.to_string(),
            })?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
    }

    let mut builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .connect_timeout(config.connect_timeout);

    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = config.read_timeout {
        builder = builder.read_timeout(timeout);
    }

    if let Some(proxy) = &config.proxy {
        builder = builder.proxy(Proxy::all(proxy).map_err(TransferError::BuildClient)?);
    }

    builder.build().map_err(TransferError::BuildClient)
}

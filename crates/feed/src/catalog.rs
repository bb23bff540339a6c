use async_trait::async_trait;
use meigara_core::catalog::error::CatalogError;
use meigara_core::catalog::port::CatalogSource;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// # Summary
/// 通过 HTTP GET 下载合约主表的数据源。
///
/// # Invariants
/// - 只有 200 响应被视为成功，其余状态码 (含其他 2xx) 均返回 `CatalogError::Status`。
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    /// # Summary
    /// 创建指向 `url` 的数据源。
    ///
    /// # Arguments
    /// * `url`: 合约主表 JSON 地址。
    /// * `connect_timeout`: 建立连接的超时。主表有数十 MB，下载过程本身不设时限。
    pub fn new(url: impl Into<String>, connect_timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    /// # Summary
    /// 下载并解析合约主表。
    ///
    /// # Logic
    /// 1. 发起 GET 请求。
    /// 2. 状态码不是 200 时返回 `Status`，由调用方决定是否记录。
    /// 3. 将响应体解析为任意 JSON。
    async fn fetch_json(&self) -> Result<Value, CatalogError> {
        debug!("GET {}", self.url);
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if resp.status() != StatusCode::OK {
            return Err(CatalogError::Status(resp.status().as_u16()));
        }

        resp.json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }

    fn location(&self) -> &str {
        &self.url
    }
}

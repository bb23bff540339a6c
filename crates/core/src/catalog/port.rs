use crate::catalog::error::CatalogError;
use async_trait::async_trait;
use serde_json::Value;

/// # Summary
/// 合约主表数据源接口。
///
/// # Invariants
/// - 只负责取回原始 JSON，不做结构校验；结构转换由 `Table::from_json` 完成。
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// # Summary
    /// 下载完整的合约主表。
    ///
    /// # Returns
    /// 成功返回原始 JSON；非 200 响应返回 `CatalogError::Status`。
    async fn fetch_json(&self) -> Result<Value, CatalogError>;

    /// 数据源地址，仅用于日志。
    fn location(&self) -> &str;
}

use thiserror::Error;

/// # Summary
/// 合约主表下载、转换与落盘过程中的错误。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum CatalogError {
    /// 连接失败、超时等传输层错误
    #[error("Network error: {0}")]
    Network(String),
    /// 服务端返回非 200 状态码
    #[error("Failed to download JSON data. Status code: {0}")]
    Status(u16),
    /// 响应体不是合法 JSON
    #[error("Parse error: {0}")]
    Parse(String),
    /// JSON 结构不是对象数组
    #[error("Unexpected JSON shape: {0}")]
    Shape(String),
    /// CSV 写入失败
    #[error("IO error: {0}")]
    Io(String),
}

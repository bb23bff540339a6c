use thiserror::Error;

/// # Summary
/// 行情域错误枚举，处理网络、解析及数据缺失等问题。
///
/// # Invariants
/// - 空的历史序列不是错误，由调用方判空。
#[derive(Error, Debug)]
pub enum MarketError {
    // 网络层错误或非 2xx 响应
    #[error("Network error: {0}")]
    Network(String),
    // 响应体与预期结构不符
    #[error("Parse error: {0}")]
    Parse(String),
    // 提供者明确表示标的不存在
    #[error("Data not found")]
    NotFound,
    // 提供者返回的业务错误描述
    #[error("Provider error: {0}")]
    Unknown(String),
}

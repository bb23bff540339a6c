use thiserror::Error;

/// # Summary
/// 标的列表操作错误。
///
/// # Invariants
/// - 越界与负数下标不做区分，对外统一为同一条信息。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// 下标为负或不小于当前长度
    #[error("No symbol found")]
    OutOfRange { index: i64, len: usize },
}

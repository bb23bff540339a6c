use crate::registry::error::RegistryError;
use async_trait::async_trait;

/// # Summary
/// 进程内有序标的列表的服务契约。
///
/// # Invariants
/// - 元素身份即其当前位置下标，删除会使后续元素整体左移。
/// - 不做去重，不做持久化，进程启动时为空。
/// - 实现必须保证并发调用下边界检查与修改的原子性。
#[async_trait]
pub trait InstrumentRegistry: Send + Sync {
    /// # Summary
    /// 返回当前全部标的的快照。
    async fn list(&self) -> Vec<String>;

    /// # Summary
    /// 在末尾追加标的，总是成功。
    async fn add(&self, symbol: String);

    /// # Summary
    /// 替换 `index` 处的标的。
    ///
    /// # Returns
    /// `index < 0` 或 `index >= len` 时返回 `RegistryError::OutOfRange`。
    async fn update(&self, index: i64, symbol: String) -> Result<(), RegistryError>;

    /// # Summary
    /// 删除 `index` 处的标的，并返回被删除的值。
    ///
    /// # Returns
    /// 越界规则同 `update`。
    async fn remove(&self, index: i64) -> Result<String, RegistryError>;
}

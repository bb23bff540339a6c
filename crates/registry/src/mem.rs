use async_trait::async_trait;
use meigara_core::registry::error::RegistryError;
use meigara_core::registry::port::InstrumentRegistry;
use tokio::sync::RwLock;
use tracing::debug;

/// # Summary
/// 基于 `RwLock<Vec<String>>` 的内存标的列表。
///
/// # Invariants
/// - 所有修改都在同一把写锁内完成边界检查与变更，并发请求被串行化。
/// - 不提供持久化，进程退出即丢失。
#[derive(Default)]
pub struct MemRegistry {
    // 有序标的序列
    entries: RwLock<Vec<String>>,
}

impl MemRegistry {
    /// # Summary
    /// 创建一个空的 MemRegistry 实例。
    pub fn new() -> Self {
        Self::default()
    }
}

/// # Summary
/// 将外部传入的有符号下标换算为合法位置。
///
/// # Logic
/// 负数或超出长度一律视为越界，不支持从末尾反向取值。
fn checked_index(index: i64, len: usize) -> Result<usize, RegistryError> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(RegistryError::OutOfRange { index, len })
}

#[async_trait]
impl InstrumentRegistry for MemRegistry {
    async fn list(&self) -> Vec<String> {
        self.entries.read().await.clone()
    }

    async fn add(&self, symbol: String) {
        let mut entries = self.entries.write().await;
        debug!("registry add {} at index {}", symbol, entries.len());
        entries.push(symbol);
    }

    /// # Summary
    /// 替换指定位置的标的。
    ///
    /// # Logic
    /// 1. 获取写锁。
    /// 2. 在锁内校验下标并原地替换。
    async fn update(&self, index: i64, symbol: String) -> Result<(), RegistryError> {
        let mut entries = self.entries.write().await;
        let i = checked_index(index, entries.len())?;
        debug!("registry update index {}: {} -> {}", i, entries[i], symbol);
        entries[i] = symbol;
        Ok(())
    }

    /// # Summary
    /// 删除指定位置的标的。
    ///
    /// # Logic
    /// 1. 获取写锁。
    /// 2. 在锁内校验下标并移除，后续元素左移一位。
    async fn remove(&self, index: i64) -> Result<String, RegistryError> {
        let mut entries = self.entries.write().await;
        let i = checked_index(index, entries.len())?;
        let removed = entries.remove(i);
        debug!("registry remove index {}: {}", i, removed);
        Ok(removed)
    }
}

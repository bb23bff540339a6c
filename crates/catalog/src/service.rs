use std::path::{Path, PathBuf};
use std::sync::Arc;

use meigara_core::catalog::entity::{InstrumentRecord, Table};
use meigara_core::catalog::error::CatalogError;
use meigara_core::catalog::port::CatalogSource;
use serde_json::Value;
use tracing::{info, warn};

use crate::writer::write_table;

/// 一次成功落盘的摘要。
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogReport {
    /// 写出的 CSV 路径
    pub path: PathBuf,
    /// 行数
    pub rows: usize,
    /// 列数
    pub columns: usize,
    /// 检索到的记录 (未请求检索或未命中时为 None)
    pub found: Option<InstrumentRecord>,
}

/// # Summary
/// 合约主表应用服务：下载 → 表格化 → 写 CSV → 检索。
///
/// # Invariants
/// - 远端失败 (网络、状态码、结构) 只记录日志并返回 `None`，不会向上抛错。
/// - 表格在一次 `run` 结束后即被丢弃，不在内存中保留。
pub struct InstrumentCatalog {
    source: Arc<dyn CatalogSource>,
    output: PathBuf,
    symbol_field: String,
}

impl InstrumentCatalog {
    /// # Summary
    /// 创建服务，检索字段默认为 `symbol`。
    ///
    /// # Arguments
    /// * `source`: 合约主表数据源。
    /// * `output`: CSV 输出路径。
    pub fn new(source: Arc<dyn CatalogSource>, output: impl Into<PathBuf>) -> Self {
        Self {
            source,
            output: output.into(),
            symbol_field: "symbol".to_string(),
        }
    }

    /// 指定按哪个字段检索。
    pub fn with_symbol_field(mut self, field: impl Into<String>) -> Self {
        self.symbol_field = field.into();
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// # Summary
    /// 下载原始 JSON，失败时记录状态码或错误并返回 `None`。
    pub async fn fetch_catalog(&self) -> Option<Value> {
        match self.source.fetch_json().await {
            Ok(raw) => Some(raw),
            Err(CatalogError::Status(code)) => {
                warn!("Failed to download JSON data. Status code: {}", code);
                None
            }
            Err(e) => {
                warn!("Failed to download JSON data from {}: {}", self.source.location(), e);
                None
            }
        }
    }

    /// # Summary
    /// 在表格中按配置字段检索代码。
    pub fn lookup(&self, table: &Table, symbol: &str) -> Option<InstrumentRecord> {
        table.lookup(&self.symbol_field, symbol)
    }

    /// # Summary
    /// 执行一次完整流程。
    ///
    /// # Logic
    /// 1. 下载 JSON；失败或结构不符时返回 `Ok(None)`。
    /// 2. 空数组不落盘，返回 `Ok(None)`。
    /// 3. 写出 CSV；本地写盘失败返回 `Err`。
    /// 4. 若给定 `lookup`，检索并记录命中的记录。
    ///
    /// # Arguments
    /// * `lookup`: 可选的示例检索代码。
    ///
    /// # Returns
    /// 成功落盘时返回 `CatalogReport`。
    pub async fn run(&self, lookup: Option<&str>) -> Result<Option<CatalogReport>, CatalogError> {
        let Some(raw) = self.fetch_catalog().await else {
            return Ok(None);
        };

        let table = match Table::from_json(&raw) {
            Ok(table) => table,
            Err(e) => {
                warn!("Catalog from {} rejected: {}", self.source.location(), e);
                return Ok(None);
            }
        };
        if table.is_empty() {
            warn!("Catalog from {} is empty, nothing to save", self.source.location());
            return Ok(None);
        }

        write_table(&table, &self.output)?;
        info!(
            "Data saved to {} ({} rows, {} columns)",
            self.output.display(),
            table.len(),
            table.width()
        );

        let found = lookup.and_then(|symbol| {
            let record = self.lookup(&table, symbol)?;
            info!(
                "Information for symbol {}: {}",
                symbol,
                serde_json::to_string(&record).unwrap_or_default()
            );
            Some(record)
        });

        Ok(Some(CatalogReport {
            path: self.output.clone(),
            rows: table.len(),
            columns: table.width(),
            found,
        }))
    }
}

use meigara_core::catalog::entity::Table;
use meigara_core::catalog::error::CatalogError;
use std::fs::File;
use std::path::Path;

/// # Summary
/// 将表格写为逗号分隔的 CSV 文件。
///
/// # Logic
/// 1. 无列的表格写出空文件。
/// 2. 首行为表头，不输出行号列。
/// 3. 空值单元格写为空串，含逗号或引号的文本由 csv 按 RFC 4180 转义。
///
/// # Arguments
/// * `table`: 待写出的表格。
/// * `path`: 目标文件，已存在则覆盖。
pub fn write_table(table: &Table, path: &Path) -> Result<(), CatalogError> {
    let file = File::create(path)
        .map_err(|e| CatalogError::Io(format!("failed to create {}: {}", path.display(), e)))?;
    if table.width() == 0 {
        return Ok(());
    }

    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(table.column_names())
        .map_err(|e| CatalogError::Io(format!("failed to write csv header: {}", e)))?;

    for row in table.rows() {
        wtr.write_record(row.iter().map(|cell| cell.to_string()))
            .map_err(|e| CatalogError::Io(format!("failed to write csv row: {}", e)))?;
    }

    wtr.flush()
        .map_err(|e| CatalogError::Io(format!("failed to flush {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_table_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instruments.csv");
        let table = Table::from_json(&json!([
            {"symbol": "AAPL", "price": 150},
            {"symbol": "BRK,A", "note": "say \"hi\""}
        ]))
        .unwrap();

        write_table(&table, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "symbol,price,note\nAAPL,150,\n\"BRK,A\",,\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_write_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_table(&Table::default(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.csv");
        let err = write_table(&Table::default(), &path).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}

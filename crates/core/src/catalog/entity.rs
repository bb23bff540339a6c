use crate::catalog::error::CatalogError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// # Summary
/// 表格单元格的标量值。
///
/// # Invariants
/// - 上游 JSON 中的嵌套数组/对象以其 JSON 文本保存为 `Text`。
/// - 以 untagged 方式序列化，与上游 JSON 的原始形态一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// # Summary
    /// 判断单元格是否与检索值相等。
    ///
    /// # Logic
    /// 1. 文本单元格做精确比较。
    /// 2. 数值与布尔按渲染后的文本比较。
    /// 3. 空值永不匹配。
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Scalar::Null => false,
            Scalar::Text(text) => text == value,
            other => other.to_string() == value,
        }
    }
}

impl From<&Value> for Scalar {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Scalar::Int(i),
                None => n.as_f64().map_or(Scalar::Null, Scalar::Float),
            },
            Value::String(s) => Scalar::Text(s.clone()),
            nested => Scalar::Text(nested.to_string()),
        }
    }
}

/// CSV 渲染：空值输出为空串。
impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// 单条合约记录：字段名 → 标量，字段顺序与表格列顺序一致。
pub type InstrumentRecord = IndexMap<String, Scalar>;

/// # Summary
/// 无固定 schema 的列式表格。
///
/// # Invariants
/// - 每一列的长度都等于 `rows`。
/// - 列顺序为键在 JSON 数组中首次出现的顺序。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: IndexMap<String, Vec<Scalar>>,
    rows: usize,
}

impl Table {
    /// # Summary
    /// 将 JSON 对象数组按结构直接转换为表格。
    ///
    /// # Logic
    /// 1. 校验顶层为数组、每个元素为对象。
    /// 2. 新出现的列在之前的行上补 `Null`。
    /// 3. 当前行缺失的列补 `Null`。
    ///
    /// # Arguments
    /// * `value`: 上游返回的原始 JSON。
    ///
    /// # Returns
    /// 结构不符时返回 `CatalogError::Shape`。
    pub fn from_json(value: &Value) -> Result<Self, CatalogError> {
        let items = value.as_array().ok_or_else(|| {
            CatalogError::Shape(format!("expected an array of objects, got {}", kind(value)))
        })?;

        let mut columns: IndexMap<String, Vec<Scalar>> = IndexMap::new();
        for (row, item) in items.iter().enumerate() {
            let object = item.as_object().ok_or_else(|| {
                CatalogError::Shape(format!("row {} is {}, not an object", row, kind(item)))
            })?;

            for (key, cell) in object {
                columns
                    .entry(key.clone())
                    .or_insert_with(|| vec![Scalar::Null; row])
                    .push(Scalar::from(cell));
            }
            for column in columns.values_mut() {
                if column.len() == row {
                    column.push(Scalar::Null);
                }
            }
        }

        Ok(Self {
            columns,
            rows: items.len(),
        })
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// 列数
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Option<&[Scalar]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// # Summary
    /// 取出第 `index` 行并组装为记录。
    pub fn row(&self, index: usize) -> Option<InstrumentRecord> {
        if index >= self.rows {
            return None;
        }
        self.columns
            .iter()
            .map(|(name, cells)| cells.get(index).map(|cell| (name.clone(), cell.clone())))
            .collect()
    }

    /// 按行迭代单元格引用，顺序与 `column_names` 一致。
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Scalar>> + '_ {
        (0..self.rows).map(move |row| {
            self.columns
                .values()
                .filter_map(|cells| cells.get(row))
                .collect()
        })
    }

    /// # Summary
    /// 线性扫描，返回 `field` 列首个等于 `value` 的行。
    ///
    /// # Logic
    /// 1. 列不存在或无匹配时记录日志并返回 `None`。
    /// 2. 不校验唯一性，首个匹配即返回。
    pub fn lookup(&self, field: &str, value: &str) -> Option<InstrumentRecord> {
        let Some(cells) = self.columns.get(field) else {
            info!("No column named {} in catalog", field);
            return None;
        };

        match cells.iter().position(|cell| cell.matches(value)) {
            Some(row) => self.row(row),
            None => {
                info!("No data found for symbol: {}", value);
                None
            }
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_two_instruments() {
        let raw = json!([
            {"symbol": "AAPL", "price": 150},
            {"symbol": "TSLA", "price": 700}
        ]);
        let table = Table::from_json(&raw).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.width(), 2);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["symbol", "price"]);

        let found = table.lookup("symbol", "AAPL").unwrap();
        assert_eq!(serde_json::to_value(&found).unwrap(), json!({"symbol": "AAPL", "price": 150}));
        assert!(table.lookup("symbol", "MSFT").is_none());
    }

    #[test]
    fn test_from_json_union_of_keys() {
        let raw = json!([
            {"token": "1", "symbol": "A"},
            {"symbol": "B", "lotsize": 50},
            {"exch_seg": "NSE"}
        ]);
        let table = Table::from_json(&raw).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["token", "symbol", "lotsize", "exch_seg"]
        );
        assert_eq!(
            table.column("lotsize").unwrap(),
            &[Scalar::Null, Scalar::Int(50), Scalar::Null]
        );
        assert_eq!(
            table.column("symbol").unwrap(),
            &[Scalar::Text("A".into()), Scalar::Text("B".into()), Scalar::Null]
        );
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let err = Table::from_json(&json!({"symbol": "AAPL"})).unwrap_err();
        assert!(matches!(err, CatalogError::Shape(_)));

        let err = Table::from_json(&json!([{"symbol": "AAPL"}, 3])).unwrap_err();
        assert!(matches!(err, CatalogError::Shape(_)));
    }

    #[test]
    fn test_empty_array_is_empty_table() {
        let table = Table::from_json(&json!([])).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.width(), 0);
        assert!(table.lookup("symbol", "AAPL").is_none());
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let raw = json!([
            {"symbol": "SBIN", "exch_seg": "NSE"},
            {"symbol": "SBIN", "exch_seg": "BSE"}
        ]);
        let table = Table::from_json(&raw).unwrap();
        let found = table.lookup("symbol", "SBIN").unwrap();
        assert_eq!(found.get("exch_seg"), Some(&Scalar::Text("NSE".into())));
    }

    #[test]
    fn test_lookup_numeric_and_missing_field() {
        let raw = json!([{"token": 3045, "symbol": "SBIN-EQ"}]);
        let table = Table::from_json(&raw).unwrap();

        assert!(table.lookup("token", "3045").is_some());
        assert!(table.lookup("name", "SBIN-EQ").is_none());
    }

    #[test]
    fn test_nested_values_kept_as_json_text() {
        let raw = json!([{"symbol": "X", "meta": {"a": 1}, "tags": [1, 2], "live": true, "tick": 0.05}]);
        let table = Table::from_json(&raw).unwrap();
        let row: Vec<String> = table.rows().next().unwrap().iter().map(|c| c.to_string()).collect();
        assert_eq!(row, vec!["X", r#"{"a":1}"#, "[1,2]", "true", "0.05"]);
    }
}

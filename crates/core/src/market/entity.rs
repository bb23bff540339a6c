use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// # Summary
/// 行情提供者返回的单根原始 K 线。
///
/// # Invariants
/// - 序列顺序由提供者决定 (按时间升序)，下游不重新排序。
/// - `time` 带交易所的 UTC 偏移，日线的日历日期以交易所当地时间为准。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    // K 线开始时间 (交易所当地时区)
    pub time: DateTime<FixedOffset>,
    // 开盘价
    pub open: f64,
    // 最高价
    pub high: f64,
    // 最低价
    pub low: f64,
    // 收盘价
    pub close: f64,
    // 调整后收盘价 (分红、拆股复权)
    pub adj_close: Option<f64>,
    // 成交量
    pub volume: f64,
}

/// # Summary
/// K 线颜色：收盘不低于开盘为 GREEN，否则为 RED。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Green,
    Red,
}

impl Color {
    /// 由开盘价与收盘价判定颜色，平盘记为 GREEN。
    pub fn from_open_close(open: f64, close: f64) -> Self {
        if open <= close { Color::Green } else { Color::Red }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Green => "GREEN",
            Color::Red => "RED",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # Summary
/// 经过规整与派生后的 K 线行，对应输出 CSV 的一行。
///
/// # Invariants
/// - 所有数值字段 (含 `ema`) 已四舍五入到 2 位小数。
/// - `color` 基于取整后的 `open`/`close` 计算。
/// - `ema` 在窗口预热完成前为 `None`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: DateTime<FixedOffset>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub color: Color,
    pub ema: Option<f64>,
}

/// 将已规整的行还原为原始 K 线，便于再次规整。
impl From<&PriceBar> for Candle {
    fn from(bar: &PriceBar) -> Self {
        Self {
            time: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            adj_close: None,
            volume: bar.volume,
        }
    }
}

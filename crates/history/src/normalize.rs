use meigara_core::market::entity::{Candle, Color, PriceBar};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::indicator::Ema;

/// 输出表的列名，统一小写
pub const COLUMNS: [&str; 8] = ["date", "open", "high", "low", "close", "volume", "color", "ema"];

/// # Summary
/// 四舍五入到 2 位小数。
///
/// # Logic
/// 1. 按 f64 的精确十进制展开转换为 `Decimal`。
/// 2. 使用银行家舍入 (half-to-even) 保留 2 位。
/// 3. NaN / 无穷等无法表示的值原样返回。
pub fn round2(x: f64) -> f64 {
    Decimal::from_f64_retain(x)
        .map(|d| d.round_dp(2))
        .and_then(|d| d.to_f64())
        .unwrap_or(x)
}

/// # Summary
/// 规整原始 K 线并派生 `color`、`ema` 两列。
///
/// # Logic
/// 1. 所有数值字段取整到 2 位小数。
/// 2. 基于取整后的开盘/收盘价判定颜色。
/// 3. 对取整后的收盘价逐根计算 EMA(period)，`is_warm()` 之前置空，其余取整。
/// 4. 行顺序保持输入顺序。
///
/// # Arguments
/// * `candles`: 提供者返回的 K 线。
/// * `period`: EMA 窗口，常用 9。
///
/// # Returns
/// 与输入等长的 `PriceBar` 列表。
pub fn normalize(candles: &[Candle], period: u32) -> Vec<PriceBar> {
    let mut ema = Ema::new(period);

    candles
        .iter()
        .map(|candle| {
            let open = round2(candle.open);
            let close = round2(candle.close);
            let value = ema.update(close);
            PriceBar {
                date: candle.time,
                open,
                high: round2(candle.high),
                low: round2(candle.low),
                close,
                volume: round2(candle.volume),
                color: Color::from_open_close(open, close),
                ema: ema.is_warm().then(|| round2(value)),
            }
        })
        .collect()
}

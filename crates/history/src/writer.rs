use meigara_core::common::TimeFrame;
use meigara_core::market::entity::PriceBar;
use std::path::Path;

use crate::error::HistoryError;
use crate::normalize::COLUMNS;

/// # Summary
/// 将规整后的 K 线写为 CSV，首列为日期索引。
///
/// # Logic
/// 1. 写出小写表头 `date,open,high,low,close,volume,color,ema`。
/// 2. 日期按周期在交易所当地时间格式化 (日线只保留日期)。
/// 3. 预热区的 `ema` 写为空串。
pub fn write_bars(bars: &[PriceBar], timeframe: TimeFrame, path: &Path) -> Result<(), HistoryError> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| HistoryError::Io(format!("failed to create {}: {}", path.display(), e)))?;
    wtr.write_record(COLUMNS)
        .map_err(|e| HistoryError::Io(format!("failed to write csv header: {}", e)))?;

    for bar in bars {
        wtr.write_record([
            bar.date.format(timeframe.date_format()).to_string(),
            bar.open.to_string(),
            bar.high.to_string(),
            bar.low.to_string(),
            bar.close.to_string(),
            bar.volume.to_string(),
            bar.color.to_string(),
            bar.ema.map(|v| v.to_string()).unwrap_or_default(),
        ])
        .map_err(|e| HistoryError::Io(format!("failed to write csv row: {}", e)))?;
    }

    wtr.flush()
        .map_err(|e| HistoryError::Io(format!("failed to flush {}: {}", path.display(), e)))
}

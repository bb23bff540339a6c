use std::path::PathBuf;
use std::sync::Arc;

use meigara_core::common::{Stock, TimeFrame};
use meigara_core::market::entity::{Candle, PriceBar};
use meigara_core::market::port::MarketDataProvider;
use tracing::{info, warn};

use crate::error::HistoryError;
use crate::normalize::normalize;
use crate::writer::write_bars;

/// # Summary
/// 单标的历史行情加工服务：拉取 → 规整 → 写 CSV。
///
/// # Invariants
/// - 拉取失败只记录日志并按空序列处理，不会向上抛错。
/// - 空序列不落盘。
pub struct HistoryProcessor {
    provider: Arc<dyn MarketDataProvider>,
    output_dir: PathBuf,
    ema_period: u32,
    timeframe: TimeFrame,
}

impl HistoryProcessor {
    /// # Summary
    /// 创建日线、EMA(9) 的加工服务。
    pub fn new(provider: Arc<dyn MarketDataProvider>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            output_dir: output_dir.into(),
            ema_period: 9,
            timeframe: TimeFrame::Day1,
        }
    }

    pub fn with_ema_period(mut self, period: u32) -> Self {
        self.ema_period = period;
        self
    }

    pub fn with_timeframe(mut self, timeframe: TimeFrame) -> Self {
        self.timeframe = timeframe;
        self
    }

    /// # Summary
    /// 拉取标的全部可用历史。
    ///
    /// # Returns
    /// 失败时记录日志并返回空列表。
    pub async fn fetch_history(&self, ticker: &str) -> Vec<Candle> {
        match self
            .provider
            .fetch_history(&Stock::new(ticker), self.timeframe)
            .await
        {
            Ok(candles) => candles,
            Err(e) => {
                warn!("Failed to download history for {}: {}", ticker, e);
                Vec::new()
            }
        }
    }

    pub fn normalize(&self, candles: &[Candle]) -> Vec<PriceBar> {
        normalize(candles, self.ema_period)
    }

    /// # Summary
    /// 写出 `<output_dir>/<ticker>.csv`。
    pub fn persist(&self, bars: &[PriceBar], ticker: &str) -> Result<PathBuf, HistoryError> {
        let path = self.output_dir.join(format!("{}.csv", ticker));
        write_bars(bars, self.timeframe, &path)?;
        info!("Data saved to {}", path.display());
        Ok(path)
    }

    /// # Summary
    /// 执行一次完整流程。
    ///
    /// # Logic
    /// 1. 拉取历史；为空时记录日志并返回 `Ok(None)`。
    /// 2. 规整并派生 `color`、`ema`。
    /// 3. 写盘，返回文件路径。
    pub async fn run(&self, ticker: &str) -> Result<Option<PathBuf>, HistoryError> {
        let candles = self.fetch_history(ticker).await;
        if candles.is_empty() {
            warn!("No price history for {}, nothing to save", ticker);
            return Ok(None);
        }

        info!("Fetched {} bars for {}", candles.len(), ticker);
        let bars = self.normalize(&candles);
        self.persist(&bars, ticker).map(Some)
    }
}

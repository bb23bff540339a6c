use crate::common::{Stock, TimeFrame};
use crate::market::entity::Candle;
use crate::market::error::MarketError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// # Summary
/// 行情数据提供者接口（原始数据源）。
///
/// # Invariants
/// - 返回的 K 线按时间升序排列。
/// - 区间内无数据时返回空列表而非错误。
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// # Summary
    /// 获取特定证券在指定时间范围内的 K 线数据。
    ///
    /// # Logic
    /// 1. 构建数据源请求。
    /// 2. 执行网络请求并解析响应数据。
    /// 3. 丢弃任一 OHLCV 字段缺失的行。
    ///
    /// # Arguments
    /// * `stock`: 证券身份。
    /// * `timeframe`: K 线周期。
    /// * `start`: 开始时间。
    /// * `end`: 结束时间。
    ///
    /// # Returns
    /// 成功返回 K 线列表。
    async fn fetch_candles(
        &self,
        stock: &Stock,
        timeframe: TimeFrame,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Candle>, MarketError>;

    /// # Summary
    /// 获取提供者可提供的全部历史。
    ///
    /// # Logic
    /// 1. 终点为当前时刻。
    /// 2. 日线及以上从 Unix 纪元开始；日内周期从 `max_lookback` 窗口起点开始。
    async fn fetch_history(
        &self,
        stock: &Stock,
        timeframe: TimeFrame,
    ) -> Result<Vec<Candle>, MarketError> {
        let end = Utc::now();
        let start = timeframe
            .max_lookback()
            .map_or(DateTime::<Utc>::UNIX_EPOCH, |span| end - span);
        self.fetch_candles(stock, timeframe, start, end).await
    }
}

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use meigara_core::common::{Stock, TimeFrame};
use meigara_core::config::DEFAULT_YAHOO_BASE_URL;
use meigara_core::market::entity::Candle;
use meigara_core::market::error::MarketError;
use meigara_core::market::port::MarketDataProvider;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// 伪装浏览器 UA，减少被 Yahoo 拦截的概率
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// # Summary
/// Yahoo Finance 行情提供者实现。
///
/// # Invariants
/// - 使用 `reqwest` 异步客户端进行通讯。
/// - `base_url` 不带末尾斜杠。
#[derive(Clone)]
pub struct YahooProvider {
    /// 内部使用的 HTTP 客户端
    client: Client,
    /// 接口根地址，测试时指向 mock 服务
    base_url: String,
}

impl YahooProvider {
    /// # Summary
    /// 以官方地址和 10 秒建连超时创建 YahooProvider。
    pub fn new() -> Result<Self, MarketError> {
        Self::with_base_url(DEFAULT_YAHOO_BASE_URL, Duration::from_secs(10))
    }

    /// # Summary
    /// 创建指向指定根地址的 YahooProvider。
    ///
    /// # Logic
    /// 1. 设置伪装浏览器 Header (User-Agent)。
    /// 2. 只限制建立连接的时间，不限制整次请求，然后初始化 reqwest 客户端。
    ///
    /// # Arguments
    /// * `base_url`: 接口根地址，如 `https://query1.finance.yahoo.com`。
    /// * `connect_timeout`: 建立连接的超时。
    ///
    /// # Returns
    /// 客户端构建失败时返回 `MarketError::Network`。
    pub fn with_base_url(base_url: &str, connect_timeout: Duration) -> Result<Self, MarketError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| MarketError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// # Summary
/// Yahoo API 响应顶层结构。
///
/// # Invariants
/// - 映射自 Yahoo v8 chart 接口。
#[derive(Deserialize, Debug)]
struct YahooResponse {
    chart: YahooChart,
}

#[derive(Deserialize, Debug)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Deserialize, Debug)]
struct YahooError {
    description: String,
}

/// # Summary
/// Yahoo API 单个时间序列结果。
///
/// # Invariants
/// - 区间内无交易时 `timestamp` 与报价数组整体缺省。
#[derive(Deserialize, Debug)]
struct YahooResult {
    #[serde(default)]
    meta: YahooMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: YahooIndicators,
}

/// 交易所时区信息。`gmtoffset` 为秒，缺省按 UTC 处理。
#[derive(Deserialize, Debug, Default)]
struct YahooMeta {
    #[serde(default)]
    gmtoffset: i32,
}

#[derive(Deserialize, Debug)]
struct YahooIndicators {
    #[serde(default)]
    quote: Vec<YahooQuote>,
    // 调整后的价格数据
    adjclose: Option<Vec<YahooAdjClose>>,
}

#[derive(Deserialize, Debug)]
struct YahooAdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

/// # Summary
/// Yahoo API 原始报价数据，停牌时段对应位置为 null。
#[derive(Deserialize, Debug, Default)]
struct YahooQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

fn interval(timeframe: TimeFrame) -> &'static str {
    match timeframe {
        TimeFrame::Minute1 => "1m",
        TimeFrame::Minute5 => "5m",
        TimeFrame::Hour1 => "60m",
        TimeFrame::Day1 => "1d",
        TimeFrame::Week1 => "1wk",
    }
}

/// # Summary
/// 将 chart 结果展开为 K 线列表。
///
/// # Logic
/// 1. 没有报价数组时视为空区间。
/// 2. 任一 OHLCV 字段为 null 的行被跳过。
/// 3. 无法表示的时间戳被跳过。
/// 4. 时间戳换算到交易所的 UTC 偏移，偏移非法时退回 UTC。
fn into_candles(result: YahooResult) -> Vec<Candle> {
    let Some(quote) = result.indicators.quote.first() else {
        return Vec::new();
    };

    let adj_close_list = result
        .indicators
        .adjclose
        .as_ref()
        .and_then(|v| v.first())
        .map(|v| &v.adjclose);

    let offset = FixedOffset::east_opt(result.meta.gmtoffset).unwrap_or_else(|| Utc.fix());

    result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let field = |values: &Vec<Option<f64>>| values.get(i).copied().flatten();
            Some(Candle {
                time: DateTime::from_timestamp(ts, 0)?.with_timezone(&offset),
                open: field(&quote.open)?,
                high: field(&quote.high)?,
                low: field(&quote.low)?,
                close: field(&quote.close)?,
                adj_close: adj_close_list.and_then(field),
                volume: field(&quote.volume)?,
            })
        })
        .collect()
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    /// # Summary
    /// 从 Yahoo Finance 抓取 K 线历史数据。
    ///
    /// # Logic
    /// 1. 映射 TimeFrame 周期为 Yahoo 识别的 interval。
    /// 2. 构建包含 period1, period2 的 API URL。
    /// 3. 404 视为标的不存在，其余非 2xx 视为网络错误。
    /// 4. 解析嵌套 JSON，提取 adjclose 并与基础 OHLCV 合并。
    ///
    /// # Returns
    /// 成功返回 K 线列表 (可能为空)，失败返回 MarketError。
    async fn fetch_candles(
        &self,
        stock: &Stock,
        timeframe: TimeFrame,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Candle>, MarketError> {
        let symbol = &stock.symbol;
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        debug!("GET {} [{} .. {}] {}", url, start, end, timeframe);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("period1", start.timestamp().to_string()),
                ("period2", end.timestamp().to_string()),
                ("interval", interval(timeframe).to_string()),
            ])
            .send()
            .await
            .map_err(|e| MarketError::Network(e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(MarketError::NotFound);
        }
        if !resp.status().is_success() {
            return Err(MarketError::Network(format!("HTTP {}", resp.status())));
        }

        let json: YahooResponse = resp
            .json()
            .await
            .map_err(|e| MarketError::Parse(e.to_string()))?;

        if let Some(err) = json.chart.error {
            return Err(MarketError::Unknown(err.description));
        }

        let result = json
            .chart
            .result
            .ok_or(MarketError::NotFound)?
            .pop()
            .ok_or(MarketError::NotFound)?;

        Ok(into_candles(result))
    }
}

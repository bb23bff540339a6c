use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// # Summary
/// 证券标的身份，行情提供者按 `symbol` 检索历史数据。
///
/// # Invariants
/// - `symbol` 为提供者可识别的交易代码 (例如: NVDA, RELIANCE.NS)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    // 股票代码
    pub symbol: String,
}

impl Stock {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

/// # Summary
/// K 线时间周期。
///
/// # Invariants
/// - 日线及以上周期的 K 线在 CSV 中只输出日期部分。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimeFrame {
    // 1分钟
    Minute1,
    // 5分钟
    Minute5,
    // 1小时
    Hour1,
    // 1日
    #[default]
    Day1,
    // 1周
    Week1,
}

impl TimeFrame {
    /// # Summary
    /// 该周期下 K 线时间戳的输出格式。
    ///
    /// # Returns
    /// 日内周期带时分秒，日线及以上仅保留日期。
    pub fn date_format(&self) -> &'static str {
        match self {
            TimeFrame::Minute1 | TimeFrame::Minute5 | TimeFrame::Hour1 => "%Y-%m-%d %H:%M:%S%:z",
            TimeFrame::Day1 | TimeFrame::Week1 => "%Y-%m-%d",
        }
    }
}

impl TimeFrame {
    /// # Summary
    /// 行情源对该周期可回溯的最长区间。
    ///
    /// # Returns
    /// 日线及以上不受限，返回 `None`。日内周期比上限少留一天余量，
    /// 避免请求到达时已越过服务端的窗口。
    pub fn max_lookback(&self) -> Option<TimeDelta> {
        match self {
            TimeFrame::Minute1 => Some(TimeDelta::days(7)),
            TimeFrame::Minute5 => Some(TimeDelta::days(59)),
            TimeFrame::Hour1 => Some(TimeDelta::days(729)),
            TimeFrame::Day1 | TimeFrame::Week1 => None,
        }
    }
}

impl FromStr for TimeFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1m" | "minute1" => Ok(TimeFrame::Minute1),
            "5m" | "minute5" => Ok(TimeFrame::Minute5),
            "1h" | "hour1" => Ok(TimeFrame::Hour1),
            "1d" | "day1" => Ok(TimeFrame::Day1),
            "1wk" | "week1" => Ok(TimeFrame::Week1),
            _ => Err(format!("Unknown TimeFrame: {}", s)),
        }
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFrame::Minute1 => write!(f, "1m"),
            TimeFrame::Minute5 => write!(f, "5m"),
            TimeFrame::Hour1 => write!(f, "1h"),
            TimeFrame::Day1 => write!(f, "1d"),
            TimeFrame::Week1 => write!(f, "1wk"),
        }
    }
}

/// # Summary
/// 为 rustls 安装进程级默认加密提供者 (ring)。
///
/// # Logic
/// 1. `reqwest` 以 `rustls-no-provider` 方式编译，发起 HTTPS 请求前必须安装一次。
/// 2. 重复安装会返回 Err，此时已有提供者生效，直接忽略。
pub fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("rustls crypto provider already installed");
    }
}

use serde::{Deserialize, Serialize};

/// 合约主表的默认下载地址
pub const DEFAULT_CATALOG_URL: &str =
    "https://margincalculator.angelbroking.com/OpenAPI_File/files/OpenAPIScripMaster.json";

/// Yahoo Finance 行情接口的默认根地址
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// 全局应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// 合约主表 JSON 地址
    pub url: String,
    /// CSV 输出路径
    pub output: String,
    /// 按哪个字段检索标的
    pub symbol_field: String,
    /// 下载完成后检索的示例代码，为空则跳过
    pub lookup: Option<String>,
    /// 建立连接的超时 (秒)，下载本身不限时
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub base_url: String,
    /// `<TICKER>.csv` 的输出目录
    pub output_dir: String,
    pub ema_period: u32,
    /// 建立连接的超时 (秒)
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` 语法，`RUST_LOG` 优先
    pub level: String,
}

impl ServerConfig {
    /// 监听地址，如 `0.0.0.0:8080`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
            output: "instruments.csv".to_string(),
            symbol_field: "symbol".to_string(),
            lookup: Some("AAPL".to_string()),
            connect_timeout_secs: 10,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            output_dir: ".".to_string(),
            ema_period: 9,
            connect_timeout_secs: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

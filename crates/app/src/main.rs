mod cli;
mod settings;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use meigara_api::server::{AppState, start_server};
use meigara_catalog::service::InstrumentCatalog;
use meigara_core::common::{TimeFrame, install_crypto_provider};
use meigara_core::config::AppConfig;
use meigara_feed::catalog::HttpCatalogSource;
use meigara_feed::yahoo::YahooProvider;
use meigara_history::service::HistoryProcessor;
use meigara_registry::mem::MemRegistry;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

type BoxError = Box<dyn std::error::Error>;

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责加载配置、实例化具体实现并注入到对应的应用服务。
///
/// # Logic
/// 1. 解析命令行并加载配置。
/// 2. 初始化全局日志与 TLS 加密提供者。
/// 3. 按子命令组装组件并执行。
#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // 1. 命令行与配置
    let cli = Cli::parse();
    let config = settings::load(&cli.config)?;

    // 2. 日志 (guard 必须存活到进程结束)
    let _guard = init_tracing(&config.logging.level);
    install_crypto_provider();
    info!("Meigara starting, config: {}", cli.config.display());

    // 3. 分派子命令
    match cli.command {
        Commands::Catalog {
            url,
            output,
            lookup,
        } => run_catalog(&config, url, output, lookup).await,
        Commands::History {
            ticker,
            output_dir,
            interval,
        } => run_history(&config, &ticker, output_dir, interval).await,
        Commands::Serve { bind } => run_serve(&config, bind).await,
    }
}

/// # Summary
/// 初始化 `tracing` 订阅者，经非阻塞 writer 输出到标准输出。
///
/// # Arguments
/// * `level`: 配置中的默认过滤级别，`RUST_LOG` 存在时优先。
fn init_tracing(level: &str) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .init();

    guard
}

async fn run_catalog(
    config: &AppConfig,
    url: Option<String>,
    output: Option<PathBuf>,
    lookup: Option<String>,
) -> Result<(), BoxError> {
    let url = url.unwrap_or_else(|| config.catalog.url.clone());
    let output = output.unwrap_or_else(|| PathBuf::from(&config.catalog.output));
    // 配置为空字符串时跳过检索
    let lookup = lookup
        .or_else(|| config.catalog.lookup.clone())
        .filter(|s| !s.is_empty());

    let source =
        HttpCatalogSource::new(url, Duration::from_secs(config.catalog.connect_timeout_secs))?;
    let catalog = InstrumentCatalog::new(Arc::new(source), output)
        .with_symbol_field(config.catalog.symbol_field.clone());

    if catalog.run(lookup.as_deref()).await?.is_none() {
        warn!("Catalog not saved");
    }
    Ok(())
}

async fn run_history(
    config: &AppConfig,
    ticker: &str,
    output_dir: Option<PathBuf>,
    interval: TimeFrame,
) -> Result<(), BoxError> {
    let output_dir = output_dir.unwrap_or_else(|| PathBuf::from(&config.history.output_dir));

    let provider = YahooProvider::with_base_url(
        &config.history.base_url,
        Duration::from_secs(config.history.connect_timeout_secs),
    )?;
    let processor = HistoryProcessor::new(Arc::new(provider), output_dir)
        .with_ema_period(config.history.ema_period)
        .with_timeframe(interval);

    if processor.run(ticker).await?.is_none() {
        warn!("History for {} not saved", ticker);
    }
    Ok(())
}

async fn run_serve(config: &AppConfig, bind: Option<String>) -> Result<(), BoxError> {
    let bind = bind.unwrap_or_else(|| config.server.bind_addr());
    let state = AppState {
        registry: Arc::new(MemRegistry::new()),
    };

    start_server(state, &bind).await?;
    Ok(())
}

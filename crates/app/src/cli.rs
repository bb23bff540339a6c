use std::path::PathBuf;

use clap::{Parser, Subcommand};
use meigara_core::common::TimeFrame;

#[derive(Parser, Debug)]
#[command(name = "meigara")]
#[command(about = "Instrument catalog, price history and instrument list service")]
pub struct Cli {
    /// 配置文件路径，不存在时使用默认值
    #[arg(long, global = true, default_value = "meigara.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the instrument catalog and save it as CSV
    Catalog {
        /// Catalog JSON URL
        #[arg(long)]
        url: Option<String>,
        /// CSV output path
        #[arg(long)]
        output: Option<PathBuf>,
        /// Symbol to look up after saving
        #[arg(long)]
        lookup: Option<String>,
    },
    /// Download price history for one ticker and save it as CSV
    History {
        /// Ticker symbol, e.g. NVDA or RELIANCE.NS
        #[arg(default_value = "NVDA")]
        ticker: String,
        /// Directory for `<TICKER>.csv`
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Bar interval: 1m, 5m, 1h, 1d or 1wk
        #[arg(long, default_value = "1d")]
        interval: TimeFrame,
    },
    /// Serve the instrument list HTTP API
    Serve {
        /// Listen address, e.g. 127.0.0.1:8080
        #[arg(long)]
        bind: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_default_ticker() {
        let cli = Cli::try_parse_from(["meigara", "history"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("meigara.toml"));
        match cli.command {
            Commands::History {
                ticker,
                output_dir,
                interval,
            } => {
                assert_eq!(ticker, "NVDA");
                assert!(output_dir.is_none());
                assert_eq!(interval, TimeFrame::Day1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_catalog_overrides_parsed() {
        let cli = Cli::try_parse_from([
            "meigara",
            "catalog",
            "--output",
            "out.csv",
            "--lookup",
            "SBIN-EQ",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        match cli.command {
            Commands::Catalog { url, output, lookup } => {
                assert!(url.is_none());
                assert_eq!(output, Some(PathBuf::from("out.csv")));
                assert_eq!(lookup.as_deref(), Some("SBIN-EQ"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_history_interval_parsed() {
        let cli = Cli::try_parse_from(["meigara", "history", "RELIANCE.NS", "--interval", "1wk"])
            .unwrap();
        match cli.command {
            Commands::History {
                ticker, interval, ..
            } => {
                assert_eq!(ticker, "RELIANCE.NS");
                assert_eq!(interval, TimeFrame::Week1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(Cli::try_parse_from(["meigara", "history", "--interval", "3d"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["meigara", "trade"]).is_err());
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::constants::DEFAULT_SERVER_PORT;
use crate::models::{AnalyzerConfig, DataSource};

#[derive(Parser)]
#[command(name = "vnpanic")]
#[command(about = "Vietnamese market panic and pre-panic warning analyzer", long_about = None)]
pub struct Cli {
    /// Directory of per-ticker daily CSV files
    #[arg(long, global = true, env = "MARKET_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Where to load market data from: local or remote
    #[arg(long, global = true, env = "MARKET_DATA_SOURCE")]
    pub source: Option<DataSource>,

    /// Base URL serving {TICKER}.csv for the remote source
    #[arg(long, global = true, env = "MARKET_DATA_URL")]
    pub base_url: Option<String>,

    /// Print results as JSON instead of the console view
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a single trading date (YYYY-MM-DD)
    Analyze { date: String },
    /// Scan the 14 trading days before a date for pre-panic warnings
    PrePanic { date: String },
    /// Find panic, banking stabilization and securities recovery days in a range
    Range { start: String, end: String },
    /// Find complete panic → stabilization → recovery cycles in a range
    Cycle { start: String, end: String },
    /// Analyze the most recent trading date
    Latest,
    /// Start the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT)]
        port: u16,
    },
}

pub async fn run() {
    let cli = Cli::parse();
    let config = AnalyzerConfig::new(cli.source, cli.data_dir, cli.base_url);
    let json = cli.json;

    match cli.command {
        Commands::Analyze { date } => {
            commands::analyze::run(config, date, json).await;
        }
        Commands::PrePanic { date } => {
            commands::pre_panic::run(config, date, json).await;
        }
        Commands::Range { start, end } => {
            commands::range::run(config, start, end, json).await;
        }
        Commands::Cycle { start, end } => {
            commands::cycle::run(config, start, end, json).await;
        }
        Commands::Latest => {
            commands::latest::run(config, json).await;
        }
        Commands::Serve { port } => {
            commands::serve::run(config, port).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["vnpanic", "analyze", "2018-02-06", "--source", "remote", "--json"]).unwrap();
        assert_eq!(cli.source, Some(DataSource::Remote));
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Analyze { ref date } if date == "2018-02-06"));
    }

    #[test]
    fn test_serve_default_port() {
        let cli = Cli::try_parse_from(["vnpanic", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port } if port == DEFAULT_SERVER_PORT));
    }

    #[test]
    fn test_rejects_unknown_source() {
        assert!(Cli::try_parse_from(["vnpanic", "--source", "ftp", "latest"]).is_err());
    }
}

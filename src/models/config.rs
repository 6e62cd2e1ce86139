use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::utils::{get_market_data_dir, get_market_data_url};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Where daily CSV series are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Local directory of per-ticker CSV files (default)
    ///
    /// Layout: market_data/VCB.csv or market_data/VCB/1D.csv
    Local,

    /// Remote HTTP location serving market_data/{TICKER}.csv
    #[serde(alias = "http", alias = "github")]
    Remote,
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Local
    }
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "csv" | "disk" => Ok(DataSource::Local),
            "remote" | "http" | "github" => Ok(DataSource::Remote),
            _ => Err(format!("Invalid data source: '{}'. Valid values: local, remote", s)),
        }
    }
}

/// Configuration for loading market data into the analyzer
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Which store to load series from
    pub source: DataSource,

    /// Directory of CSV files for the local store
    pub market_data_dir: PathBuf,

    /// Base URL for the remote store (no trailing slash)
    pub remote_base_url: String,

    /// HTTP timeout for remote downloads
    pub request_timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        let source = std::env::var("MARKET_DATA_SOURCE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            source,
            market_data_dir: get_market_data_dir(),
            remote_base_url: get_market_data_url(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AnalyzerConfig {
    /// Create config, overriding env-derived defaults with any explicit values
    pub fn new(
        source: Option<DataSource>,
        market_data_dir: Option<PathBuf>,
        remote_base_url: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            source: source.unwrap_or(defaults.source),
            market_data_dir: market_data_dir.unwrap_or(defaults.market_data_dir),
            remote_base_url: remote_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.remote_base_url),
            request_timeout_secs: defaults.request_timeout_secs,
        }
    }
}

//! Time series stores
//!
//! The engine only consumes daily bars; retrieval lives here. Every store
//! returns an unordered bar collection for one ticker, and
//! [`load_market_data`] fans the per-ticker loads out concurrently, folding a
//! failed ticker into an empty series so downstream sector indicators simply
//! renormalize over the tickers that did load.

use crate::error::{Error, Result};
use crate::models::{AnalyzerConfig, Bar, DataSource, MarketData};
use crate::services::csv_parser::parse_daily_csv_bytes;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Source of daily OHLCV bars for a ticker
pub trait TimeSeriesStore: Send + Sync {
    /// Load every daily bar available for `ticker`, in any order
    fn load_daily(&self, ticker: &str) -> impl Future<Output = Result<Vec<Bar>>> + Send;
}

/// Local directory of CSV files
///
/// Looks for `{dir}/{TICKER}.csv` first, then `{dir}/{TICKER}/1D.csv`.
#[derive(Debug, Clone)]
pub struct CsvStore {
    market_data_dir: PathBuf,
}

impl CsvStore {
    pub fn new(market_data_dir: impl Into<PathBuf>) -> Self {
        Self {
            market_data_dir: market_data_dir.into(),
        }
    }

    pub fn market_data_dir(&self) -> &Path {
        &self.market_data_dir
    }

    fn candidate_paths(&self, ticker: &str) -> [PathBuf; 2] {
        [
            self.market_data_dir.join(format!("{}.csv", ticker)),
            self.market_data_dir.join(ticker).join("1D.csv"),
        ]
    }
}

impl TimeSeriesStore for CsvStore {
    async fn load_daily(&self, ticker: &str) -> Result<Vec<Bar>> {
        for path in self.candidate_paths(ticker) {
            match tokio::fs::read(&path).await {
                Ok(content) => {
                    debug!(ticker, path = %path.display(), "Reading daily CSV");
                    return parse_daily_csv_bytes(&content, ticker);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(Error::Io(format!("Failed to read {}: {}", path.display(), e))),
            }
        }

        Err(Error::NotFound(format!(
            "{}.csv not found in {}",
            ticker,
            self.market_data_dir.display()
        )))
    }
}

/// Remote store serving `{base_url}/{TICKER}.csv`
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn ticker_url(&self, ticker: &str) -> String {
        format!("{}/{}.csv", self.base_url, ticker)
    }
}

impl TimeSeriesStore for HttpStore {
    async fn load_daily(&self, ticker: &str) -> Result<Vec<Bar>> {
        let url = self.ticker_url(ticker);
        debug!(ticker, url = %url, "Fetching daily CSV");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "Failed to fetch data for {}: {}",
                ticker,
                response.status()
            )));
        }

        let content = response.bytes().await?;
        parse_daily_csv_bytes(&content, ticker)
    }
}

/// Store selected by [`AnalyzerConfig`]
#[derive(Debug, Clone)]
pub enum MarketStore {
    Local(CsvStore),
    Remote(HttpStore),
}

impl MarketStore {
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        match config.source {
            DataSource::Local => Ok(MarketStore::Local(CsvStore::new(config.market_data_dir.clone()))),
            DataSource::Remote => Ok(MarketStore::Remote(HttpStore::new(
                config.remote_base_url.clone(),
                config.request_timeout_secs,
            )?)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            MarketStore::Local(store) => format!("local {}", store.market_data_dir().display()),
            MarketStore::Remote(store) => format!("remote {}", store.base_url),
        }
    }
}

impl TimeSeriesStore for MarketStore {
    async fn load_daily(&self, ticker: &str) -> Result<Vec<Bar>> {
        match self {
            MarketStore::Local(store) => store.load_daily(ticker).await,
            MarketStore::Remote(store) => store.load_daily(ticker).await,
        }
    }
}

/// Load every ticker concurrently into a sorted [`MarketData`] snapshot
///
/// A ticker whose load fails is logged and stored as an empty series: it has
/// no data for any date, which the sector aggregation already tolerates.
pub async fn load_market_data<S: TimeSeriesStore>(store: &S, tickers: &[&str]) -> MarketData {
    let start_time = Instant::now();

    let tasks = tickers.iter().map(|ticker| async move {
        let result = store.load_daily(ticker).await;
        (*ticker, result)
    });
    let results = futures::future::join_all(tasks).await;

    let mut market_data = MarketData::with_capacity(results.len());
    let mut failed = 0usize;

    for (ticker, result) in results {
        let bars = match result {
            Ok(mut bars) => {
                sort_and_dedup(&mut bars);
                bars
            }
            Err(e) => {
                failed += 1;
                warn!(ticker, error = %e, "Failed to load ticker, treating as no data");
                Vec::new()
            }
        };
        market_data.insert(ticker.to_string(), bars);
    }

    info!(
        tickers = tickers.len(),
        failed,
        duration_ms = start_time.elapsed().as_millis(),
        "Market data loaded"
    );

    market_data
}

/// Sort ascending by date, keeping the last bar for any duplicated date
pub fn sort_and_dedup(bars: &mut Vec<Bar>) {
    bars.sort_by_key(|bar| bar.date);
    let mut deduped: Vec<Bar> = Vec::with_capacity(bars.len());
    for bar in bars.drain(..) {
        match deduped.last_mut() {
            Some(last) if last.date == bar.date => *last = bar,
            _ => deduped.push(bar),
        }
    }
    *bars = deduped;
}

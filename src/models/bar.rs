use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLCV bar for one ticker
///
/// # Price Format
/// All prices are stored in **full format**.
///
/// ## Stock Tickers (VCB, SSI, VIC, etc.)
/// - CSV stores: 23.2 (price/1000)
/// - **Store as**: 23200.0 (multiply by 1000)
///
/// ## Market Indices (VNINDEX, VN30)
/// - CSV stores: 1250.5 (actual value)
/// - **Store as**: 1250.5 (no conversion)
///
/// Percent changes are scale-independent, so the engine never depends on this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Ticker symbol
    pub ticker: String,

    /// Trading date
    pub date: NaiveDate,

    /// Opening price
    pub open: f64,

    /// Highest price
    pub high: f64,

    /// Lowest price
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Trading volume (number of shares)
    pub volume: u64,
}

impl Bar {
    /// Create a new bar
    pub fn new(
        ticker: impl Into<String>,
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

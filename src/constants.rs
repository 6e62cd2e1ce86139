//! Market Constants
//!
//! Sector baskets, classification thresholds and data-format constants.
//!
//! ## Sector Baskets
//!
//! Each sector indicator is a market-cap weighted average over a fixed
//! five-ticker basket. Weights sum to 1.0 over the nominal membership and are
//! renormalized over whichever members have data on a given day.
//!
//! | Sector      | Members (weight)                                  |
//! |-------------|---------------------------------------------------|
//! | Banking     | VCB .35, BID .25, TCB .20, CTG .15, VPB .05       |
//! | Securities  | SSI .40, VCI .20, HCM .15, MBS .15, SHS .10       |
//! | Real Estate | VIC .45, VHM .35, VRE .10, KDH .05, NVL .05       |

/// Broad market index used for the index-wide change
pub const VNINDEX: &str = "VNINDEX";

/// List of index tickers (not individual stocks)
/// These are stored in points and are NOT scaled by 1000
pub const INDEX_TICKERS: &[&str] = &["VNINDEX", "VN30"];

/// Banking basket (market cap in trillion VND noted per member)
pub const BANKING_WEIGHTS: &[(&str, f64)] = &[
    ("VCB", 0.35), // 325.3T
    ("BID", 0.25), // 252.4T
    ("TCB", 0.20), // 243.0T
    ("CTG", 0.15), // 225.0T
    ("VPB", 0.05), // 146.4T
];

/// Securities basket
pub const SECURITIES_WEIGHTS: &[(&str, f64)] = &[
    ("SSI", 0.40), // 48.0T
    ("VCI", 0.20), // 25.4T
    ("HCM", 0.15), // 15.3T
    ("MBS", 0.15), // 15.3T
    ("SHS", 0.10), // 10.4T
];

/// Real estate basket
pub const REAL_ESTATE_WEIGHTS: &[(&str, f64)] = &[
    ("VIC", 0.45), // 370.8T
    ("VHM", 0.35), // 313.4T
    ("VRE", 0.10), // 57.8T
    ("KDH", 0.05), // 29.8T
    ("NVL", 0.05), // 29.5T
];

/// Absolute index move (percent) at or above which a day counts as a panic day
pub const PANIC_THRESHOLD_PERCENT: f64 = 3.0;

/// Index change (percent) at or below which a pre-panic day is a significant drop
pub const SIGNIFICANT_DROP_PERCENT: f64 = -2.0;

/// Number of trading days scanned before a candidate panic date
pub const PRE_PANIC_LOOKBACK_DAYS: usize = 14;

/// Named checkpoints inside the lookback window (trading days before the candidate)
pub const T1_OFFSET: usize = 1;
pub const T7_OFFSET: usize = 7;
pub const T14_OFFSET: usize = 14;

/// BSI above this marks a banking stabilization day after a panic
pub const BANKING_STABILIZATION_BSI: f64 = 1.0;

/// SSI must beat the index by this margin to count as a securities recovery
pub const SECURITIES_OUTPERFORMANCE_MARGIN: f64 = 1.0;

/// Results (including the day itself) searched for a preceding panic
pub const STABILIZATION_LOOKBACK_RESULTS: usize = 5;

/// Results (including the day itself) searched for a preceding stabilization
pub const RECOVERY_LOOKBACK_RESULTS: usize = 3;

/// Calendar days after a panic in which stabilization completes a cycle
pub const CYCLE_STABILIZATION_WINDOW_DAYS: i64 = 5;

/// Calendar days after stabilization in which securities recovery completes a cycle
pub const CYCLE_RECOVERY_WINDOW_DAYS: i64 = 3;

/// Required CSV header prefix for daily market data
pub const CSV_HEADER: &str = "ticker,time,open,high,low,close,volume";

/// Number of basic OHLCV columns (ticker, time, open, high, low, close, volume)
pub const CSV_BASIC_COLUMNS: usize = 7;

/// Column indices for the basic CSV format (0-indexed)
pub mod csv_column {
    pub const TICKER: usize = 0;
    pub const TIME: usize = 1;
    pub const OPEN: usize = 2;
    pub const HIGH: usize = 3;
    pub const LOW: usize = 4;
    pub const CLOSE: usize = 5;
    pub const VOLUME: usize = 6;
}

/// Default remote location of per-ticker daily CSV files
pub const DEFAULT_MARKET_DATA_URL: &str =
    "https://raw.githubusercontent.com/quanhua92/aipriceaction-ui/refs/heads/main/market_data";

/// Default HTTP timeout for remote CSV downloads
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default port for the HTTP API
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Every ticker the engine needs: the index first, then each sector basket
pub fn all_tickers() -> Vec<&'static str> {
    std::iter::once(VNINDEX)
        .chain(BANKING_WEIGHTS.iter().map(|(t, _)| *t))
        .chain(SECURITIES_WEIGHTS.iter().map(|(t, _)| *t))
        .chain(REAL_ESTATE_WEIGHTS.iter().map(|(t, _)| *t))
        .collect()
}

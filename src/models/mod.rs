mod advice;
mod analysis;
mod bar;
mod config;
mod sector;
mod signal;

pub use advice::{TradingAdvice, TradingSignals};
pub use analysis::{
    DailyChange, DateAnalysis, PanicCycle, PrePanicAnalysis, PrePanicSignal, PrePanicSignals,
    RangeAnalysis, SectorIndicator, SignificantDrop,
};
pub use bar::Bar;
pub use config::{AnalyzerConfig, DataSource};
pub use sector::Sector;
pub use signal::{PanicType, PatternType, WarningLevel};

use std::collections::HashMap;

/// Time series data for a single ticker
pub type TimeSeries = Vec<Bar>;

/// Market data collection (ticker -> time series)
pub type MarketData = HashMap<String, TimeSeries>;

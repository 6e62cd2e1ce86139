//! Panic and pre-panic classification engine
//!
//! Leaves first: daily changes feed the sector indicators, which feed the
//! panic and warning classifiers; the pre-panic scan reduces warnings into a
//! pattern and advice. [`PanicAnalyzer`] ties them to a market data snapshot.

pub mod advice;
pub mod analyzer;
pub mod cycle;
pub mod daily_change;
pub mod panic;
pub mod pre_panic;
pub mod sector;
pub mod warning;

pub use advice::trading_advice;
pub use analyzer::PanicAnalyzer;
pub use daily_change::price_change;
pub use panic::{classify_panic_type, trading_signals};
pub use pre_panic::{analyze_window, pattern_type, DayIndicators};
pub use sector::{indicator_for, sector_indicator};
pub use warning::{classify_pre_panic_signal, strongest_warning};

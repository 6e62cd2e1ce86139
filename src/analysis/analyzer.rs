//! Engine entry points
//!
//! [`PanicAnalyzer`] owns an immutable market data snapshot and answers the
//! two queries the dashboard needs ("classify this date" and "analyze the
//! pre-panic pattern ending at this date") plus the range/cycle scans built on
//! top of them. It holds no mutable state, so a shared `Arc<PanicAnalyzer>`
//! can serve concurrent callers without locking.

use super::cycle::{detect_range, find_cycles};
use super::daily_change::price_change;
use super::panic::{classify_panic_type, trading_signals};
use super::pre_panic::{analyze_window, DayIndicators};
use super::sector::indicator_for;
use crate::constants::{all_tickers, PRE_PANIC_LOOKBACK_DAYS, VNINDEX};
use crate::error::{AppError, Result};
use crate::models::{
    DateAnalysis, MarketData, PanicCycle, PrePanicAnalysis, RangeAnalysis, Sector,
};
use crate::services::store::{load_market_data, sort_and_dedup, TimeSeriesStore};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, info};

pub struct PanicAnalyzer {
    data: MarketData,
}

impl PanicAnalyzer {
    /// Wrap an in-memory snapshot; every series is sorted ascending by date
    pub fn new(mut data: MarketData) -> Self {
        for bars in data.values_mut() {
            sort_and_dedup(bars);
        }
        Self { data }
    }

    /// Load the index and all sector baskets from `store`
    pub async fn from_store<S: TimeSeriesStore>(store: &S) -> Self {
        let tickers = all_tickers();
        let data = load_market_data(store, &tickers).await;
        let analyzer = Self::new(data);
        info!(
            tickers = analyzer.ticker_count(),
            latest = ?analyzer.most_recent_date(),
            "Analyzer ready"
        );
        analyzer
    }

    /// Number of tickers with at least one bar
    pub fn ticker_count(&self) -> usize {
        self.data.values().filter(|bars| !bars.is_empty()).count()
    }

    pub fn most_recent_date(&self) -> Option<NaiveDate> {
        self.data.get(VNINDEX)?.last().map(|bar| bar.date)
    }

    /// Up to `n` index trading days strictly before `date`, most recent first
    pub fn trading_days_before(&self, date: NaiveDate, n: usize) -> Vec<NaiveDate> {
        let Some(bars) = self.data.get(VNINDEX) else {
            return Vec::new();
        };
        let end = bars.partition_point(|bar| bar.date < date);
        bars[..end].iter().rev().take(n).map(|bar| bar.date).collect()
    }

    /// Index trading days in `start..=end`, oldest first
    pub fn trading_days_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let Some(bars) = self.data.get(VNINDEX) else {
            return Vec::new();
        };
        let from = bars.partition_point(|bar| bar.date < start);
        let to = bars.partition_point(|bar| bar.date <= end);
        bars[from..to.max(from)].iter().map(|bar| bar.date).collect()
    }

    /// Classify a single date
    ///
    /// Fails with [`AppError::NoDataForDate`] when the index has no change for
    /// `date`. Missing sector members only shrink the sector baskets.
    pub fn classify_date(&self, date: NaiveDate) -> Result<DateAnalysis> {
        let vnindex = self
            .data
            .get(VNINDEX)
            .and_then(|bars| price_change(bars, date))
            .ok_or(AppError::NoDataForDate(date))?;

        let changes: BTreeMap<String, _> = self
            .data
            .iter()
            .filter_map(|(ticker, bars)| price_change(bars, date).map(|change| (ticker.clone(), change)))
            .collect();

        let banking = indicator_for(Sector::Banking, &changes);
        let securities = indicator_for(Sector::Securities, &changes);
        let real_estate = indicator_for(Sector::RealEstate, &changes);

        let index_change_percent = vnindex.change_percent;
        let panic_type = classify_panic_type(banking.value, securities.value, real_estate.value, index_change_percent);

        debug!(
            date = %date,
            index = index_change_percent,
            bsi = ?banking.value,
            ssi = ?securities.value,
            rsi = ?real_estate.value,
            panic_type = %panic_type,
            "Classified date"
        );

        Ok(DateAnalysis {
            date,
            index_change_percent,
            vnindex,
            bsi: banking.value,
            ssi: securities.value,
            rsi: real_estate.value,
            banking_valid: banking.contributors,
            securities_valid: securities.contributors,
            real_estate_valid: real_estate.contributors,
            changes,
            panic_type,
            trading_signals: trading_signals(panic_type),
        })
    }

    /// Scan the trading days before `date` for pre-panic warnings
    ///
    /// `None` means there is no history before `date`. The date itself need
    /// not be a trading day.
    pub fn analyze_pre_panic(&self, date: NaiveDate) -> Option<PrePanicAnalysis> {
        let trading_days = self.trading_days_before(date, PRE_PANIC_LOOKBACK_DAYS);
        if trading_days.is_empty() {
            debug!(date = %date, "No trading days before date");
            return None;
        }

        let analysis = analyze_window(date, &trading_days, |day| {
            self.classify_date(day).ok().map(|analysis| DayIndicators::from(&analysis))
        });

        if let Some(analysis) = &analysis {
            info!(
                date = %date,
                strongest = %analysis.strongest_warning,
                pattern = %analysis.pattern_type,
                drops = analysis.significant_drops.len(),
                "Pre-panic analysis complete"
            );
        }

        analysis
    }

    /// Classify every index trading day in `start..=end`
    pub fn analyze_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<RangeAnalysis> {
        if start > end {
            return Err(AppError::InvalidInput(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }

        let results: Vec<DateAnalysis> = self
            .trading_days_between(start, end)
            .into_iter()
            .filter_map(|day| self.classify_date(day).ok())
            .collect();

        let range = detect_range(start, end, results);
        info!(
            start = %start,
            end = %end,
            days = range.all_results.len(),
            panics = range.panic_days.len(),
            stabilizations = range.banking_stabilization.len(),
            recoveries = range.securities_recovery.len(),
            "Range analysis complete"
        );
        Ok(range)
    }

    /// Panic → stabilization → recovery cycles inside `start..=end`
    pub fn analyze_complete_cycle(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<PanicCycle>> {
        let range = self.analyze_date_range(start, end)?;
        Ok(find_cycles(&range))
    }
}

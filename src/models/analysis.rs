//! Result records produced by the analysis engine
//!
//! Everything here is derived on demand and never mutated after construction.
//! Field names serialize as camelCase to match the dashboard contract.

use super::{PanicType, PatternType, TradingAdvice, TradingSignals, WarningLevel};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Close-to-close change of one ticker on one date
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChange {
    pub previous_close: f64,
    pub target_close: f64,
    pub target_low: f64,
    /// ((target_close - previous_close) / previous_close) * 100
    pub change_percent: f64,
    /// ((target_low - previous_close) / previous_close) * 100
    pub intraday_drop_percent: f64,
    pub volume: u64,
}

/// Weighted sector indicator and the tickers that contributed to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorIndicator {
    /// None when no member had data ("no evidence", distinct from a flat 0.0)
    pub value: Option<f64>,
    pub contributors: Vec<&'static str>,
}

impl SectorIndicator {
    pub fn empty() -> Self {
        Self {
            value: None,
            contributors: Vec::new(),
        }
    }
}

/// Full classification of a single trading date
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateAnalysis {
    pub date: NaiveDate,
    pub index_change_percent: f64,
    pub vnindex: DailyChange,
    pub bsi: Option<f64>,
    pub ssi: Option<f64>,
    pub rsi: Option<f64>,
    pub banking_valid: Vec<&'static str>,
    pub securities_valid: Vec<&'static str>,
    pub real_estate_valid: Vec<&'static str>,
    /// Every ticker with a change on this date, index included
    pub changes: BTreeMap<String, DailyChange>,
    pub panic_type: PanicType,
    pub trading_signals: TradingSignals,
}

impl DateAnalysis {
    /// Whether the index moved at least the panic threshold in either direction
    pub fn is_panic_day(&self) -> bool {
        self.index_change_percent.abs() >= crate::constants::PANIC_THRESHOLD_PERCENT
    }
}

/// Snapshot of one named checkpoint (T-1, T-7, T-14)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrePanicSignal {
    pub date: NaiveDate,
    pub index_change_percent: f64,
    pub bsi: Option<f64>,
    pub ssi: Option<f64>,
    pub rsi: Option<f64>,
    #[serde(rename = "signal")]
    pub warning_level: WarningLevel,
}

/// The three named checkpoints; absent when the window is too short or the day lacks data
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrePanicSignals {
    #[serde(rename = "T-1", skip_serializing_if = "Option::is_none")]
    pub t1: Option<PrePanicSignal>,
    #[serde(rename = "T-7", skip_serializing_if = "Option::is_none")]
    pub t7: Option<PrePanicSignal>,
    #[serde(rename = "T-14", skip_serializing_if = "Option::is_none")]
    pub t14: Option<PrePanicSignal>,
}

impl PrePanicSignals {
    /// Available checkpoints, oldest first (T-14, T-7, T-1)
    pub fn chronological(&self) -> Vec<(&'static str, &PrePanicSignal)> {
        [("T-14", &self.t14), ("T-7", &self.t7), ("T-1", &self.t1)]
            .into_iter()
            .filter_map(|(label, signal)| signal.as_ref().map(|s| (label, s)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.t1.is_none() && self.t7.is_none() && self.t14.is_none()
    }
}

/// A scanned day whose index change was at or below -2%
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignificantDrop {
    pub date: NaiveDate,
    pub days_before: usize,
    pub index_change_percent: f64,
    pub bsi: Option<f64>,
    pub ssi: Option<f64>,
    pub rsi: Option<f64>,
    #[serde(rename = "signal")]
    pub warning_level: WarningLevel,
}

/// Result of the 14-trading-day pre-panic scan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrePanicAnalysis {
    pub panic_date: NaiveDate,
    pub pre_panic_signals: PrePanicSignals,
    pub significant_drops: Vec<SignificantDrop>,
    pub strongest_warning: WarningLevel,
    pub pattern_type: PatternType,
    pub trading_advice: TradingAdvice,
}

/// Day-by-day scan of a calendar range
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeAnalysis {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub panic_days: Vec<DateAnalysis>,
    pub banking_stabilization: Vec<DateAnalysis>,
    pub securities_recovery: Vec<DateAnalysis>,
    pub all_results: Vec<DateAnalysis>,
}

/// Panic followed by banking stabilization and securities recovery
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanicCycle {
    pub panic: DateAnalysis,
    pub banking_stabilization: DateAnalysis,
    pub securities_recovery: Vec<DateAnalysis>,
}

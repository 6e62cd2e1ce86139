//! Panic → banking stabilization → securities recovery detection
//!
//! Works on the chronological list of classified days in a calendar range.
//! Lookback windows count analysed results (trading days), while the cycle
//! windows count calendar days.

use crate::constants::{
    BANKING_STABILIZATION_BSI, CYCLE_RECOVERY_WINDOW_DAYS, CYCLE_STABILIZATION_WINDOW_DAYS,
    RECOVERY_LOOKBACK_RESULTS, SECURITIES_OUTPERFORMANCE_MARGIN, STABILIZATION_LOOKBACK_RESULTS,
};
use crate::models::{DateAnalysis, PanicCycle, RangeAnalysis};
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Split classified days into panic, stabilization and recovery buckets
///
/// `results` must be in ascending date order. A day lands in at most one bucket.
pub fn detect_range(start: NaiveDate, end: NaiveDate, results: Vec<DateAnalysis>) -> RangeAnalysis {
    let mut panic_days = Vec::new();
    let mut banking_stabilization = Vec::new();
    let mut securities_recovery = Vec::new();

    for (i, day) in results.iter().enumerate() {
        if day.is_panic_day() {
            debug!(date = %day.date, change = day.index_change_percent, "Panic day");
            panic_days.push(day.clone());
        } else if is_banking_positive(day) {
            if preceding(&results, i, STABILIZATION_LOOKBACK_RESULTS)
                .iter()
                .any(DateAnalysis::is_panic_day)
            {
                debug!(date = %day.date, bsi = ?day.bsi, "Banking stabilization");
                banking_stabilization.push(day.clone());
            }
        } else if outperforms_index(day)
            && preceding(&results, i, RECOVERY_LOOKBACK_RESULTS)
                .iter()
                .any(is_banking_positive)
        {
            debug!(date = %day.date, ssi = ?day.ssi, "Securities recovery");
            securities_recovery.push(day.clone());
        }
    }

    RangeAnalysis {
        start,
        end,
        panic_days,
        banking_stabilization,
        securities_recovery,
        all_results: results,
    }
}

/// Cycles whose stabilization and recovery follow the panic closely enough
///
/// For each panic the first stabilization within the window is used. A panic
/// without any recovery after that stabilization does not form a cycle.
pub fn find_cycles(range: &RangeAnalysis) -> Vec<PanicCycle> {
    range
        .panic_days
        .iter()
        .filter_map(|panic| {
            let stabilization = range
                .banking_stabilization
                .iter()
                .find(|day| within(panic.date, day.date, CYCLE_STABILIZATION_WINDOW_DAYS))?;

            let recovery: Vec<DateAnalysis> = range
                .securities_recovery
                .iter()
                .filter(|day| within(stabilization.date, day.date, CYCLE_RECOVERY_WINDOW_DAYS))
                .cloned()
                .collect();

            if recovery.is_empty() {
                return None;
            }

            Some(PanicCycle {
                panic: panic.clone(),
                banking_stabilization: stabilization.clone(),
                securities_recovery: recovery,
            })
        })
        .collect()
}

/// Up to `window - 1` results before index `i`
fn preceding(results: &[DateAnalysis], i: usize, window: usize) -> &[DateAnalysis] {
    &results[(i + 1).saturating_sub(window)..i]
}

fn is_banking_positive(day: &DateAnalysis) -> bool {
    day.bsi.is_some_and(|bsi| bsi > BANKING_STABILIZATION_BSI)
}

fn outperforms_index(day: &DateAnalysis) -> bool {
    let index = day.index_change_percent;
    index > 0.0 && day.ssi.is_some_and(|ssi| ssi > index + SECURITIES_OUTPERFORMANCE_MARGIN)
}

/// `date` falls in `(anchor, anchor + days]`
fn within(anchor: NaiveDate, date: NaiveDate, days: i64) -> bool {
    anchor < date && date <= anchor + Duration::days(days)
}

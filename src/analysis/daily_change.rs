use crate::models::{Bar, DailyChange};
use chrono::NaiveDate;
use tracing::debug;

/// Calculate percentage change
pub fn percent_change(current: f64, previous: f64) -> f64 {
    ((current - previous) / previous) * 100.0
}

/// Change of one ticker on `target` against its previous trading day
///
/// The bar sequence does not need to be sorted. Only an exact date match
/// counts; there is no nearest-date fallback. Returns `None` when the date is
/// absent, when it is the earliest bar (no prior close), or when the prior
/// close is not positive.
pub fn price_change(bars: &[Bar], target: NaiveDate) -> Option<DailyChange> {
    let target_bar = bars.iter().find(|bar| bar.date == target)?;

    let Some(previous_bar) = bars
        .iter()
        .filter(|bar| bar.date < target)
        .max_by_key(|bar| bar.date)
    else {
        debug!(ticker = %target_bar.ticker, date = %target, "First data point, no previous close");
        return None;
    };

    let previous_close = previous_bar.close;
    if previous_close <= 0.0 {
        debug!(ticker = %target_bar.ticker, date = %target, previous_close, "Non-positive previous close");
        return None;
    }

    Some(DailyChange {
        previous_close,
        target_close: target_bar.close,
        target_low: target_bar.low,
        change_percent: percent_change(target_bar.close, previous_close),
        intraday_drop_percent: percent_change(target_bar.low, previous_close),
        volume: target_bar.volume,
    })
}

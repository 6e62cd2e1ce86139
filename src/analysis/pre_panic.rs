//! Pre-panic pattern analysis
//!
//! Scans the trading days before a candidate panic date, classifies each day
//! with [`classify_pre_panic_signal`], and reduces the results to one
//! strongest warning and one [`PatternType`].
//!
//! Each day's indicators are derived exactly once and shared between the
//! significant-drop scan and the T-1/T-7/T-14 checkpoints.

use super::advice::trading_advice;
use super::warning::{classify_pre_panic_signal, strongest_warning};
use crate::constants::{SIGNIFICANT_DROP_PERCENT, T14_OFFSET, T1_OFFSET, T7_OFFSET};
use crate::models::{
    DateAnalysis, PatternType, PrePanicAnalysis, PrePanicSignal, PrePanicSignals, SignificantDrop,
    WarningLevel,
};
use chrono::NaiveDate;

/// Index change and sector indicators of one scanned day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayIndicators {
    pub index_change_percent: f64,
    pub bsi: Option<f64>,
    pub ssi: Option<f64>,
    pub rsi: Option<f64>,
}

impl DayIndicators {
    pub fn warning_level(&self) -> WarningLevel {
        classify_pre_panic_signal(self.bsi, self.ssi, self.rsi, self.index_change_percent)
    }
}

impl From<&DateAnalysis> for DayIndicators {
    fn from(analysis: &DateAnalysis) -> Self {
        Self {
            index_change_percent: analysis.index_change_percent,
            bsi: analysis.bsi,
            ssi: analysis.ssi,
            rsi: analysis.rsi,
        }
    }
}

/// Analyze the window before `panic_date`
///
/// `trading_days` lists the lookback days most recent first (index 0 is T-1).
/// `day_data` yields the indicators of a day, or `None` when the index has no
/// change for it. Returns `None` when there are no trading days at all.
pub fn analyze_window<F>(panic_date: NaiveDate, trading_days: &[NaiveDate], mut day_data: F) -> Option<PrePanicAnalysis>
where
    F: FnMut(NaiveDate) -> Option<DayIndicators>,
{
    if trading_days.is_empty() {
        return None;
    }

    let days: Vec<(NaiveDate, Option<DayIndicators>)> = trading_days
        .iter()
        .map(|date| (*date, day_data(*date)))
        .collect();

    // Every day is scanned; there is no early exit on the first drop
    let significant_drops: Vec<SignificantDrop> = days
        .iter()
        .enumerate()
        .filter_map(|(i, (date, data))| {
            let data = data.as_ref()?;
            (data.index_change_percent <= SIGNIFICANT_DROP_PERCENT).then(|| SignificantDrop {
                date: *date,
                days_before: i + 1,
                index_change_percent: data.index_change_percent,
                bsi: data.bsi,
                ssi: data.ssi,
                rsi: data.rsi,
                warning_level: data.warning_level(),
            })
        })
        .collect();

    let checkpoint = |offset: usize| -> Option<PrePanicSignal> {
        let (date, data) = days.get(offset - 1)?;
        let data = data.as_ref()?;
        Some(PrePanicSignal {
            date: *date,
            index_change_percent: data.index_change_percent,
            bsi: data.bsi,
            ssi: data.ssi,
            rsi: data.rsi,
            warning_level: data.warning_level(),
        })
    };

    let pre_panic_signals = PrePanicSignals {
        t1: checkpoint(T1_OFFSET),
        t7: checkpoint(T7_OFFSET),
        t14: checkpoint(T14_OFFSET),
    };

    let strongest = strongest_warning(
        pre_panic_signals
            .chronological()
            .into_iter()
            .map(|(_, signal)| signal.warning_level)
            .chain(significant_drops.iter().map(|drop| drop.warning_level)),
    );
    let pattern = pattern_type(&pre_panic_signals, &significant_drops);

    Some(PrePanicAnalysis {
        panic_date,
        pre_panic_signals,
        significant_drops,
        strongest_warning: strongest,
        pattern_type: pattern,
        trading_advice: trading_advice(strongest),
    })
}

/// Infer the window's pattern
///
/// Two or more significant drops always win. The escalation checks read the
/// T-14 → T-7 → T-1 sequence and only apply when at least two checkpoints
/// have data.
pub fn pattern_type(signals: &PrePanicSignals, drops: &[SignificantDrop]) -> PatternType {
    if drops.len() >= 2 {
        return PatternType::MultipleWeaknessEvents;
    }

    let warnings: Vec<WarningLevel> = signals
        .chronological()
        .into_iter()
        .map(|(_, signal)| signal.warning_level)
        .collect();

    if let (Some(&first), Some(&last), true) = (warnings.first(), warnings.last(), warnings.len() >= 2) {
        if last == WarningLevel::StrongWarning {
            return PatternType::EscalatingToCrisis;
        }
        if warnings
            .iter()
            .any(|w| matches!(w, WarningLevel::StrongWarning | WarningLevel::ModerateWarning))
        {
            return PatternType::PersistentWeakness;
        }
        if first != WarningLevel::NoWarning && last != WarningLevel::NoWarning {
            return PatternType::SustainedDeterioration;
        }
    }

    if warnings.is_empty() && drops.is_empty() {
        return PatternType::NoSignalsDetected;
    }

    PatternType::IsolatedSignals
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    fn panic_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 2, 28).unwrap()
    }

    /// `n` consecutive calendar days before the panic date, most recent first
    fn window(n: usize) -> Vec<NaiveDate> {
        (1..=n as i64).map(|i| panic_date() - chrono::Duration::days(i)).collect()
    }

    fn quiet() -> DayIndicators {
        DayIndicators { index_change_percent: 0.2, bsi: Some(0.1), ssi: Some(0.3), rsi: Some(0.2) }
    }

    fn strong() -> DayIndicators {
        DayIndicators { index_change_percent: -1.6, bsi: Some(-1.6), ssi: Some(-1.0), rsi: Some(-2.5) }
    }

    fn moderate() -> DayIndicators {
        DayIndicators { index_change_percent: -1.2, bsi: Some(-0.5), ssi: Some(-1.8), rsi: Some(-0.9) }
    }

    fn early() -> DayIndicators {
        DayIndicators { index_change_percent: -1.1, bsi: Some(-2.1), ssi: Some(-1.0), rsi: Some(-1.2) }
    }

    fn drop_day(index: f64) -> DayIndicators {
        // EARLY_WARNING on its own: banking down hard, real estate holding
        DayIndicators { index_change_percent: index, bsi: Some(-2.2), ssi: Some(-1.0), rsi: Some(-1.2) }
    }

    /// Run the scan with specific days (by offset, 1-based) overridden
    fn run(n: usize, overrides: &[(usize, Option<DayIndicators>)]) -> Option<PrePanicAnalysis> {
        let days = window(n);
        let mut lookup: HashMap<NaiveDate, Option<DayIndicators>> =
            days.iter().map(|d| (*d, Some(quiet()))).collect();
        for (offset, data) in overrides {
            lookup.insert(days[offset - 1], *data);
        }
        analyze_window(panic_date(), &days, |d| lookup.get(&d).copied().flatten())
    }

    #[test]
    fn test_no_trading_days_is_not_available() {
        assert!(analyze_window(panic_date(), &[], |_| Some(quiet())).is_none());
    }

    #[test]
    fn test_each_day_is_derived_once_and_all_days_scanned() {
        let calls = Cell::new(0);
        let days = window(14);
        let analysis = analyze_window(panic_date(), &days, |_| {
            calls.set(calls.get() + 1);
            Some(drop_day(-2.5))
        })
        .unwrap();

        assert_eq!(calls.get(), 14);
        assert_eq!(analysis.significant_drops.len(), 14);
        assert_eq!(analysis.significant_drops[0].days_before, 1);
        assert_eq!(analysis.significant_drops[13].days_before, 14);
    }

    #[test]
    fn test_checkpoints() {
        let analysis = run(14, &[(1, Some(strong())), (7, Some(moderate())), (14, Some(early()))]).unwrap();
        let signals = &analysis.pre_panic_signals;

        assert_eq!(signals.t1.as_ref().unwrap().date, window(14)[0]);
        assert_eq!(signals.t1.as_ref().unwrap().warning_level, WarningLevel::StrongWarning);
        assert_eq!(signals.t7.as_ref().unwrap().warning_level, WarningLevel::ModerateWarning);
        assert_eq!(signals.t14.as_ref().unwrap().warning_level, WarningLevel::EarlyWarning);
        assert_eq!(analysis.strongest_warning, WarningLevel::StrongWarning);
        assert_eq!(analysis.pattern_type, PatternType::EscalatingToCrisis);
        assert_eq!(analysis.trading_advice, trading_advice(WarningLevel::StrongWarning));
    }

    #[test]
    fn test_short_window_has_only_available_checkpoints() {
        let analysis = run(5, &[]).unwrap();
        assert!(analysis.pre_panic_signals.t1.is_some());
        assert!(analysis.pre_panic_signals.t7.is_none());
        assert!(analysis.pre_panic_signals.t14.is_none());

        let analysis = run(7, &[]).unwrap();
        assert!(analysis.pre_panic_signals.t7.is_some());
        assert!(analysis.pre_panic_signals.t14.is_none());
    }

    #[test]
    fn test_multiple_drops_override_escalation() {
        let analysis = run(
            14,
            &[(1, Some(strong())), (3, Some(drop_day(-2.0))), (5, Some(drop_day(-3.1))), (9, Some(drop_day(-2.4)))],
        )
        .unwrap();

        assert_eq!(analysis.significant_drops.len(), 3);
        assert_eq!(analysis.pattern_type, PatternType::MultipleWeaknessEvents);
        assert_eq!(analysis.strongest_warning, WarningLevel::StrongWarning);
    }

    #[test]
    fn test_drop_boundary_is_inclusive() {
        let analysis = run(14, &[(4, Some(drop_day(-2.0))), (6, Some(drop_day(-1.99)))]).unwrap();
        assert_eq!(analysis.significant_drops.len(), 1);
        assert_eq!(analysis.significant_drops[0].days_before, 4);
    }

    #[test]
    fn test_persistent_weakness() {
        let analysis = run(14, &[(7, Some(moderate()))]).unwrap();
        assert_eq!(analysis.pattern_type, PatternType::PersistentWeakness);
    }

    #[test]
    fn test_sustained_deterioration() {
        let analysis = run(14, &[(1, Some(early())), (14, Some(early()))]).unwrap();
        assert_eq!(analysis.pattern_type, PatternType::SustainedDeterioration);
        assert_eq!(analysis.strongest_warning, WarningLevel::EarlyWarning);
    }

    #[test]
    fn test_isolated_signals_is_the_default() {
        let analysis = run(14, &[]).unwrap();
        assert_eq!(analysis.pattern_type, PatternType::IsolatedSignals);
        assert_eq!(analysis.strongest_warning, WarningLevel::NoWarning);

        // One drop that the checkpoints do not escalate
        let analysis = run(14, &[(4, Some(drop_day(-2.3)))]).unwrap();
        assert_eq!(analysis.pattern_type, PatternType::IsolatedSignals);
        assert_eq!(analysis.strongest_warning, WarningLevel::EarlyWarning);
    }

    #[test]
    fn test_lone_checkpoint_does_not_escalate() {
        let analysis = run(3, &[(1, Some(strong()))]).unwrap();
        assert_eq!(analysis.pattern_type, PatternType::IsolatedSignals);
        assert_eq!(analysis.strongest_warning, WarningLevel::StrongWarning);
    }

    #[test]
    fn test_no_signals_detected_when_days_lack_data() {
        let analysis = run(2, &[(1, None), (2, None)]).unwrap();
        assert!(analysis.pre_panic_signals.is_empty());
        assert!(analysis.significant_drops.is_empty());
        assert_eq!(analysis.pattern_type, PatternType::NoSignalsDetected);
        assert_eq!(analysis.strongest_warning, WarningLevel::NoWarning);
    }

    #[test]
    fn test_insufficient_data_checkpoints() {
        let missing = DayIndicators { index_change_percent: -0.5, bsi: None, ssi: Some(-1.0), rsi: Some(-1.0) };
        let analysis = run(14, &[(1, Some(missing)), (7, Some(missing)), (14, Some(missing))]).unwrap();

        assert_eq!(analysis.strongest_warning, WarningLevel::InsufficientData);
        // Both ends differ from NO_WARNING
        assert_eq!(analysis.pattern_type, PatternType::SustainedDeterioration);
    }

    #[test]
    fn test_serializes_checkpoint_labels() {
        let analysis = run(7, &[]).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        let signals = json["prePanicSignals"].as_object().unwrap();

        assert!(signals.contains_key("T-1"));
        assert!(signals.contains_key("T-7"));
        assert!(!signals.contains_key("T-14"));
        assert_eq!(json["patternType"], "ISOLATED_SIGNALS");
        assert_eq!(signals["T-1"]["signal"], "NO_WARNING");
    }
}

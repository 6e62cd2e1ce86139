use crate::constants::PANIC_THRESHOLD_PERCENT;
use crate::models::{PanicType, TradingSignals};

/// Classify a single day from its sector indicators and index change
///
/// Rules, first match wins:
/// 1. `|index| < 3.0` → NO_PANIC
/// 2. any sector missing → UNCLEAR_PATTERN
/// 3. `bsi > -2 && ssi < -3 && rsi < -4` → POSITIVE_PANIC
/// 4. `bsi < -5 && ssi < -7 && rsi < -8` → NEGATIVE_EXTREME
/// 5. `bsi < -3 && ssi < -5 && rsi < -6` → NEGATIVE_MEDIUM
/// 6. otherwise → UNCLEAR_PATTERN
pub fn classify_panic_type(
    bsi: Option<f64>,
    ssi: Option<f64>,
    rsi: Option<f64>,
    index_change_percent: f64,
) -> PanicType {
    if index_change_percent.abs() < PANIC_THRESHOLD_PERCENT {
        return PanicType::NoPanic;
    }

    let (Some(bsi), Some(ssi), Some(rsi)) = (bsi, ssi, rsi) else {
        return PanicType::UnclearPattern;
    };

    if bsi > -2.0 && ssi < -3.0 && rsi < -4.0 {
        PanicType::PositivePanic
    } else if bsi < -5.0 && ssi < -7.0 && rsi < -8.0 {
        PanicType::NegativeExtreme
    } else if bsi < -3.0 && ssi < -5.0 && rsi < -6.0 {
        PanicType::NegativeMedium
    } else {
        PanicType::UnclearPattern
    }
}

/// Static buy/avoid/watch lists for a panic type
///
/// These do not vary with indicator magnitude.
pub fn trading_signals(panic_type: PanicType) -> TradingSignals {
    match panic_type {
        PanicType::PositivePanic => TradingSignals {
            buy: &["VIC", "SHS", "TCB"],
            avoid: &["NVL", "MBS"],
            watch: &["VCB"],
        },
        PanicType::NegativeExtreme => TradingSignals {
            buy: &["VCB"],
            avoid: &["ALL_OTHERS"],
            watch: &["Government_intervention_signals"],
        },
        PanicType::NegativeMedium => TradingSignals {
            buy: &[],
            avoid: &["Securities", "Real_Estate"],
            watch: &["VCB", "Banking_stabilization"],
        },
        PanicType::RecoverySignal => TradingSignals {
            buy: &["SSI", "SHS", "VCI"],
            avoid: &[],
            watch: &["F0_volume_return"],
        },
        PanicType::NoPanic => TradingSignals {
            buy: &[],
            avoid: &[],
            watch: &["Normal_market_conditions"],
        },
        PanicType::UnclearPattern => TradingSignals {
            buy: &[],
            avoid: &[],
            watch: &["Pattern_development"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_moves_are_never_panics() {
        assert_eq!(classify_panic_type(Some(1.0), Some(-9.0), Some(-9.0), -2.99), PanicType::NoPanic);
        assert_eq!(classify_panic_type(None, None, None, 2.5), PanicType::NoPanic);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(classify_panic_type(Some(0.0), Some(-4.0), Some(-5.0), -3.0), PanicType::PositivePanic);
        assert_eq!(classify_panic_type(Some(0.0), Some(-4.0), Some(-5.0), 3.0), PanicType::PositivePanic);
    }

    #[test]
    fn test_missing_sector_is_unclear() {
        let values = [Some(-10.0), Some(0.0), None];
        for bsi in values {
            for ssi in values {
                for rsi in values {
                    if bsi.is_some() && ssi.is_some() && rsi.is_some() {
                        continue;
                    }
                    assert_eq!(classify_panic_type(bsi, ssi, rsi, -6.0), PanicType::UnclearPattern);
                }
            }
        }
    }

    #[test]
    fn test_2018_02_06_is_unclear() {
        // Banking fails resilience (-4.12) and rsi misses NEGATIVE_MEDIUM (-1.39)
        assert_eq!(
            classify_panic_type(Some(-4.12), Some(-4.77), Some(-1.39), -3.54),
            PanicType::UnclearPattern
        );
    }

    #[test]
    fn test_2018_02_05_falls_through_to_negative_medium() {
        // rsi -6.30 misses the -8 extreme bound but satisfies -6
        assert_eq!(
            classify_panic_type(Some(-6.85), Some(-7.22), Some(-6.30), -5.10),
            PanicType::NegativeMedium
        );
    }

    #[test]
    fn test_negative_extreme() {
        assert_eq!(
            classify_panic_type(Some(-5.5), Some(-7.5), Some(-8.5), -6.0),
            PanicType::NegativeExtreme
        );
    }

    #[test]
    fn test_bounds_are_strict() {
        // bsi exactly -2.0 is not "> -2.0"
        assert_eq!(classify_panic_type(Some(-2.0), Some(-4.0), Some(-5.0), -3.5), PanicType::UnclearPattern);
        // rsi exactly -6.0 is not "< -6.0"
        assert_eq!(classify_panic_type(Some(-4.0), Some(-6.0), Some(-6.0), -3.5), PanicType::UnclearPattern);
    }

    #[test]
    fn test_recovery_signal_is_never_produced() {
        let grid = [-12.0, -8.5, -7.5, -6.5, -5.5, -4.5, -3.5, -2.5, -1.0, 0.0, 2.0];
        for bsi in grid {
            for ssi in grid {
                for rsi in grid {
                    for index in [-7.0, -3.0, 3.0, 7.0] {
                        let panic = classify_panic_type(Some(bsi), Some(ssi), Some(rsi), index);
                        assert_ne!(panic, PanicType::RecoverySignal);
                    }
                }
            }
        }
    }

    #[test]
    fn test_trading_signals() {
        let positive = trading_signals(PanicType::PositivePanic);
        assert_eq!(positive.buy, &["VIC", "SHS", "TCB"]);
        assert_eq!(positive.avoid, &["NVL", "MBS"]);

        let unclear = trading_signals(PanicType::UnclearPattern);
        assert!(unclear.buy.is_empty());
        assert_eq!(unclear.watch, &["Pattern_development"]);
    }
}

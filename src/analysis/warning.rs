use crate::models::WarningLevel;

/// Classify one day's pre-panic warning level
///
/// Any missing sector yields INSUFFICIENT_DATA ("couldn't check"), which is
/// distinct from NO_WARNING ("checked, nothing found"). Otherwise, first match wins:
/// 1. `rsi <= -2 && (ssi <= -1.5 || bsi <= -1.5) && index <= -1.5` → STRONG_WARNING
/// 2. `ssi <= -1.5 && bsi >= -1.0 && index <= -1.0` → MODERATE_WARNING
/// 3. `min(bsi, ssi, rsi) <= -2 && index <= -1.0` → EARLY_WARNING
/// 4. `index <= -1.0 && (|bsi - ssi| >= 1 || |ssi - rsi| >= 1)` → DEVELOPING_WEAKNESS
/// 5. otherwise → NO_WARNING
pub fn classify_pre_panic_signal(
    bsi: Option<f64>,
    ssi: Option<f64>,
    rsi: Option<f64>,
    index_change_percent: f64,
) -> WarningLevel {
    let (Some(bsi), Some(ssi), Some(rsi)) = (bsi, ssi, rsi) else {
        return WarningLevel::InsufficientData;
    };
    let index = index_change_percent;

    // Real estate cracks first, others follow
    if rsi <= -2.0 && (ssi <= -1.5 || bsi <= -1.5) && index <= -1.5 {
        return WarningLevel::StrongWarning;
    }

    // Securities weak while banking holds
    if ssi <= -1.5 && bsi >= -1.0 && index <= -1.0 {
        return WarningLevel::ModerateWarning;
    }

    if bsi.min(ssi).min(rsi) <= -2.0 && index <= -1.0 {
        return WarningLevel::EarlyWarning;
    }

    if index <= -1.0 && ((bsi - ssi).abs() >= 1.0 || (ssi - rsi).abs() >= 1.0) {
        return WarningLevel::DevelopingWeakness;
    }

    WarningLevel::NoWarning
}

/// Highest-severity level in `levels`; NO_WARNING when empty
pub fn strongest_warning<I>(levels: I) -> WarningLevel
where
    I: IntoIterator<Item = WarningLevel>,
{
    levels.into_iter().max().unwrap_or(WarningLevel::NoWarning)
}

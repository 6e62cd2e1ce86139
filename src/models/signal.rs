//! Classification labels produced by the engine
//!
//! All three enums are closed sets serialized as SCREAMING_SNAKE_CASE strings
//! (e.g. `"POSITIVE_PANIC"`), matching the labels the dashboard displays.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Same-day panic classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PanicType {
    /// Index moved less than 3%
    NoPanic,
    /// Banking resilient while securities and real estate are oversold
    PositivePanic,
    /// Significant weakness across all three sectors
    NegativeMedium,
    /// All three sectors deep red
    NegativeExtreme,
    /// Large move that fits no rule, or missing sector coverage
    UnclearPattern,
    /// Declared for the signal table; no classification rule produces it
    RecoverySignal,
}

impl PanicType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanicType::NoPanic => "NO_PANIC",
            PanicType::PositivePanic => "POSITIVE_PANIC",
            PanicType::NegativeMedium => "NEGATIVE_MEDIUM",
            PanicType::NegativeExtreme => "NEGATIVE_EXTREME",
            PanicType::UnclearPattern => "UNCLEAR_PATTERN",
            PanicType::RecoverySignal => "RECOVERY_SIGNAL",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PanicType::NoPanic => "Normal trading day",
            PanicType::PositivePanic => "Banking stable, others oversold: buy opportunity",
            PanicType::NegativeMedium => "Broad weakness: defensive mode",
            PanicType::NegativeExtreme => "All sectors deep red: extreme caution",
            PanicType::UnclearPattern => "Large move without a clear sector pattern",
            PanicType::RecoverySignal => "Securities-led recovery",
        }
    }
}

impl fmt::Display for PanicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pre-panic warning severity
///
/// Variants are declared in ascending severity, so the derived `Ord` is the
/// total order used to pick the strongest warning:
/// `InsufficientData < NoWarning < DevelopingWeakness < EarlyWarning < ModerateWarning < StrongWarning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningLevel {
    /// A sector indicator was missing, so nothing could be checked
    InsufficientData,
    NoWarning,
    /// Index down 1%+ with sector divergence
    DevelopingWeakness,
    /// Any sector down 2%+ with the index down 1%+
    EarlyWarning,
    /// Securities weak while banking holds
    ModerateWarning,
    /// Real-estate-led contagion
    StrongWarning,
}

impl WarningLevel {
    /// All levels in ascending severity
    pub const ALL: [WarningLevel; 6] = [
        WarningLevel::InsufficientData,
        WarningLevel::NoWarning,
        WarningLevel::DevelopingWeakness,
        WarningLevel::EarlyWarning,
        WarningLevel::ModerateWarning,
        WarningLevel::StrongWarning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WarningLevel::InsufficientData => "INSUFFICIENT_DATA",
            WarningLevel::NoWarning => "NO_WARNING",
            WarningLevel::DevelopingWeakness => "DEVELOPING_WEAKNESS",
            WarningLevel::EarlyWarning => "EARLY_WARNING",
            WarningLevel::ModerateWarning => "MODERATE_WARNING",
            WarningLevel::StrongWarning => "STRONG_WARNING",
        }
    }
}

impl fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shape of the pre-panic window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternType {
    EscalatingToCrisis,
    PersistentWeakness,
    SustainedDeterioration,
    MultipleWeaknessEvents,
    /// No detectable precursor ("black swan")
    IsolatedSignals,
    NoSignalsDetected,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::EscalatingToCrisis => "ESCALATING_TO_CRISIS",
            PatternType::PersistentWeakness => "PERSISTENT_WEAKNESS",
            PatternType::SustainedDeterioration => "SUSTAINED_DETERIORATION",
            PatternType::MultipleWeaknessEvents => "MULTIPLE_WEAKNESS_EVENTS",
            PatternType::IsolatedSignals => "ISOLATED_SIGNALS",
            PatternType::NoSignalsDetected => "NO_SIGNALS_DETECTED",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PatternType::EscalatingToCrisis => "Warnings intensified into a strong signal right before the panic",
            PatternType::PersistentWeakness => "Moderate or strong warnings present across the window",
            PatternType::SustainedDeterioration => "Weakness at both ends of the window",
            PatternType::MultipleWeaknessEvents => "Two or more 2%+ index drops in the window",
            PatternType::IsolatedSignals => "No clear precursor (black swan)",
            PatternType::NoSignalsDetected => "No pre-panic data available",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_level_order() {
        for pair in WarningLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
        }
        assert_eq!(WarningLevel::ALL.iter().max(), Some(&WarningLevel::StrongWarning));
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&PanicType::PositivePanic).unwrap(), "\"POSITIVE_PANIC\"");
        assert_eq!(serde_json::to_string(&WarningLevel::InsufficientData).unwrap(), "\"INSUFFICIENT_DATA\"");
        assert_eq!(serde_json::to_string(&PatternType::EscalatingToCrisis).unwrap(), "\"ESCALATING_TO_CRISIS\"");

        let parsed: WarningLevel = serde_json::from_str("\"MODERATE_WARNING\"").unwrap();
        assert_eq!(parsed, WarningLevel::ModerateWarning);
    }

    #[test]
    fn test_display_matches_serde() {
        for level in WarningLevel::ALL {
            assert_eq!(serde_json::to_string(&level).unwrap(), format!("\"{}\"", level));
        }
    }
}

use crate::models::{TradingAdvice, WarningLevel};

/// Recommendation bundle for the strongest pre-panic warning
pub fn trading_advice(level: WarningLevel) -> TradingAdvice {
    match level {
        WarningLevel::StrongWarning => TradingAdvice {
            action: "REDUCE positions immediately, increase cash to 70%+",
            risk_level: "EXTREME - Panic likely within 1-3 days",
            position_size: "Maximum 30% equity exposure",
            defensive_stocks: "VCB only, exit all others",
        },
        WarningLevel::ModerateWarning => TradingAdvice {
            action: "Reduce portfolio by 40%, prepare defensive positions",
            risk_level: "HIGH - Monitor daily for escalation",
            position_size: "Maximum 60% equity exposure",
            defensive_stocks: "VCB, VIC core holdings only",
        },
        WarningLevel::EarlyWarning => TradingAdvice {
            action: "Reduce riskiest positions, raise cash to 30%",
            risk_level: "MEDIUM - Watch for pattern development",
            position_size: "Maximum 70% equity exposure",
            defensive_stocks: "Emphasize VCB, VIC, TCB quality",
        },
        WarningLevel::DevelopingWeakness => TradingAdvice {
            action: "Monitor closely, prepare for defensive rotation",
            risk_level: "LOW-MEDIUM - Early stage warning",
            position_size: "Normal allocation with caution",
            defensive_stocks: "Quality focus: Banking/VIC blend",
        },
        WarningLevel::NoWarning => TradingAdvice {
            action: "Normal trading strategies",
            risk_level: "LOW - No immediate panic signals",
            position_size: "Normal allocation",
            defensive_stocks: "Standard diversification",
        },
        WarningLevel::InsufficientData => TradingAdvice {
            action: "Normal trading strategies",
            risk_level: "UNKNOWN - Insufficient data for analysis",
            position_size: "Conservative allocation recommended",
            defensive_stocks: "Maintain defensive baseline",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_distinct_risk() {
        let risks: Vec<&str> = WarningLevel::ALL.iter().map(|l| trading_advice(*l).risk_level).collect();
        let mut unique = risks.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), WarningLevel::ALL.len());
    }

    #[test]
    fn test_strong_warning_advice() {
        let advice = trading_advice(WarningLevel::StrongWarning);
        assert_eq!(advice.position_size, "Maximum 30% equity exposure");
        assert!(advice.risk_level.starts_with("EXTREME"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(trading_advice(WarningLevel::NoWarning)).unwrap();
        assert_eq!(json["riskLevel"], "LOW - No immediate panic signals");
        assert_eq!(json["defensiveStocks"], "Standard diversification");
    }
}

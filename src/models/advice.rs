use serde::Serialize;

/// Ticker lists attached to a panic classification
///
/// Entries are either ticker symbols or short watch-list labels
/// (e.g. `Banking_stabilization`). They depend only on the panic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradingSignals {
    pub buy: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub watch: &'static [&'static str],
}

/// Recommendation bundle attached to a warning level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingAdvice {
    pub action: &'static str,
    pub risk_level: &'static str,
    pub position_size: &'static str,
    pub defensive_stocks: &'static str,
}

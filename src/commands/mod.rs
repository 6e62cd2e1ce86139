pub mod analyze;
pub mod cycle;
pub mod latest;
pub mod pre_panic;
pub mod range;
pub mod serve;

use crate::analysis::PanicAnalyzer;
use crate::error::Result;
use crate::models::AnalyzerConfig;
use crate::services::MarketStore;
use serde::Serialize;

/// Load the index and sector baskets from the configured store
///
/// Console progress is suppressed in JSON mode so stdout stays parseable.
pub async fn load_analyzer(config: &AnalyzerConfig, json: bool) -> Result<PanicAnalyzer> {
    let store = MarketStore::from_config(config)?;
    if !json {
        println!("📁 Loading market data from {}", store.describe());
    }

    let analyzer = PanicAnalyzer::from_store(&store).await;
    if json {
        return Ok(analyzer);
    }
    match analyzer.most_recent_date() {
        Some(latest) => println!("✅ Loaded {} tickers (latest: {})\n", analyzer.ticker_count(), latest),
        None => println!("⚠️  No VNINDEX data found; every date will report no data\n"),
    }

    Ok(analyzer)
}

/// Pretty-print any result as JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| crate::error::AppError::Other(format!("JSON encoding failed: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Report a failed command and exit with status 1
pub fn exit_on_error(result: Result<()>) {
    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

pub(crate) const RULE: &str = "════════════════════════════════════════════════════════════";

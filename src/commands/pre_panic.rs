use super::{exit_on_error, load_analyzer, print_json, RULE};
use crate::error::Result;
use crate::models::{AnalyzerConfig, PrePanicAnalysis, WarningLevel};
use crate::utils::{format_percent, parse_date};
use chrono::NaiveDate;

pub async fn run(config: AnalyzerConfig, date: String, json: bool) {
    exit_on_error(pre_panic(&config, &date, json).await);
}

async fn pre_panic(config: &AnalyzerConfig, date: &str, json: bool) -> Result<()> {
    let date = parse_date(date)?;
    let analyzer = load_analyzer(config, json).await?;
    let analysis = analyzer.analyze_pre_panic(date);

    if json {
        return print_json(&analysis);
    }
    print_pre_panic(date, analysis.as_ref());
    Ok(())
}

fn warning_icon(level: WarningLevel) -> &'static str {
    match level {
        WarningLevel::StrongWarning => "🔴",
        WarningLevel::ModerateWarning => "🟠",
        WarningLevel::EarlyWarning => "🟡",
        WarningLevel::DevelopingWeakness => "🔵",
        WarningLevel::NoWarning => "🟢",
        WarningLevel::InsufficientData => "⚪",
    }
}

/// Console view of a pre-panic scan
pub fn print_pre_panic(date: NaiveDate, analysis: Option<&PrePanicAnalysis>) {
    println!("🔮 Pre-Panic Analysis: {}", date);
    println!("{}", RULE);

    let Some(analysis) = analysis else {
        println!("⚠️  Not available: no trading days before {}", date);
        return;
    };

    println!("📅 Checkpoints:");
    let checkpoints = analysis.pre_panic_signals.chronological();
    if checkpoints.is_empty() {
        println!("   (none)");
    }
    for (label, signal) in checkpoints {
        println!(
            "   {:<5} {}  VNINDEX {:>+6.2}%  BSI {:>8}  SSI {:>8}  RSI {:>8}  {} {}",
            label,
            signal.date,
            signal.index_change_percent,
            format_percent(signal.bsi),
            format_percent(signal.ssi),
            format_percent(signal.rsi),
            warning_icon(signal.warning_level),
            signal.warning_level
        );
    }
    println!();

    println!("📉 Significant Drops (≤ -2%): {}", analysis.significant_drops.len());
    for drop in &analysis.significant_drops {
        println!(
            "   T-{:<3} {}  VNINDEX {:>+6.2}%  {} {}",
            drop.days_before,
            drop.date,
            drop.index_change_percent,
            warning_icon(drop.warning_level),
            drop.warning_level
        );
    }
    println!();

    println!(
        "{} Strongest Warning: {}",
        warning_icon(analysis.strongest_warning),
        analysis.strongest_warning
    );
    println!("🧩 Pattern: {}", analysis.pattern_type);
    println!("   {}", analysis.pattern_type.description());
    println!();

    let advice = &analysis.trading_advice;
    println!("💡 Trading Advice:");
    println!("   Action:     {}", advice.action);
    println!("   Risk:       {}", advice.risk_level);
    println!("   Position:   {}", advice.position_size);
    println!("   Defensive:  {}", advice.defensive_stocks);
}

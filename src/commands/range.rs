use super::{exit_on_error, load_analyzer, print_json, RULE};
use crate::error::Result;
use crate::models::{AnalyzerConfig, RangeAnalysis};
use crate::utils::{format_percent, parse_date};

pub async fn run(config: AnalyzerConfig, start: String, end: String, json: bool) {
    exit_on_error(range(&config, &start, &end, json).await);
}

async fn range(config: &AnalyzerConfig, start: &str, end: &str, json: bool) -> Result<()> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    let analyzer = load_analyzer(config, json).await?;
    let range = analyzer.analyze_date_range(start, end)?;

    if json {
        return print_json(&range);
    }
    print_range(&range);
    Ok(())
}

fn print_range(range: &RangeAnalysis) {
    println!("🔍 Analyzing Vietnamese Market from {} to {}", range.start, range.end);
    println!("{}", RULE);

    for day in &range.panic_days {
        println!("🚨 PANIC DAY: {} ({:+.2}%) {}", day.date, day.index_change_percent, day.panic_type);
    }
    for day in &range.banking_stabilization {
        println!("🏦 BANKING STABILIZATION: {} (BSI: {})", day.date, format_percent(day.bsi));
    }
    for day in &range.securities_recovery {
        println!(
            "📈 SECURITIES RECOVERY: {} (SSI: {} vs VNINDEX: {:+.2}%)",
            day.date,
            format_percent(day.ssi),
            day.index_change_percent
        );
    }

    println!();
    println!("{}", RULE);
    println!("📊 CYCLE ANALYSIS SUMMARY");
    println!("{}", RULE);
    println!("📅 Period: {} to {}", range.start, range.end);
    println!("📆 Trading Days Analyzed: {}", range.all_results.len());
    println!("🚨 Panic Days Found: {}", range.panic_days.len());
    println!("🏦 Banking Stabilization Days: {}", range.banking_stabilization.len());
    println!("📈 Securities Recovery Days: {}", range.securities_recovery.len());
}

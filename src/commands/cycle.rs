use super::{exit_on_error, load_analyzer, print_json, RULE};
use crate::error::Result;
use crate::models::{AnalyzerConfig, PanicCycle};
use crate::utils::{format_percent, parse_date};

pub async fn run(config: AnalyzerConfig, start: String, end: String, json: bool) {
    exit_on_error(cycle(&config, &start, &end, json).await);
}

async fn cycle(config: &AnalyzerConfig, start: &str, end: &str, json: bool) -> Result<()> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    let analyzer = load_analyzer(config, json).await?;
    let cycles = analyzer.analyze_complete_cycle(start, end)?;

    if json {
        return print_json(&cycles);
    }

    println!("🔄 COMPLETE CYCLE ANALYSIS: {} to {}", start, end);
    println!("{}", RULE);

    if cycles.is_empty() {
        println!("ℹ️  No complete panic → stabilization → recovery cycles found");
        return Ok(());
    }

    for (i, cycle) in cycles.iter().enumerate() {
        print_cycle(i + 1, cycle);
    }
    println!("✅ Complete cycles found: {}", cycles.len());
    Ok(())
}

fn print_cycle(number: usize, cycle: &PanicCycle) {
    println!("🔄 Cycle {}", number);
    println!(
        "   🚨 Panic: {} ({:+.2}%, {})",
        cycle.panic.date, cycle.panic.index_change_percent, cycle.panic.panic_type
    );
    println!(
        "   🏦 Banking Stabilization: {} (BSI: {})",
        cycle.banking_stabilization.date,
        format_percent(cycle.banking_stabilization.bsi)
    );
    println!("   📈 Securities Recovery: {} days", cycle.securities_recovery.len());
    for recovery in &cycle.securities_recovery {
        println!("      📈 {} (SSI: {})", recovery.date, format_percent(recovery.ssi));
    }
    println!();
}

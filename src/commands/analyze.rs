use super::{exit_on_error, load_analyzer, print_json, RULE};
use crate::error::Result;
use crate::models::{AnalyzerConfig, DateAnalysis, Sector};
use crate::utils::{format_percent, parse_date};

pub async fn run(config: AnalyzerConfig, date: String, json: bool) {
    exit_on_error(analyze(&config, &date, json).await);
}

async fn analyze(config: &AnalyzerConfig, date: &str, json: bool) -> Result<()> {
    let date = parse_date(date)?;
    let analyzer = load_analyzer(config, json).await?;
    let analysis = analyzer.classify_date(date)?;

    if json {
        return print_json(&analysis);
    }
    print_date_analysis(&analysis);
    Ok(())
}

/// Console view of one classified date
pub fn print_date_analysis(analysis: &DateAnalysis) {
    println!("🔍 Panic Analysis: {}", analysis.date);
    println!("{}", RULE);

    let vnindex = &analysis.vnindex;
    println!(
        "📉 VNINDEX: {:.2} → {:.2} ({:+.2}%, intraday low {:+.2}%)",
        vnindex.previous_close, vnindex.target_close, vnindex.change_percent, vnindex.intraday_drop_percent
    );
    println!();

    for sector in Sector::ALL {
        print_sector(analysis, sector);
    }

    let panic_type = analysis.panic_type;
    let icon = if analysis.is_panic_day() { "🚨" } else { "✅" };
    println!("{} Panic Type: {}", icon, panic_type);
    println!("   {}", panic_type.description());
    println!();

    let signals = &analysis.trading_signals;
    println!("💡 Trading Signals:");
    println!("   Buy:   {}", join_or_none(signals.buy));
    println!("   Avoid: {}", join_or_none(signals.avoid));
    println!("   Watch: {}", join_or_none(signals.watch));
}

fn print_sector(analysis: &DateAnalysis, sector: Sector) {
    let (value, contributors) = match sector {
        Sector::Banking => (analysis.bsi, &analysis.banking_valid),
        Sector::Securities => (analysis.ssi, &analysis.securities_valid),
        Sector::RealEstate => (analysis.rsi, &analysis.real_estate_valid),
    };

    let icon = match sector {
        Sector::Banking => "🏦",
        Sector::Securities => "📈",
        Sector::RealEstate => "🏢",
    };

    println!(
        "{} {} ({}): {}  [{}/{} tickers]",
        icon,
        sector,
        sector.indicator_name(),
        format_percent(value),
        contributors.len(),
        sector.weights().len()
    );

    for (ticker, weight) in sector.weights() {
        match analysis.changes.get(*ticker) {
            Some(change) => println!(
                "   {:<6} {:>+7.2}%   weight {:>3.0}%   contribution {:>+6.2}",
                ticker,
                change.change_percent,
                weight * 100.0,
                change.change_percent * weight
            ),
            None => println!("   {:<6} {:>8}   weight {:>3.0}%", ticker, "no data", weight * 100.0),
        }
    }
    println!();
}

fn join_or_none(items: &[&str]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

use super::analyze::print_date_analysis;
use super::pre_panic::print_pre_panic;
use super::{exit_on_error, load_analyzer, print_json};
use crate::error::{AppError, Result};
use crate::models::AnalyzerConfig;

pub async fn run(config: AnalyzerConfig, json: bool) {
    exit_on_error(latest(&config, json).await);
}

async fn latest(config: &AnalyzerConfig, json: bool) -> Result<()> {
    let analyzer = load_analyzer(config, json).await?;
    let date = analyzer
        .most_recent_date()
        .ok_or_else(|| AppError::NotFound("No VNINDEX data loaded".to_string()))?;

    let analysis = analyzer.classify_date(date)?;
    let pre_panic = analyzer.analyze_pre_panic(date);

    if json {
        return print_json(&serde_json::json!({
            "date": date,
            "analysis": analysis,
            "prePanic": pre_panic,
        }));
    }

    print_date_analysis(&analysis);
    println!();
    print_pre_panic(date, pre_panic.as_ref());
    Ok(())
}

use super::{exit_on_error, load_analyzer};
use crate::error::{AppError, Result};
use crate::models::AnalyzerConfig;
use crate::server;
use std::sync::Arc;

pub async fn run(config: AnalyzerConfig, port: u16) {
    exit_on_error(serve(&config, port).await);
}

async fn serve(config: &AnalyzerConfig, port: u16) -> Result<()> {
    println!("🚀 Starting vnpanic server on port {}", port);

    let analyzer = Arc::new(load_analyzer(config, false).await?);

    println!("🌐 Endpoints:");
    println!("   GET /health");
    println!("   GET /panic/analyze?date=YYYY-MM-DD");
    println!("   GET /panic/pre-panic?date=YYYY-MM-DD");
    println!("   GET /panic/range?start=YYYY-MM-DD&end=YYYY-MM-DD");

    server::serve(analyzer, port)
        .await
        .map_err(|e| AppError::Other(format!("Server error: {}", e)))
}

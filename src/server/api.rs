use crate::error::AppError;
use crate::server::AppState;
use crate::utils::{format_date, parse_date};
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Query parameters for the single-date endpoints
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DateQuery {
    /// Date to analyze (YYYY-MM-DD); defaults to the most recent trading day
    pub date: Option<String>,
}

/// Query parameters for /panic/range
#[derive(Debug, Deserialize, Clone)]
pub struct RangeQuery {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub tickers_loaded: usize,
    pub latest_date: Option<String>,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::NoDataForDate(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::InvalidInput(_) | AppError::Parse(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            warn!(error = %self, "Request failed");
        }
        error_response(status, self.to_string())
    }
}

/// Requested date, or the latest index date when none was given
fn resolve_date(app_state: &AppState, date: Option<&str>) -> Result<NaiveDate, AppError> {
    match date {
        Some(date_str) => parse_date(date_str),
        None => app_state
            .analyzer
            .most_recent_date()
            .ok_or_else(|| AppError::NotFound("No market data loaded".to_string())),
    }
}

/// GET /health
pub async fn health_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    debug!("Received request for health");

    Json(HealthResponse {
        status: "ok",
        tickers_loaded: app_state.analyzer.ticker_count(),
        latest_date: app_state.analyzer.most_recent_date().map(format_date),
    })
}

/// GET /panic/analyze?date=YYYY-MM-DD - classify a single date
#[instrument(skip(app_state))]
pub async fn analyze_handler(
    State(app_state): State<AppState>,
    Query(params): Query<DateQuery>,
) -> Result<Response, AppError> {
    let date = resolve_date(&app_state, params.date.as_deref())?;
    let analysis = app_state.analyzer.classify_date(date)?;

    info!(date = %date, panic_type = %analysis.panic_type, "Returning date analysis");
    Ok(Json(analysis).into_response())
}

/// GET /panic/pre-panic?date=YYYY-MM-DD - 14-day pre-panic scan ending before `date`
#[instrument(skip(app_state))]
pub async fn pre_panic_handler(
    State(app_state): State<AppState>,
    Query(params): Query<DateQuery>,
) -> Result<Response, AppError> {
    let date = resolve_date(&app_state, params.date.as_deref())?;

    match app_state.analyzer.analyze_pre_panic(date) {
        Some(analysis) => Ok(Json(analysis).into_response()),
        None => Ok(error_response(
            StatusCode::NOT_FOUND,
            format!("Pre-panic analysis not available for {}: no trading history before this date", date),
        )),
    }
}

/// GET /panic/range?start=YYYY-MM-DD&end=YYYY-MM-DD
#[instrument(skip(app_state))]
pub async fn range_handler(
    State(app_state): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> Result<Response, AppError> {
    let start = parse_date(&params.start)?;
    let end = parse_date(&params.end)?;

    // Long spans classify many days; keep that work off the async workers
    let analyzer = app_state.analyzer.clone();
    let range = tokio::task::spawn_blocking(move || analyzer.analyze_date_range(start, end))
        .await
        .map_err(|e| AppError::Other(format!("Range analysis task failed: {}", e)))??;

    Ok(Json(range).into_response())
}

use crate::constants::DEFAULT_MARKET_DATA_URL;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Get market data directory from environment variable or use default
pub fn get_market_data_dir() -> PathBuf {
    std::env::var("MARKET_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("market_data"))
}

/// Get remote market data base URL from environment variable or use default
pub fn get_market_data_url() -> String {
    std::env::var("MARKET_DATA_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_MARKET_DATA_URL.to_string())
}

/// Parse a YYYY-MM-DD date string
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidInput(format!("Date must be in YYYY-MM-DD format, got '{}'", date_str)))
}

/// Parse the date part of a CSV time field
///
/// Accepts "YYYY-MM-DD", "YYYY-MM-DD HH:MM:SS" and ISO 8601 "YYYY-MM-DDTHH:MM:SS".
pub fn parse_time_field(time_str: &str) -> Result<NaiveDate> {
    let time_str = time_str.trim();
    let date_part = time_str
        .split(|c| c == ' ' || c == 'T')
        .next()
        .unwrap_or(time_str);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| Error::Parse(format!("Invalid time '{}': {}", time_str, e)))
}

/// Format a date as YYYY-MM-DD
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format an optional percentage with sign, or "N/A"
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:+.2}%", v),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2018-02-05").unwrap(), NaiveDate::from_ymd_opt(2018, 2, 5).unwrap());
        assert!(matches!(parse_date("05/02/2018"), Err(Error::InvalidInput(_))));
        assert!(parse_date("2018-02-30").is_err());
    }

    #[test]
    fn test_parse_time_field() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        assert_eq!(parse_time_field("2024-06-14").unwrap(), expected);
        assert_eq!(parse_time_field("2024-06-14 09:15:00").unwrap(), expected);
        assert_eq!(parse_time_field("2024-06-14T09:15:00").unwrap(), expected);
        assert!(matches!(parse_time_field("yesterday"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(-3.543)), "-3.54%");
        assert_eq!(format_percent(Some(1.0)), "+1.00%");
        assert_eq!(format_percent(None), "N/A");
    }
}

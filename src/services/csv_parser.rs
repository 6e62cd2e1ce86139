use crate::constants::{csv_column, CSV_BASIC_COLUMNS, CSV_HEADER, INDEX_TICKERS};
use crate::error::{Error, Result};
use crate::models::Bar;
use crate::utils::parse_time_field;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

/// Check if a ticker is an index (should not be multiplied by 1000)
pub fn is_index(ticker: &str) -> bool {
    INDEX_TICKERS.contains(&ticker)
}

/// Apply price scaling: multiply by 1000 for stocks, keep as-is for indices
fn scale_price(price: f64, ticker: &str) -> f64 {
    if is_index(ticker) {
        price
    } else {
        price * 1000.0
    }
}

/// Parse a daily CSV file body into bars for `ticker`
///
/// The header must start with `ticker,time,open,high,low,close,volume`; any
/// trailing indicator columns (ma10, ma20, ...) are ignored. Rows that fail to
/// parse are skipped. Bars are returned in file order; callers sort.
pub fn parse_daily_csv(content: &str, ticker: &str) -> Result<Vec<Bar>> {
    parse_daily_csv_bytes(content.as_bytes(), ticker)
}

/// [`parse_daily_csv`] over raw file bytes; rows that are not valid UTF-8 are skipped
pub fn parse_daily_csv_bytes(content: &[u8], ticker: &str) -> Result<Vec<Bar>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content);

    let headers = reader.headers()?.iter().collect::<Vec<_>>().join(",").to_lowercase();
    if !headers.starts_with(CSV_HEADER) {
        return Err(Error::Parse(format!(
            "Invalid CSV format for {}: expected header '{}', got '{}'",
            ticker, CSV_HEADER, headers
        )));
    }

    let mut bars = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                skipped += 1;
                debug!(ticker, line = ?e.position().map(|p| p.line()), error = %e, "Skipping unreadable CSV row");
                continue;
            }
        };
        match parse_csv_record(&record, ticker) {
            Ok(bar) => bars.push(bar),
            Err(e) => {
                skipped += 1;
                debug!(ticker, line = ?record.position().map(|p| p.line()), error = %e, "Skipping malformed CSV row");
            }
        }
    }

    debug!(ticker, rows = bars.len(), skipped, "Parsed daily CSV");
    Ok(bars)
}

/// Parse a CSV record into a Bar
fn parse_csv_record(record: &StringRecord, ticker: &str) -> Result<Bar> {
    if record.len() < CSV_BASIC_COLUMNS {
        return Err(Error::Parse(format!("Expected {} columns, got {}", CSV_BASIC_COLUMNS, record.len())));
    }

    let time_str = record.get(csv_column::TIME).ok_or_else(|| Error::Parse("Missing time field".to_string()))?;
    let date = parse_time_field(time_str)?;

    let open = parse_price(record, csv_column::OPEN, "open")?;
    let high = parse_price(record, csv_column::HIGH, "high")?;
    let low = parse_price(record, csv_column::LOW, "low")?;
    let close = parse_price(record, csv_column::CLOSE, "close")?;
    let volume = parse_volume(record.get(csv_column::VOLUME).unwrap_or(""))?;

    Ok(Bar::new(
        ticker,
        date,
        scale_price(open, ticker),
        scale_price(high, ticker),
        scale_price(low, ticker),
        scale_price(close, ticker),
        volume,
    ))
}

fn parse_price(record: &StringRecord, index: usize, name: &str) -> Result<f64> {
    record
        .get(index)
        .ok_or_else(|| Error::Parse(format!("Missing {}", name)))?
        .parse()
        .map_err(|e| Error::Parse(format!("Invalid {}: {}", name, e)))
}

/// Volume is usually an integer but some exports write "12345.0"
fn parse_volume(value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .or_else(|_| value.parse::<f64>().map(|v| v.max(0.0) as u64))
        .map_err(|e| Error::Parse(format!("Invalid volume: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_is_index() {
        assert!(is_index("VNINDEX"));
        assert!(is_index("VN30"));
        assert!(!is_index("VCB"));
        assert!(!is_index("SSI"));
    }

    #[test]
    fn test_scale_price() {
        // Stock ticker should be multiplied by 1000
        assert_eq!(scale_price(23.2, "VCB"), 23200.0);
        assert_eq!(scale_price(60.5, "VIC"), 60500.0);

        // Index should remain unchanged
        assert_eq!(scale_price(1250.5, "VNINDEX"), 1250.5);
    }

    #[test]
    fn test_parse_daily_csv() {
        let content = "ticker,time,open,high,low,close,volume\n\
                       VCB,2018-02-02,60.1,61.0,59.5,60.0,1200000\n\
                       VCB,2018-02-05,59.0,59.2,56.0,56.5,2500000\n";
        let bars = parse_daily_csv(content, "VCB").unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].date, NaiveDate::from_ymd_opt(2018, 2, 5).unwrap());
        assert_eq!(bars[1].close, 56500.0);
        assert_eq!(bars[1].low, 56000.0);
        assert_eq!(bars[1].volume, 2_500_000);
        assert_eq!(bars[1].ticker, "VCB");
    }

    #[test]
    fn test_parse_enhanced_csv_ignores_indicator_columns() {
        let content = "ticker,time,open,high,low,close,volume,ma10,ma20,ma50\n\
                       VNINDEX,2024-06-14 00:00:00,1280.1,1285.0,1270.2,1275.5,650000000,1260.0,,\n";
        let bars = parse_daily_csv(content, "VNINDEX").unwrap();

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].close, 1275.5);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let content = "ticker,time,open,high,low,close,volume\n\
                       SSI,2018-02-02,30.0,31.0,29.0,30.5,100\n\
                       SSI,not-a-date,30.0,31.0,29.0,30.5,100\n\
                       SSI,2018-02-06,30.0,31.0,29.0,abc,100\n\
                       SSI,2018-02-07,30.0\n\
                       SSI,2018-02-08,30.0,31.0,29.0,30.0,250.0\n";
        let bars = parse_daily_csv(content, "SSI").unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].volume, 250);
    }

    #[test]
    fn test_unreadable_row_does_not_drop_ticker() {
        let content: &[u8] = b"ticker,time,open,high,low,close,volume\n\
                               SSI,2018-02-02,30.0,31.0,29.0,30.5,100\n\
                               SSI,2018-02-05,\xff\xfe,31.0,29.0,30.5,100\n\
                               SSI,2018-02-06,30.0,31.0,29.0,30.0,200\n";
        let bars = parse_daily_csv_bytes(content, "SSI").unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2018, 2, 2).unwrap());
        assert_eq!(bars[1].date, NaiveDate::from_ymd_opt(2018, 2, 6).unwrap());
    }

    #[test]
    fn test_invalid_header() {
        let content = "date,close\n2018-02-02,30.0\n";
        assert!(matches!(parse_daily_csv(content, "SSI"), Err(Error::Parse(_))));
    }
}

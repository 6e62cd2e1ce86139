pub mod csv_parser;
pub mod store;

pub use csv_parser::parse_daily_csv;
pub use store::{load_market_data, CsvStore, HttpStore, MarketStore, TimeSeriesStore};

//! Yahoo Finance data provider.

pub mod dividends;
pub mod fundamentals;
pub mod parse;

pub use dividends::DividendHistoryFetcher;
pub use fundamentals::YahooFundamentalsProvider;
pub use parse::parse_quote_summary;

//! Provider selection.

use bluechip::data::{
    FundamentalsProvider, JsonFileProvider, Result, TickerRecord, YahooFundamentalsProvider,
};
use std::path::Path;

/// Either the live Yahoo provider or an offline data file.
#[derive(Debug)]
pub(crate) enum DataSource {
    Yahoo(Box<YahooFundamentalsProvider>),
    File(JsonFileProvider),
}

impl DataSource {
    /// The data file when given, Yahoo otherwise.
    ///
    /// `dividend_years` is how far back Yahoo dividend history is read.
    pub(crate) fn open(data_file: Option<&Path>, dividend_years: u32) -> Result<Self> {
        match data_file {
            Some(path) => JsonFileProvider::open(path).map(Self::File),
            None => YahooFundamentalsProvider::new()
                .map(|p| Self::Yahoo(Box::new(p.with_dividend_years(dividend_years)))),
        }
    }
}

impl FundamentalsProvider for DataSource {
    fn name(&self) -> &str {
        match self {
            Self::Yahoo(p) => p.name(),
            Self::File(p) => p.name(),
        }
    }

    async fn fetch(&self, symbol: &str) -> Result<TickerRecord> {
        match self {
            Self::Yahoo(p) => p.fetch(symbol).await,
            Self::File(p) => p.fetch(symbol).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluechip::screen::ScreeningCriteria;

    #[tokio::test]
    async fn test_data_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"[{"symbol": "KO", "price": 60.0}]"#).unwrap();

        let source = DataSource::open(Some(&path), 6).unwrap();
        assert_eq!(source.name(), "json-file");
        assert_eq!(source.fetch("ko").await.unwrap().price, Some(60.0));
        assert!(source.fetch("PEP").await.is_err());
    }

    #[test]
    fn test_missing_data_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DataSource::open(Some(&dir.path().join("none.json")), 6).is_err());
    }

    #[test]
    fn test_yahoo_lookback_follows_criteria() {
        let criteria: ScreeningCriteria =
            serde_json::from_str(r#"{"min_dividend_years": 10}"#).unwrap();
        match DataSource::open(None, criteria.history_years()).unwrap() {
            DataSource::Yahoo(provider) => assert_eq!(provider.dividend_years(), 11),
            DataSource::File(_) => panic!("expected the Yahoo provider"),
        }
    }
}

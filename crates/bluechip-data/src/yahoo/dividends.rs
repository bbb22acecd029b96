//! Dividend history from the Yahoo Finance chart API.

use crate::error::{DataError, Result};
use crate::record::DividendPayment;
use chrono::DateTime;
use yahoo_finance_api as yahoo;

/// Fetches dividend payment history.
pub struct DividendHistoryFetcher {
    connector: yahoo::YahooConnector,
    years: u32,
}

impl std::fmt::Debug for DividendHistoryFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DividendHistoryFetcher")
            .field("years", &self.years)
            .finish_non_exhaustive()
    }
}

impl DividendHistoryFetcher {
    /// Default lookback. Six calendar years leaves five complete annual totals.
    pub const DEFAULT_YEARS: u32 = 6;

    /// Create a fetcher with the default lookback.
    pub fn new() -> Result<Self> {
        Self::with_years(Self::DEFAULT_YEARS)
    }

    /// Create a fetcher that looks back `years` calendar years.
    pub fn with_years(years: u32) -> Result<Self> {
        Ok(Self {
            connector: yahoo::YahooConnector::new()?,
            years,
        })
    }

    /// Change the lookback; at least one year.
    pub fn set_years(&mut self, years: u32) {
        self.years = years.max(1);
    }

    /// Lookback in calendar years.
    pub const fn years(&self) -> u32 {
        self.years
    }

    /// Fetch all dividend payments in the lookback window, oldest first.
    pub async fn fetch(&self, symbol: &str) -> Result<Vec<DividendPayment>> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let end = time::OffsetDateTime::now_utc();
        let start = end - time::Duration::days(i64::from(self.years) * 366);

        let response = self.connector.get_quote_history(symbol, start, end).await?;
        let dividends = response
            .dividends()
            .map_err(|e| DataError::YahooApi(e.to_string()))?;

        let mut payments = dividends
            .iter()
            .map(|d| {
                let ts = d.date as i64;
                DateTime::from_timestamp(ts, 0)
                    .map(|dt| DividendPayment::new(dt.date_naive(), d.amount))
                    .ok_or_else(|| DataError::TimeConversion(format!("invalid timestamp {ts}")))
            })
            .collect::<Result<Vec<_>>>()?;
        payments.sort_by_key(|p| p.date);

        Ok(payments)
    }
}

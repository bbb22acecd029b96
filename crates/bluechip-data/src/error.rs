//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while fetching fundamentals.
#[derive(Debug, Error)]
pub enum DataError {
    /// Yahoo Finance API error
    #[error("Yahoo Finance API error: {0}")]
    YahooApi(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP error: {0}")]
    Http(String),

    /// Data parsing error
    #[error("Data parsing error: {0}")]
    Parse(String),

    /// The provider does not know the symbol
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Missing data
    #[error("Missing data for {symbol}: {reason}")]
    MissingData {
        /// Symbol that was queried
        symbol: String,
        /// Reason for missing data
        reason: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Time conversion error
    #[error("Time conversion error: {0}")]
    TimeConversion(String),

    /// Rate limit error
    #[error("Rate limit exceeded, please retry after {retry_after_ms}ms")]
    RateLimit {
        /// Milliseconds to wait before retrying
        retry_after_ms: u64,
    },

    /// Invalid symbol
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Whether the error is scoped to a single ticker.
    ///
    /// Per-ticker errors mean "symbol not found / data unavailable" and are
    /// reported inline by the screener. Everything else (a broken data file,
    /// for instance) also ends up skipping the ticker, but is worth flagging
    /// louder in the logs.
    pub const fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::SymbolNotFound(_)
                | Self::MissingData { .. }
                | Self::InvalidSymbol(_)
                | Self::YahooApi(_)
                | Self::Http(_)
                | Self::Network(_)
                | Self::RateLimit { .. }
        )
    }
}

impl From<yahoo_finance_api::YahooError> for DataError {
    fn from(err: yahoo_finance_api::YahooError) -> Self {
        Self::YahooApi(err.to_string())
    }
}

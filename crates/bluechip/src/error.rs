//! Errors surfaced by the screener facade.

use bluechip_data::DataError;
use bluechip_output::ExportError;
use bluechip_screen::CriteriaError;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ScreenError>;

/// Watchlist read/write failures.
#[derive(Debug, Error)]
pub enum WatchlistError {
    /// The file does not exist
    #[error("watchlist file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// The file holds no tickers
    #[error("watchlist file '{}' contains no tickers", .0.display())]
    Empty(PathBuf),

    /// Any other IO failure
    #[error("watchlist file '{}': {source}", path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

/// Top-level error taxonomy.
///
/// Only configuration-style errors abort a run. A per-ticker
/// [`ScreenError::DataUnavailable`] is turned into a skipped outcome by the
/// screener.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// Bad or missing input: no tickers, invalid thresholds, bad flags
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Data for one ticker could not be obtained
    #[error("{symbol}: data unavailable: {source}")]
    DataUnavailable {
        /// Ticker symbol
        symbol: String,
        /// Provider error
        source: DataError,
    },

    /// Watchlist failure
    #[error(transparent)]
    Watchlist(#[from] WatchlistError),

    /// Export failure
    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    /// IO failure outside watchlists and exports
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CriteriaError> for ScreenError {
    fn from(err: CriteriaError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl ScreenError {
    /// Wrap a provider error for `symbol`.
    pub fn data_unavailable(symbol: impl Into<String>, source: DataError) -> Self {
        Self::DataUnavailable {
            symbol: symbol.into(),
            source,
        }
    }

    /// Short reason shown next to a skipped ticker.
    pub fn skip_reason(&self) -> String {
        match self {
            Self::DataUnavailable { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watchlist_messages() {
        let err = WatchlistError::NotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "watchlist file 'missing.txt' not found");

        let err = ScreenError::from(WatchlistError::Empty(PathBuf::from("empty.txt")));
        assert_eq!(err.to_string(), "watchlist file 'empty.txt' contains no tickers");
    }

    #[test]
    fn test_criteria_error_is_configuration() {
        let err = ScreenError::from(CriteriaError::Negative {
            field: "min_roic",
            value: -1.0,
        });
        assert!(matches!(err, ScreenError::Configuration(_)));
        assert!(err.to_string().contains("min_roic"));
    }

    #[test]
    fn test_skip_reason_uses_source() {
        let err = ScreenError::data_unavailable("ZZZZ", DataError::SymbolNotFound("ZZZZ".into()));
        assert!(err.to_string().starts_with("ZZZZ: data unavailable"));
        assert_eq!(err.skip_reason(), DataError::SymbolNotFound("ZZZZ".into()).to_string());
    }
}

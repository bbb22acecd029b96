//! Per-ticker outcome of a screening run.

use crate::metrics::DerivedMetrics;
use crate::scoring::ScoreResult;
use bluechip_data::TickerRecord;
use serde::{Deserialize, Serialize};

/// A ticker that was fetched and scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenedTicker {
    /// Raw fundamentals
    pub record: TickerRecord,
    /// Ratios derived from `record`
    pub metrics: DerivedMetrics,
    /// Score and verdict
    pub result: ScoreResult,
}

/// What happened to one requested ticker.
///
/// Every requested symbol yields exactly one outcome, so nothing is
/// silently dropped from a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScreenOutcome {
    /// Fetched and scored
    Screened(Box<ScreenedTicker>),
    /// Could not be screened
    Skipped {
        /// Requested symbol
        symbol: String,
        /// Why it was skipped
        reason: String,
    },
}

impl ScreenOutcome {
    /// Wrap a scored ticker.
    pub fn screened(record: TickerRecord, metrics: DerivedMetrics, result: ScoreResult) -> Self {
        Self::Screened(Box::new(ScreenedTicker {
            record,
            metrics,
            result,
        }))
    }

    /// Mark `symbol` as skipped.
    pub fn skipped(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Skipped {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Requested symbol.
    pub fn symbol(&self) -> &str {
        match self {
            Self::Screened(t) => &t.record.symbol,
            Self::Skipped { symbol, .. } => symbol,
        }
    }

    /// The scored ticker, if any.
    pub fn as_screened(&self) -> Option<&ScreenedTicker> {
        match self {
            Self::Screened(t) => Some(t),
            Self::Skipped { .. } => None,
        }
    }

    /// Whether the ticker was scored and passed.
    pub fn passed(&self) -> bool {
        self.as_screened().is_some_and(|t| t.result.passed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Scorer;

    #[test]
    fn test_outcome_accessors() {
        let record = TickerRecord::new("PG");
        let (metrics, result) = Scorer::default().evaluate(&record, None);
        let screened = ScreenOutcome::screened(record, metrics, result);
        assert_eq!(screened.symbol(), "PG");
        assert!(screened.as_screened().is_some());
        assert!(!screened.passed());

        let skipped = ScreenOutcome::skipped("ZZZZ", "symbol not found");
        assert_eq!(skipped.symbol(), "ZZZZ");
        assert!(skipped.as_screened().is_none());
        assert!(!skipped.passed());
    }
}

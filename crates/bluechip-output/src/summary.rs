//! Run summary.
//!
//! Screened tickers are ranked by score (highest first, ties keep input
//! order), skipped tickers are listed after the table, and the pass count is
//! reported over the tickers that were actually screened.

use crate::report::format_value;
use bluechip_screen::{ScreenOutcome, ScreenedTicker};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Ticker symbol
    pub ticker: String,
    /// Capped score
    pub score: u32,
    /// Whether the ticker passed
    pub pass: bool,
    /// Dividend yield (%)
    pub dividend_yield: Option<f64>,
    /// Trailing P/E
    pub pe_ratio: Option<f64>,
    /// Expected return (%)
    pub expected_return: Option<f64>,
}

impl From<&ScreenedTicker> for SummaryRow {
    fn from(t: &ScreenedTicker) -> Self {
        Self {
            ticker: t.record.symbol.clone(),
            score: t.result.score,
            pass: t.result.passed(),
            dividend_yield: t.metrics.dividend_yield,
            pe_ratio: t.metrics.pe_ratio,
            expected_return: t.metrics.expected_return,
        }
    }
}

/// Aggregate view of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Screened tickers, highest score first
    pub rows: Vec<SummaryRow>,
    /// `(symbol, reason)` for every skipped ticker, in input order
    pub skipped: Vec<(String, String)>,
}

impl Summary {
    /// Build from outcomes in input order.
    pub fn from_outcomes(outcomes: &[ScreenOutcome]) -> Self {
        let mut rows = Vec::new();
        let mut skipped = Vec::new();
        for outcome in outcomes {
            match outcome {
                ScreenOutcome::Screened(t) => rows.push(SummaryRow::from(t.as_ref())),
                ScreenOutcome::Skipped { symbol, reason } => {
                    skipped.push((symbol.clone(), reason.clone()));
                }
            }
        }
        // stable: ties keep input order
        rows.sort_by(|a, b| b.score.cmp(&a.score));
        Self { rows, skipped }
    }

    /// Number of screened tickers that passed.
    pub fn passed(&self) -> usize {
        self.rows.iter().filter(|r| r.pass).count()
    }

    /// Number of tickers that were screened.
    pub fn screened(&self) -> usize {
        self.rows.len()
    }

    /// `N of M stocks passed the screen`
    pub fn pass_line(&self) -> String {
        format!(
            "{} of {} stocks passed the screen",
            self.passed(),
            self.screened()
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "SUMMARY - Sorted by Score")?;
        writeln!(f, "{}", "=".repeat(60))?;

        if self.rows.is_empty() {
            writeln!(f, "No tickers could be screened.")?;
        } else {
            writeln!(
                f,
                "{:<8} {:>5}  {:<5} {:>9} {:>7} {:>15}",
                "Ticker", "Score", "Pass", "Div Yield", "P/E", "Expected Return"
            )?;
            for row in &self.rows {
                writeln!(
                    f,
                    "{:<8} {:>5}  {:<5} {:>9} {:>7} {:>15}",
                    row.ticker,
                    row.score,
                    if row.pass { "Yes" } else { "No" },
                    format_value(row.dividend_yield, "%", 2),
                    format_value(row.pe_ratio, "", 1),
                    format_value(row.expected_return, "%", 1),
                )?;
            }
        }

        if !self.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped:")?;
            for (symbol, reason) in &self.skipped {
                writeln!(f, "  {symbol}: {reason}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.pass_line())
    }
}

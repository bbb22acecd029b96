//! Raw per-ticker fundamentals.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single dividend payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividendPayment {
    /// Ex-dividend date
    pub date: NaiveDate,
    /// Amount paid per share
    pub amount: f64,
}

impl DividendPayment {
    /// Create a new dividend payment.
    pub const fn new(date: NaiveDate, amount: f64) -> Self {
        Self { date, amount }
    }
}

/// Raw fundamentals for one ticker, as returned by a provider.
///
/// Ratios carried over from the provider (`reported_*`, `return_on_*`,
/// `profit_margin`, `earnings_growth`) are fractions: 0.025 means 2.5%.
/// Missing fields are `None`; the metric calculator decides what to do
/// with gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerRecord {
    /// Ticker symbol
    pub symbol: String,
    /// Company short name
    pub name: Option<String>,
    /// Sector as reported by the provider
    pub sector: Option<String>,
    /// Industry as reported by the provider
    pub industry: Option<String>,

    /// Last price
    pub price: Option<f64>,
    /// Earnings per share (TTM)
    pub eps_ttm: Option<f64>,
    /// Annual dividend per share
    pub dividend_per_share: Option<f64>,
    /// Dividend payment history, oldest first
    pub dividend_history: Vec<DividendPayment>,
    /// Book value per share
    pub book_value_per_share: Option<f64>,

    /// Total debt
    pub total_debt: Option<f64>,
    /// Total shareholders' equity
    pub total_equity: Option<f64>,
    /// Earnings before interest and taxes (latest fiscal year)
    pub ebit: Option<f64>,
    /// Interest expense (latest fiscal year, sign as reported)
    pub interest_expense: Option<f64>,

    /// Return on assets
    pub return_on_assets: Option<f64>,
    /// Return on equity
    pub return_on_equity: Option<f64>,
    /// Net profit margin
    pub profit_margin: Option<f64>,
    /// Current ratio
    pub current_ratio: Option<f64>,
    /// Year-over-year earnings growth
    pub earnings_growth: Option<f64>,

    /// Dividend yield as reported by the provider
    pub reported_dividend_yield: Option<f64>,
    /// Payout ratio as reported by the provider
    pub reported_payout_ratio: Option<f64>,
    /// Debt to equity as reported by the provider (Yahoo reports percent)
    pub reported_debt_to_equity: Option<f64>,
    /// Trailing P/E ratio
    pub trailing_pe: Option<f64>,
    /// Forward P/E ratio
    pub forward_pe: Option<f64>,
    /// Price to book ratio
    pub price_to_book: Option<f64>,
}

impl TickerRecord {
    /// Create an empty record for `symbol`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Display name, falling back to the symbol.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.symbol)
    }

    /// Sector, or `"Unknown"` when the provider did not report one.
    pub fn sector_or_unknown(&self) -> &str {
        self.sector.as_deref().unwrap_or("Unknown")
    }

    /// Dividend totals per calendar year, oldest first.
    pub fn annual_dividends(&self) -> Vec<(i32, f64)> {
        let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
        for payment in &self.dividend_history {
            *totals.entry(payment.date.year()).or_insert(0.0) += payment.amount;
        }
        totals.into_iter().collect()
    }
}

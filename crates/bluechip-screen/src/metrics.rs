//! Derived metrics.
//!
//! [`DerivedMetrics::compute`] is a pure function of a [`TickerRecord`]. Each
//! ratio is computed on its own; when an input is missing or a denominator is
//! unusable that single metric becomes `None` and the rest are unaffected.
//! Computed values take precedence over the provider's own ratios, which are
//! used as fallbacks.

use crate::error::ComputationError;
use bluechip_data::TickerRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Years of annual dividend totals the growth rate spans by default.
pub const DEFAULT_GROWTH_YEARS: usize = 5;

/// Haircut applied to leverage-adjusted ROA when estimating ROIC.
pub const ROIC_HAIRCUT: f64 = 0.8;

/// Ratios derived from one ticker's fundamentals.
///
/// Percentages are in percent (2.5 = 2.5%). `None` means unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Dividend per share over price (%)
    pub dividend_yield: Option<f64>,
    /// Dividend per share over EPS (%)
    pub payout_ratio: Option<f64>,
    /// Compound annual growth of yearly dividend totals (%)
    pub dividend_growth_5yr: Option<f64>,
    /// |EBIT / interest expense|
    pub interest_coverage: Option<f64>,
    /// Total debt over total equity
    pub debt_to_equity: Option<f64>,
    /// Current assets over current liabilities
    pub current_ratio: Option<f64>,
    /// Return on invested capital, estimated from ROA (%)
    pub roic: Option<f64>,
    /// Return on equity (%)
    pub roe: Option<f64>,
    /// Net profit margin (%)
    pub profit_margin: Option<f64>,
    /// Price over trailing EPS
    pub pe_ratio: Option<f64>,
    /// Price over forward EPS
    pub forward_pe: Option<f64>,
    /// Price over book value per share
    pub price_to_book: Option<f64>,
    /// Dividend yield plus growth (%)
    pub expected_return: Option<f64>,
}

impl DerivedMetrics {
    /// Compute every metric from `record` with the default growth window.
    pub fn compute(record: &TickerRecord) -> Self {
        Self::compute_with_years(record, DEFAULT_GROWTH_YEARS)
    }

    /// Compute every metric, measuring dividend growth over `growth_years`
    /// calendar years.
    pub fn compute_with_years(record: &TickerRecord, growth_years: usize) -> Self {
        let dividend_yield = available(&record.symbol, dividend_yield(record));
        let dividend_growth_5yr =
            available(&record.symbol, dividend_growth(record, growth_years));
        let debt_to_equity = available(&record.symbol, debt_to_equity(record));

        Self {
            dividend_yield,
            payout_ratio: available(&record.symbol, payout_ratio(record)),
            dividend_growth_5yr,
            interest_coverage: available(&record.symbol, interest_coverage(record)),
            debt_to_equity,
            current_ratio: available(
                &record.symbol,
                require("current_ratio", "current_ratio", record.current_ratio),
            ),
            roic: available(&record.symbol, roic(record, debt_to_equity)),
            roe: available(
                &record.symbol,
                percent("roe", "return_on_equity", record.return_on_equity),
            ),
            profit_margin: available(
                &record.symbol,
                percent("profit_margin", "profit_margin", record.profit_margin),
            ),
            pe_ratio: available(&record.symbol, pe_ratio(record)),
            forward_pe: available(
                &record.symbol,
                require("forward_pe", "forward_pe", record.forward_pe),
            ),
            price_to_book: available(&record.symbol, price_to_book(record)),
            expected_return: available(
                &record.symbol,
                expected_return(dividend_yield, dividend_growth_5yr, record.earnings_growth),
            ),
        }
    }

    /// Number of metrics that could be computed.
    pub fn available_count(&self) -> usize {
        [
            self.dividend_yield,
            self.payout_ratio,
            self.dividend_growth_5yr,
            self.interest_coverage,
            self.debt_to_equity,
            self.current_ratio,
            self.roic,
            self.roe,
            self.profit_margin,
            self.pe_ratio,
            self.forward_pe,
            self.price_to_book,
            self.expected_return,
        ]
        .iter()
        .filter(|m| m.is_some())
        .count()
    }
}

fn available(symbol: &str, result: Result<f64, ComputationError>) -> Option<f64> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(symbol, metric = err.metric(), error = %err, "metric unavailable");
            None
        }
    }
}

fn require(
    metric: &'static str,
    input: &'static str,
    value: Option<f64>,
) -> Result<f64, ComputationError> {
    let value = value.ok_or(ComputationError::MissingInput { metric, input })?;
    finite(metric, value)
}

fn finite(metric: &'static str, value: f64) -> Result<f64, ComputationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComputationError::NonFinite { metric })
    }
}

fn percent(
    metric: &'static str,
    input: &'static str,
    fraction: Option<f64>,
) -> Result<f64, ComputationError> {
    finite(metric, require(metric, input, fraction)? * 100.0)
}

fn divide(metric: &'static str, numerator: f64, denominator: f64) -> Result<f64, ComputationError> {
    if denominator == 0.0 {
        return Err(ComputationError::DivisionByZero { metric });
    }
    finite(metric, numerator / denominator)
}

fn divide_positive(
    metric: &'static str,
    numerator: f64,
    denominator: f64,
) -> Result<f64, ComputationError> {
    if denominator <= 0.0 {
        return Err(ComputationError::NonPositiveDenominator {
            metric,
            value: denominator,
        });
    }
    divide(metric, numerator, denominator)
}

/// Use the computed value, or fall back to the provider-reported one scaled
/// by `scale`. The computation error is kept when neither exists.
fn or_reported(
    metric: &'static str,
    computed: Result<f64, ComputationError>,
    reported: Option<f64>,
    scale: f64,
) -> Result<f64, ComputationError> {
    match (computed, reported) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(reported)) => finite(metric, reported * scale),
        (Err(err), None) => Err(err),
    }
}

fn dividend_yield(record: &TickerRecord) -> Result<f64, ComputationError> {
    const METRIC: &str = "dividend_yield";
    let computed = require(METRIC, "dividend_per_share", record.dividend_per_share).and_then(
        |dps| {
            let price = require(METRIC, "price", record.price)?;
            Ok(divide_positive(METRIC, dps, price)? * 100.0)
        },
    );
    or_reported(METRIC, computed, record.reported_dividend_yield, 100.0)
}

fn payout_ratio(record: &TickerRecord) -> Result<f64, ComputationError> {
    const METRIC: &str = "payout_ratio";
    let computed = require(METRIC, "dividend_per_share", record.dividend_per_share).and_then(
        |dps| {
            let eps = require(METRIC, "eps_ttm", record.eps_ttm)?;
            Ok(divide_positive(METRIC, dps, eps)? * 100.0)
        },
    );
    or_reported(METRIC, computed, record.reported_payout_ratio, 100.0)
}

/// Growth between the yearly total `years - 1` calendar years before the
/// latest year and the latest year, annualised with exponent `1 / years`.
///
/// Calendar years without payments count as zero, so a gap at the start of
/// the window makes the metric unavailable.
fn dividend_growth(record: &TickerRecord, years: usize) -> Result<f64, ComputationError> {
    const METRIC: &str = "dividend_growth_5yr";
    let annual = record.annual_dividends();
    let (Some(&(first_year, _)), Some(&(last_year, newest))) = (annual.first(), annual.last())
    else {
        return Err(ComputationError::InsufficientHistory {
            metric: METRIC,
            years: 0,
            required: years,
        });
    };

    let span = usize::try_from(last_year - first_year + 1).unwrap_or(0);
    if years == 0 || span < years {
        return Err(ComputationError::InsufficientHistory {
            metric: METRIC,
            years: span,
            required: years,
        });
    }

    let start_year = last_year - (years as i32 - 1);
    let oldest = annual
        .iter()
        .find(|(year, _)| *year == start_year)
        .map_or(0.0, |(_, total)| *total);
    let ratio = divide_positive(METRIC, newest, oldest)?;

    finite(METRIC, (ratio.powf(1.0 / years as f64) - 1.0) * 100.0)
}

fn interest_coverage(record: &TickerRecord) -> Result<f64, ComputationError> {
    const METRIC: &str = "interest_coverage";
    let ebit = require(METRIC, "ebit", record.ebit)?;
    let interest = require(METRIC, "interest_expense", record.interest_expense)?;
    Ok(divide(METRIC, ebit, interest)?.abs())
}

fn debt_to_equity(record: &TickerRecord) -> Result<f64, ComputationError> {
    const METRIC: &str = "debt_to_equity";
    let computed = require(METRIC, "total_debt", record.total_debt).and_then(|debt| {
        let equity = require(METRIC, "total_equity", record.total_equity)?;
        divide_positive(METRIC, debt, equity)
    });
    // Yahoo reports debt/equity in percent.
    or_reported(METRIC, computed, record.reported_debt_to_equity, 0.01)
}

/// ROIC estimate: ROA scaled up by leverage, with a conservative haircut.
///
/// This is not NOPAT over invested capital. The provider does not expose
/// enough of the balance sheet for that, so the figure is an approximation
/// and should be read as a ranking signal only.
fn roic(record: &TickerRecord, debt_to_equity: Option<f64>) -> Result<f64, ComputationError> {
    const METRIC: &str = "roic";
    let roa = percent(METRIC, "return_on_assets", record.return_on_assets)?;
    match debt_to_equity {
        Some(de) if de != 0.0 => finite(METRIC, roa * (1.0 + de) * ROIC_HAIRCUT),
        _ => Ok(roa),
    }
}

fn pe_ratio(record: &TickerRecord) -> Result<f64, ComputationError> {
    const METRIC: &str = "pe_ratio";
    let computed = require(METRIC, "price", record.price).and_then(|price| {
        let eps = require(METRIC, "eps_ttm", record.eps_ttm)?;
        divide_positive(METRIC, price, eps)
    });
    or_reported(METRIC, computed, record.trailing_pe, 1.0)
}

fn price_to_book(record: &TickerRecord) -> Result<f64, ComputationError> {
    const METRIC: &str = "price_to_book";
    let computed = require(METRIC, "price", record.price).and_then(|price| {
        let book = require(METRIC, "book_value_per_share", record.book_value_per_share)?;
        divide_positive(METRIC, price, book)
    });
    or_reported(METRIC, computed, record.price_to_book, 1.0)
}

fn expected_return(
    dividend_yield: Option<f64>,
    dividend_growth: Option<f64>,
    earnings_growth: Option<f64>,
) -> Result<f64, ComputationError> {
    const METRIC: &str = "expected_return";
    let yield_pct = require(METRIC, "dividend_yield", dividend_yield)?;
    if let Some(growth) = dividend_growth {
        return finite(METRIC, yield_pct + growth);
    }
    let earnings = percent(METRIC, "earnings_growth", earnings_growth)?;
    finite(METRIC, yield_pct + earnings)
}

//! Screening thresholds.

use crate::sector::SectorClass;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected threshold configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    /// A threshold was negative or not a number
    #[error("{field} must be a non-negative number, got {value}")]
    Negative {
        /// Offending field
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// A lower bound exceeds its matching upper bound
    #[error("{low_field} ({low}) must not exceed {high_field} ({high})")]
    Inverted {
        /// Lower-bound field
        low_field: &'static str,
        /// Lower-bound value
        low: f64,
        /// Upper-bound field
        high_field: &'static str,
        /// Upper-bound value
        high: f64,
    },
}

/// Thresholds applied by the scorer.
///
/// Percentages are in percent (1.5 = 1.5%), multiples are plain ratios.
/// Every field has a default, so a partial JSON document only overrides the
/// fields it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningCriteria {
    /// Lowest acceptable dividend yield (%)
    pub min_dividend_yield: f64,
    /// Yield above which the payout looks like a trap (%)
    pub max_dividend_yield: f64,
    /// Years of dividend history needed for the growth figure
    pub min_dividend_years: u32,
    /// Payout ceiling for ordinary companies (%)
    pub max_payout_ratio: f64,
    /// Payout ceiling for REITs and utilities (%)
    pub max_payout_ratio_reit: f64,
    /// Payout above which the dividend is considered at risk (%)
    pub dividend_at_risk_payout: f64,
    /// Minimum EBIT / interest for ordinary companies
    pub min_interest_coverage: f64,
    /// Minimum EBIT / interest for REITs and utilities
    pub min_interest_coverage_reit: f64,
    /// Debt/equity ceiling (not applied to REITs and utilities)
    pub max_debt_to_equity: f64,
    /// Debt/equity below which the balance sheet earns full points
    pub strong_debt_to_equity: f64,
    /// ROIC earning full profitability points (%)
    pub min_roic: f64,
    /// ROE earning partial profitability points (%)
    pub min_roe: f64,
    /// ROE below which a flag is raised (%)
    pub low_roe: f64,
    /// P/E ceiling
    pub max_pe_ratio: f64,
    /// P/E below which valuation earns full points
    pub attractive_pe_ratio: f64,
    /// Five-year dividend growth earning points (%)
    pub min_dividend_growth: f64,
    /// Five-year dividend growth earning the bonus point (%)
    pub strong_dividend_growth: f64,
    /// Expected return earning full points (%)
    pub min_expected_return: f64,
    /// Expected return earning partial points (%)
    pub fair_expected_return: f64,
}

impl Default for ScreeningCriteria {
    fn default() -> Self {
        Self {
            min_dividend_yield: 1.5,
            max_dividend_yield: 8.0,
            min_dividend_years: 5,
            max_payout_ratio: 50.0,
            max_payout_ratio_reit: 85.0,
            dividend_at_risk_payout: 90.0,
            min_interest_coverage: 10.0,
            min_interest_coverage_reit: 4.0,
            max_debt_to_equity: 1.0,
            strong_debt_to_equity: 0.5,
            min_roic: 12.0,
            min_roe: 15.0,
            low_roe: 10.0,
            max_pe_ratio: 25.0,
            attractive_pe_ratio: 15.0,
            min_dividend_growth: 5.0,
            strong_dividend_growth: 10.0,
            min_expected_return: 8.0,
            fair_expected_return: 6.0,
        }
    }
}

impl ScreeningCriteria {
    /// Check that every threshold is non-negative and every range is ordered.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        let values = [
            ("min_dividend_yield", self.min_dividend_yield),
            ("max_dividend_yield", self.max_dividend_yield),
            ("max_payout_ratio", self.max_payout_ratio),
            ("max_payout_ratio_reit", self.max_payout_ratio_reit),
            ("dividend_at_risk_payout", self.dividend_at_risk_payout),
            ("min_interest_coverage", self.min_interest_coverage),
            ("min_interest_coverage_reit", self.min_interest_coverage_reit),
            ("max_debt_to_equity", self.max_debt_to_equity),
            ("strong_debt_to_equity", self.strong_debt_to_equity),
            ("min_roic", self.min_roic),
            ("min_roe", self.min_roe),
            ("low_roe", self.low_roe),
            ("max_pe_ratio", self.max_pe_ratio),
            ("attractive_pe_ratio", self.attractive_pe_ratio),
            ("min_dividend_growth", self.min_dividend_growth),
            ("strong_dividend_growth", self.strong_dividend_growth),
            ("min_expected_return", self.min_expected_return),
            ("fair_expected_return", self.fair_expected_return),
        ];
        for (field, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(CriteriaError::Negative { field, value });
            }
        }

        let ranges = [
            (
                ("min_dividend_yield", self.min_dividend_yield),
                ("max_dividend_yield", self.max_dividend_yield),
            ),
            (
                ("strong_debt_to_equity", self.strong_debt_to_equity),
                ("max_debt_to_equity", self.max_debt_to_equity),
            ),
            (
                ("attractive_pe_ratio", self.attractive_pe_ratio),
                ("max_pe_ratio", self.max_pe_ratio),
            ),
            (
                ("low_roe", self.low_roe),
                ("min_roe", self.min_roe),
            ),
            (
                ("min_dividend_growth", self.min_dividend_growth),
                ("strong_dividend_growth", self.strong_dividend_growth),
            ),
            (
                ("fair_expected_return", self.fair_expected_return),
                ("min_expected_return", self.min_expected_return),
            ),
        ];
        for ((low_field, low), (high_field, high)) in ranges {
            if low > high {
                return Err(CriteriaError::Inverted {
                    low_field,
                    low,
                    high_field,
                    high,
                });
            }
        }

        Ok(())
    }

    /// Payout ceiling for a sector class.
    pub const fn max_payout_for(&self, sector: SectorClass) -> f64 {
        if sector.uses_relaxed_thresholds() {
            self.max_payout_ratio_reit
        } else {
            self.max_payout_ratio
        }
    }

    /// Calendar years of dividend history needed to measure growth over
    /// `min_dividend_years` full years.
    pub const fn history_years(&self) -> u32 {
        self.min_dividend_years.saturating_add(1)
    }

    /// Interest coverage floor for a sector class.
    pub const fn min_coverage_for(&self, sector: SectorClass) -> f64 {
        if sector.uses_relaxed_thresholds() {
            self.min_interest_coverage_reit
        } else {
            self.min_interest_coverage
        }
    }
}

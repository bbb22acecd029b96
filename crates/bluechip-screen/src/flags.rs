//! Red flags raised while scoring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of concern a criterion raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagKind {
    /// Yield under the minimum
    LowYield,
    /// Yield over the maximum
    YieldTrap,
    /// No dividend yield could be derived
    NoDividendData,
    /// Payout over the sector ceiling
    HighPayout,
    /// Payout over the at-risk threshold
    DividendAtRisk,
    /// Negative five-year dividend growth
    DecliningDividends,
    /// EBIT / interest under the sector floor
    LowInterestCoverage,
    /// Debt/equity over the ceiling
    HighDebtToEquity,
    /// ROE under the low threshold
    LowReturnOnEquity,
    /// P/E over the ceiling
    HighPeRatio,
}

impl FlagKind {
    /// Critical flags force a REVIEW verdict whatever the score.
    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::YieldTrap | Self::DividendAtRisk)
    }

    /// Short label used as the message prefix.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LowYield => "Low dividend yield",
            Self::YieldTrap => "YIELD TRAP WARNING",
            Self::NoDividendData => "No dividend data",
            Self::HighPayout => "High payout ratio",
            Self::DividendAtRisk => "DIVIDEND AT RISK",
            Self::DecliningDividends => "Declining dividends",
            Self::LowInterestCoverage => "Low interest coverage",
            Self::HighDebtToEquity => "High debt/equity",
            Self::LowReturnOnEquity => "Low return on equity",
            Self::HighPeRatio => "High P/E ratio",
        }
    }
}

/// A raised flag with its rendered message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    /// What was flagged
    pub kind: FlagKind,
    /// Human-readable message, prefixed with the label
    pub message: String,
}

impl Flag {
    fn with_detail(kind: FlagKind, detail: impl fmt::Display) -> Self {
        Self {
            kind,
            message: format!("{}: {detail}", kind.label()),
        }
    }

    /// Yield below the minimum.
    pub fn low_yield(yield_pct: f64) -> Self {
        Self::with_detail(FlagKind::LowYield, format_args!("{yield_pct:.2}%"))
    }

    /// Yield above the maximum.
    pub fn yield_trap(yield_pct: f64) -> Self {
        Self::with_detail(
            FlagKind::YieldTrap,
            format_args!("{yield_pct:.2}% (unusually high)"),
        )
    }

    /// No yield available.
    pub fn no_dividend_data() -> Self {
        Self {
            kind: FlagKind::NoDividendData,
            message: FlagKind::NoDividendData.label().to_string(),
        }
    }

    /// Payout above the sector ceiling.
    pub fn high_payout(payout_pct: f64) -> Self {
        Self::with_detail(FlagKind::HighPayout, format_args!("{payout_pct:.1}%"))
    }

    /// Payout above the at-risk threshold.
    pub fn dividend_at_risk(payout_pct: f64) -> Self {
        Self::with_detail(
            FlagKind::DividendAtRisk,
            format_args!("Payout ratio {payout_pct:.1}%"),
        )
    }

    /// Shrinking dividend.
    pub fn declining_dividends(growth_pct: f64) -> Self {
        Self::with_detail(
            FlagKind::DecliningDividends,
            format_args!("{growth_pct:.1}%"),
        )
    }

    /// Coverage below the sector floor.
    pub fn low_interest_coverage(coverage: f64) -> Self {
        Self::with_detail(
            FlagKind::LowInterestCoverage,
            format_args!("{coverage:.1}x"),
        )
    }

    /// Leverage above the ceiling.
    pub fn high_debt_to_equity(ratio: f64) -> Self {
        Self::with_detail(FlagKind::HighDebtToEquity, format_args!("{ratio:.2}"))
    }

    /// ROE below the low threshold.
    pub fn low_return_on_equity(roe_pct: f64) -> Self {
        Self::with_detail(FlagKind::LowReturnOnEquity, format_args!("{roe_pct:.1}%"))
    }

    /// P/E above the ceiling.
    pub fn high_pe_ratio(pe: f64) -> Self {
        Self::with_detail(FlagKind::HighPeRatio, format_args!("{pe:.1}"))
    }

    /// Whether this flag forces a REVIEW verdict.
    pub const fn is_critical(&self) -> bool {
        self.kind.is_critical()
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

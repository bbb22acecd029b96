//! Payout Ratio Criterion
//!
//! A payout above `dividend_at_risk_payout` is critical and checked first.
//! Otherwise the payout must stay under the sector ceiling, which is higher
//! for REITs and utilities because they distribute most of their earnings.

use crate::criterion::{Context, Criterion, CriterionCategory, Evaluation};
use crate::flags::Flag;
use crate::metrics::DerivedMetrics;

/// Points for a payout under the sector ceiling.
pub const POINTS: u32 = 2;

/// Payout sustainability check
#[derive(Debug, Default, Clone, Copy)]
pub struct PayoutRatioCriterion;

impl Criterion for PayoutRatioCriterion {
    fn name(&self) -> &'static str {
        "payout_ratio"
    }

    fn category(&self) -> CriterionCategory {
        CriterionCategory::Dividend
    }

    fn max_points(&self) -> u32 {
        POINTS
    }

    fn evaluate(&self, metrics: &DerivedMetrics, ctx: &Context<'_>) -> Evaluation {
        let Some(payout) = metrics.payout_ratio else {
            return Evaluation::none();
        };

        if payout > ctx.criteria.dividend_at_risk_payout {
            Evaluation::flag(Flag::dividend_at_risk(payout))
        } else if payout > ctx.criteria.max_payout_for(ctx.sector) {
            Evaluation::flag(Flag::high_payout(payout))
        } else {
            Evaluation::award(POINTS)
        }
    }
}

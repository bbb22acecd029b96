//! Expected Return Criterion
//!
//! Dividend yield plus growth, a rough total-return estimate for a holder
//! who reinvests nothing and sees no multiple change.

use crate::criterion::{Context, Criterion, CriterionCategory, Evaluation};
use crate::metrics::DerivedMetrics;

/// Points for an expected return at or above `min_expected_return`.
pub const STRONG_POINTS: u32 = 2;

/// Points for an expected return at or above `fair_expected_return`.
pub const FAIR_POINTS: u32 = 1;

/// Expected return check
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpectedReturnCriterion;

impl Criterion for ExpectedReturnCriterion {
    fn name(&self) -> &'static str {
        "expected_return"
    }

    fn category(&self) -> CriterionCategory {
        CriterionCategory::Valuation
    }

    fn max_points(&self) -> u32 {
        STRONG_POINTS
    }

    fn evaluate(&self, metrics: &DerivedMetrics, ctx: &Context<'_>) -> Evaluation {
        match metrics.expected_return {
            Some(ret) if ret >= ctx.criteria.min_expected_return => {
                Evaluation::award(STRONG_POINTS)
            }
            Some(ret) if ret >= ctx.criteria.fair_expected_return => Evaluation::award(FAIR_POINTS),
            _ => Evaluation::none(),
        }
    }
}

//! Debt-to-Equity Criterion
//!
//! Measures financial leverage. Low leverage earns full points, moderate
//! leverage partial points. The ceiling is not applied to REITs and
//! utilities, whose business models run on debt.

use crate::criterion::{Context, Criterion, CriterionCategory, Evaluation};
use crate::flags::Flag;
use crate::metrics::DerivedMetrics;

/// Points for leverage under `strong_debt_to_equity`.
pub const STRONG_POINTS: u32 = 2;

/// Points for leverage within the ceiling.
pub const MODERATE_POINTS: u32 = 1;

/// Leverage check
#[derive(Debug, Default, Clone, Copy)]
pub struct DebtToEquityCriterion;

impl Criterion for DebtToEquityCriterion {
    fn name(&self) -> &'static str {
        "debt_to_equity"
    }

    fn category(&self) -> CriterionCategory {
        CriterionCategory::BalanceSheet
    }

    fn max_points(&self) -> u32 {
        STRONG_POINTS
    }

    fn evaluate(&self, metrics: &DerivedMetrics, ctx: &Context<'_>) -> Evaluation {
        let Some(de) = metrics.debt_to_equity else {
            return Evaluation::none();
        };

        if !ctx.sector.uses_relaxed_thresholds() && de > ctx.criteria.max_debt_to_equity {
            Evaluation::flag(Flag::high_debt_to_equity(de))
        } else if de < ctx.criteria.strong_debt_to_equity {
            Evaluation::award(STRONG_POINTS)
        } else {
            Evaluation::award(MODERATE_POINTS)
        }
    }
}

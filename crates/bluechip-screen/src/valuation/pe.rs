//! P/E Ratio Criterion
//!
//! Price over trailing earnings. Below `attractive_pe_ratio` earns full
//! points, up to `max_pe_ratio` partial points, above it a flag.

use crate::criterion::{Context, Criterion, CriterionCategory, Evaluation};
use crate::flags::Flag;
use crate::metrics::DerivedMetrics;

/// Points for an attractive P/E.
pub const ATTRACTIVE_POINTS: u32 = 2;

/// Points for an acceptable P/E.
pub const FAIR_POINTS: u32 = 1;

/// Trailing P/E check
#[derive(Debug, Default, Clone, Copy)]
pub struct PeRatioCriterion;

impl Criterion for PeRatioCriterion {
    fn name(&self) -> &'static str {
        "pe_ratio"
    }

    fn category(&self) -> CriterionCategory {
        CriterionCategory::Valuation
    }

    fn max_points(&self) -> u32 {
        ATTRACTIVE_POINTS
    }

    fn evaluate(&self, metrics: &DerivedMetrics, ctx: &Context<'_>) -> Evaluation {
        let Some(pe) = metrics.pe_ratio else {
            return Evaluation::none();
        };

        if pe > ctx.criteria.max_pe_ratio {
            Evaluation::flag(Flag::high_pe_ratio(pe))
        } else if pe < ctx.criteria.attractive_pe_ratio {
            Evaluation::award(ATTRACTIVE_POINTS)
        } else {
            Evaluation::award(FAIR_POINTS)
        }
    }
}

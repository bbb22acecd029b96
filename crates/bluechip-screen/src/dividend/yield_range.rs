//! Dividend Yield Criterion
//!
//! Awards points when the yield sits inside `[min_dividend_yield,
//! max_dividend_yield]`. Above the band the ticker is flagged as a possible
//! yield trap, which blocks a PASS.

use crate::criterion::{Context, Criterion, CriterionCategory, Evaluation};
use crate::flags::Flag;
use crate::metrics::DerivedMetrics;

/// Points for a yield inside the band.
pub const POINTS: u32 = 2;

/// Yield band check
#[derive(Debug, Default, Clone, Copy)]
pub struct DividendYieldCriterion;

impl Criterion for DividendYieldCriterion {
    fn name(&self) -> &'static str {
        "dividend_yield"
    }

    fn category(&self) -> CriterionCategory {
        CriterionCategory::Dividend
    }

    fn max_points(&self) -> u32 {
        POINTS
    }

    fn evaluate(&self, metrics: &DerivedMetrics, ctx: &Context<'_>) -> Evaluation {
        let Some(yield_pct) = metrics.dividend_yield else {
            return Evaluation::flag(Flag::no_dividend_data());
        };

        if yield_pct < ctx.criteria.min_dividend_yield {
            Evaluation::flag(Flag::low_yield(yield_pct))
        } else if yield_pct > ctx.criteria.max_dividend_yield {
            Evaluation::flag(Flag::yield_trap(yield_pct))
        } else {
            Evaluation::award(POINTS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::ScreeningCriteria;
    use crate::flags::FlagKind;
    use crate::sector::SectorClass;
    use rstest::rstest;

    fn evaluate(yield_pct: Option<f64>) -> Evaluation {
        let criteria = ScreeningCriteria::default();
        let metrics = DerivedMetrics {
            dividend_yield: yield_pct,
            ..Default::default()
        };
        DividendYieldCriterion.evaluate(&metrics, &Context::new(&criteria, SectorClass::General))
    }

    #[rstest]
    #[case(1.5)]
    #[case(3.2)]
    #[case(8.0)]
    fn test_inside_band_scores(#[case] yield_pct: f64) {
        assert_eq!(evaluate(Some(yield_pct)), Evaluation::award(2));
    }

    #[rstest]
    #[case(Some(0.9), FlagKind::LowYield)]
    #[case(Some(8.01), FlagKind::YieldTrap)]
    #[case(Some(15.0), FlagKind::YieldTrap)]
    #[case(None, FlagKind::NoDividendData)]
    fn test_outside_band_flags(#[case] yield_pct: Option<f64>, #[case] kind: FlagKind) {
        let eval = evaluate(yield_pct);
        assert_eq!(eval.points, 0);
        assert_eq!(eval.flags.len(), 1);
        assert_eq!(eval.flags[0].kind, kind);
    }

    #[test]
    fn test_yield_trap_is_critical() {
        let eval = evaluate(Some(9.5));
        assert!(eval.flags[0].is_critical());
        assert_eq!(eval.flags[0].message, "YIELD TRAP WARNING: 9.50% (unusually high)");
    }
}

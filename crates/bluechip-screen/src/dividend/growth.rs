//! Dividend Growth Criterion
//!
//! Five-year compound growth of yearly dividend totals. Growth above
//! `min_dividend_growth` earns points and growth above
//! `strong_dividend_growth` earns a bonus point. A shrinking dividend is
//! flagged; missing history simply earns nothing.

use crate::criterion::{Context, Criterion, CriterionCategory, Evaluation};
use crate::flags::Flag;
use crate::metrics::DerivedMetrics;

/// Points for growth above the minimum.
pub const POINTS: u32 = 2;

/// Extra point for strong growth.
pub const BONUS: u32 = 1;

/// Dividend growth check
#[derive(Debug, Default, Clone, Copy)]
pub struct DividendGrowthCriterion;

impl Criterion for DividendGrowthCriterion {
    fn name(&self) -> &'static str {
        "dividend_growth"
    }

    fn category(&self) -> CriterionCategory {
        CriterionCategory::Dividend
    }

    fn max_points(&self) -> u32 {
        POINTS + BONUS
    }

    fn evaluate(&self, metrics: &DerivedMetrics, ctx: &Context<'_>) -> Evaluation {
        let Some(growth) = metrics.dividend_growth_5yr else {
            return Evaluation::none();
        };

        if growth > ctx.criteria.strong_dividend_growth {
            Evaluation::award(POINTS + BONUS)
        } else if growth > ctx.criteria.min_dividend_growth {
            Evaluation::award(POINTS)
        } else if growth < 0.0 {
            Evaluation::flag(Flag::declining_dividends(growth))
        } else {
            Evaluation::none()
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

    fn evaluate(growth: Option<f64>) -> Evaluation {
        let criteria = ScreeningCriteria::default();
        let metrics = DerivedMetrics {
            dividend_growth_5yr: growth,
            ..Default::default()
        };
        DividendGrowthCriterion.evaluate(&metrics, &Context::new(&criteria, SectorClass::General))
    }

    #[rstest]
    #[case(Some(12.0), 3)]
    #[case(Some(10.0), 2)]
    #[case(Some(6.5), 2)]
    #[case(Some(5.0), 0)]
    #[case(Some(0.0), 0)]
    #[case(None, 0)]
    fn test_points(#[case] growth: Option<f64>, #[case] points: u32) {
        let eval = evaluate(growth);
        assert_eq!(eval.points, points);
        assert!(eval.flags.is_empty());
    }

    #[test]
    fn test_declining_dividends_flagged() {
        let eval = evaluate(Some(-3.4));
        assert_eq!(eval.points, 0);
        assert_eq!(eval.flags[0].kind, FlagKind::DecliningDividends);
        assert!(!eval.flags[0].is_critical());
    }

    #[test]
    fn test_max_points() {
        assert_eq!(DividendGrowthCriterion.max_points(), 3);
    }
}

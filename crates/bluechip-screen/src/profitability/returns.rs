//! Returns Criterion
//!
//! ROIC at or above `min_roic` earns full points. Failing that, ROE at or
//! above `min_roe` earns partial points, and ROE below `low_roe` is flagged.
//! ROIC here is the leverage-adjusted ROA estimate from
//! [`DerivedMetrics`], not a true NOPAT figure.

use crate::criterion::{Context, Criterion, CriterionCategory, Evaluation};
use crate::flags::Flag;
use crate::metrics::DerivedMetrics;

/// Points for ROIC at or above the minimum.
pub const ROIC_POINTS: u32 = 2;

/// Points for ROE at or above the minimum.
pub const ROE_POINTS: u32 = 1;

/// ROIC / ROE check
#[derive(Debug, Default, Clone, Copy)]
pub struct ReturnsCriterion;

impl Criterion for ReturnsCriterion {
    fn name(&self) -> &'static str {
        "returns"
    }

    fn category(&self) -> CriterionCategory {
        CriterionCategory::Profitability
    }

    fn max_points(&self) -> u32 {
        ROIC_POINTS
    }

    fn evaluate(&self, metrics: &DerivedMetrics, ctx: &Context<'_>) -> Evaluation {
        let criteria = ctx.criteria;
        if metrics.roic.is_some_and(|roic| roic >= criteria.min_roic) {
            return Evaluation::award(ROIC_POINTS);
        }

        match metrics.roe {
            Some(roe) if roe >= criteria.min_roe => Evaluation::award(ROE_POINTS),
            Some(roe) if roe < criteria.low_roe => Evaluation::flag(Flag::low_return_on_equity(roe)),
            _ => Evaluation::none(),
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

    fn evaluate(roic: Option<f64>, roe: Option<f64>) -> Evaluation {
        let criteria = ScreeningCriteria::default();
        let metrics = DerivedMetrics {
            roic,
            roe,
            ..Default::default()
        };
        ReturnsCriterion.evaluate(&metrics, &Context::new(&criteria, SectorClass::General))
    }

    #[rstest]
    #[case(Some(12.0), None, 2)]
    #[case(Some(20.0), Some(5.0), 2)]
    #[case(Some(9.0), Some(18.0), 1)]
    #[case(None, Some(15.0), 1)]
    #[case(Some(9.0), Some(12.0), 0)]
    #[case(None, None, 0)]
    fn test_points(#[case] roic: Option<f64>, #[case] roe: Option<f64>, #[case] points: u32) {
        let eval = evaluate(roic, roe);
        assert_eq!(eval.points, points);
        assert!(eval.flags.is_empty());
    }

    #[test]
    fn test_low_roe_flagged() {
        let eval = evaluate(Some(4.0), Some(7.5));
        assert_eq!(eval.points, 0);
        assert_eq!(eval.flags[0].kind, FlagKind::LowReturnOnEquity);
        assert_eq!(eval.flags[0].message, "Low return on equity: 7.5%");
    }
}

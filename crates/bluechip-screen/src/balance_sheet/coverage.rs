//! Interest Coverage Criterion
//!
//! EBIT over interest expense must reach the sector floor (10x by default,
//! 4x for REITs and utilities).

use crate::criterion::{Context, Criterion, CriterionCategory, Evaluation};
use crate::flags::Flag;
use crate::metrics::DerivedMetrics;

/// Points for adequate coverage.
pub const POINTS: u32 = 2;

/// Interest coverage check
#[derive(Debug, Default, Clone, Copy)]
pub struct InterestCoverageCriterion;

impl Criterion for InterestCoverageCriterion {
    fn name(&self) -> &'static str {
        "interest_coverage"
    }

    fn category(&self) -> CriterionCategory {
        CriterionCategory::BalanceSheet
    }

    fn max_points(&self) -> u32 {
        POINTS
    }

    fn evaluate(&self, metrics: &DerivedMetrics, ctx: &Context<'_>) -> Evaluation {
        let Some(coverage) = metrics.interest_coverage else {
            return Evaluation::none();
        };

        if coverage < ctx.criteria.min_coverage_for(ctx.sector) {
            Evaluation::flag(Flag::low_interest_coverage(coverage))
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

    #[rstest]
    #[case(15.0, SectorClass::General, 2)]
    #[case(10.0, SectorClass::General, 2)]
    #[case(6.0, SectorClass::General, 0)]
    #[case(6.0, SectorClass::Reit, 2)]
    #[case(6.0, SectorClass::Utility, 2)]
    #[case(3.0, SectorClass::Reit, 0)]
    fn test_sector_floor(#[case] coverage: f64, #[case] sector: SectorClass, #[case] points: u32) {
        let criteria = ScreeningCriteria::default();
        let metrics = DerivedMetrics {
            interest_coverage: Some(coverage),
            ..Default::default()
        };
        let eval = InterestCoverageCriterion.evaluate(&metrics, &Context::new(&criteria, sector));

        assert_eq!(eval.points, points);
        if points == 0 {
            assert_eq!(eval.flags[0].kind, FlagKind::LowInterestCoverage);
        } else {
            assert!(eval.flags.is_empty());
        }
    }

    #[test]
    fn test_unavailable() {
        let criteria = ScreeningCriteria::default();
        let eval = InterestCoverageCriterion.evaluate(
            &DerivedMetrics::default(),
            &Context::new(&criteria, SectorClass::General),
        );
        assert_eq!(eval, Evaluation::none());
    }
}

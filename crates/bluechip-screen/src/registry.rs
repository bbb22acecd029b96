//! Criterion Registry
//!
//! Builds the default rule set used by [`Scorer`](crate::Scorer), in
//! scoring order.

use crate::balance_sheet::{DebtToEquityCriterion, InterestCoverageCriterion};
use crate::criterion::Criterion;
use crate::dividend::{DividendGrowthCriterion, DividendYieldCriterion, PayoutRatioCriterion};
use crate::profitability::ReturnsCriterion;
use crate::valuation::{ExpectedReturnCriterion, PeRatioCriterion};

/// Instantiate every registered criterion, in scoring order
pub fn default_criteria() -> Vec<Box<dyn Criterion>> {
    vec![
        Box::new(DividendYieldCriterion),
        Box::new(PayoutRatioCriterion),
        Box::new(DividendGrowthCriterion),
        Box::new(InterestCoverageCriterion),
        Box::new(DebtToEquityCriterion),
        Box::new(ReturnsCriterion),
        Box::new(PeRatioCriterion),
        Box::new(ExpectedReturnCriterion),
    ]
}

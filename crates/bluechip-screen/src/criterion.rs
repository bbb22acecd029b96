//! The [`Criterion`] trait implemented by every scoring rule.

use crate::criteria::ScreeningCriteria;
use crate::flags::Flag;
use crate::metrics::DerivedMetrics;
use crate::sector::SectorClass;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Grouping used by the registry and the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum CriterionCategory {
    /// Yield, payout and growth
    #[display("Dividend")]
    Dividend,
    /// Interest coverage and leverage
    #[display("Balance Sheet")]
    BalanceSheet,
    /// ROIC and ROE
    #[display("Profitability")]
    Profitability,
    /// P/E and expected return
    #[display("Valuation")]
    Valuation,
}

/// Everything a criterion may consult besides the metrics.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Active thresholds
    pub criteria: &'a ScreeningCriteria,
    /// Threshold class of the ticker
    pub sector: SectorClass,
}

impl<'a> Context<'a> {
    /// Create a context.
    pub const fn new(criteria: &'a ScreeningCriteria, sector: SectorClass) -> Self {
        Self { criteria, sector }
    }
}

/// Outcome of one criterion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// Points awarded
    pub points: u32,
    /// Flags raised
    pub flags: Vec<Flag>,
}

impl Evaluation {
    /// No points, no flags. Used when the metric is unavailable.
    pub const fn none() -> Self {
        Self {
            points: 0,
            flags: Vec::new(),
        }
    }

    /// Award `points`.
    pub const fn award(points: u32) -> Self {
        Self {
            points,
            flags: Vec::new(),
        }
    }

    /// Raise a single flag with no points.
    pub fn flag(flag: Flag) -> Self {
        Self {
            points: 0,
            flags: vec![flag],
        }
    }
}

/// A threshold rule over [`DerivedMetrics`].
///
/// Implementations are stateless: every threshold comes from the
/// [`Context`], so the same rule instance can score any ticker.
pub trait Criterion: Debug + Send + Sync {
    /// Unique identifier.
    fn name(&self) -> &'static str;

    /// Category the rule belongs to.
    fn category(&self) -> CriterionCategory;

    /// Most points the rule can award.
    fn max_points(&self) -> u32;

    /// Score `metrics` under `ctx`.
    fn evaluate(&self, metrics: &DerivedMetrics, ctx: &Context<'_>) -> Evaluation;
}

//! Scoring engine.
//!
//! Runs every criterion against a ticker's [`DerivedMetrics`], sums the
//! points, caps the sum at [`MAX_SCORE`] and decides the [`Verdict`].

use crate::criteria::ScreeningCriteria;
use crate::criterion::{Context, Criterion, CriterionCategory};
use crate::flags::Flag;
use crate::metrics::DerivedMetrics;
use crate::registry::default_criteria;
use crate::sector::SectorClass;
use bluechip_data::TickerRecord;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Highest reportable score.
pub const MAX_SCORE: u32 = 15;

/// Lowest score that can pass.
pub const PASS_SCORE: u32 = 8;

/// Screen outcome for one ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Verdict {
    /// Score at or above [`PASS_SCORE`] and no critical flag
    #[display("PASS")]
    Pass,
    /// Anything else; needs a human look
    #[display("REVIEW")]
    Review,
}

impl Verdict {
    /// Decide from a capped score and the raised flags.
    pub fn decide(score: u32, flags: &[Flag]) -> Self {
        if score >= PASS_SCORE && !flags.iter().any(Flag::is_critical) {
            Self::Pass
        } else {
            Self::Review
        }
    }

    /// Whether this is [`Verdict::Pass`].
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Points one criterion contributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    /// Criterion name
    pub name: String,
    /// Criterion category
    pub category: CriterionCategory,
    /// Points awarded
    pub points: u32,
    /// Points available
    pub max_points: u32,
}

/// Scored ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Ticker symbol
    pub ticker: String,
    /// Threshold class the ticker was scored under
    pub sector: SectorClass,
    /// Capped score, `0..=MAX_SCORE`
    pub score: u32,
    /// PASS or REVIEW
    pub verdict: Verdict,
    /// Flags in criterion order
    pub flags: Vec<Flag>,
    /// Per-criterion points, in criterion order
    pub breakdown: Vec<CriterionScore>,
}

impl ScoreResult {
    /// Whether the ticker passed.
    pub const fn passed(&self) -> bool {
        self.verdict.is_pass()
    }

    /// Whether any flag forces REVIEW.
    pub fn has_critical_flag(&self) -> bool {
        self.flags.iter().any(Flag::is_critical)
    }

    /// Flags joined with `"; "`.
    pub fn flags_joined(&self) -> String {
        self.flags
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Applies a set of criteria under one set of thresholds.
#[derive(Debug)]
pub struct Scorer {
    criteria: ScreeningCriteria,
    rules: Vec<Box<dyn Criterion>>,
}

impl Scorer {
    /// Scorer with every registered criterion.
    pub fn new(criteria: ScreeningCriteria) -> Self {
        Self::with_rules(criteria, default_criteria())
    }

    /// Scorer with an explicit rule set.
    pub fn with_rules(criteria: ScreeningCriteria, rules: Vec<Box<dyn Criterion>>) -> Self {
        Self { criteria, rules }
    }

    /// Active thresholds.
    pub const fn criteria(&self) -> &ScreeningCriteria {
        &self.criteria
    }

    /// Score already-computed metrics.
    pub fn score(&self, ticker: &str, metrics: &DerivedMetrics, sector: SectorClass) -> ScoreResult {
        let ctx = Context::new(&self.criteria, sector);
        let mut raw = 0;
        let mut flags = Vec::new();
        let mut breakdown = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let eval = rule.evaluate(metrics, &ctx);
            let points = eval.points.min(rule.max_points());
            raw += points;
            flags.extend(eval.flags);
            breakdown.push(CriterionScore {
                name: rule.name().to_string(),
                category: rule.category(),
                points,
                max_points: rule.max_points(),
            });
        }

        let score = raw.min(MAX_SCORE);
        let verdict = Verdict::decide(score, &flags);
        debug!(ticker, raw, score, %verdict, flags = flags.len(), "scored");

        ScoreResult {
            ticker: ticker.to_string(),
            sector,
            score,
            verdict,
            flags,
            breakdown,
        }
    }

    /// Compute metrics for `record` and score them.
    ///
    /// `sector` overrides detection from the record's sector and industry.
    pub fn evaluate(
        &self,
        record: &TickerRecord,
        sector: Option<SectorClass>,
    ) -> (DerivedMetrics, ScoreResult) {
        let sector = sector.unwrap_or_else(|| {
            SectorClass::detect(record.sector.as_deref(), record.industry.as_deref())
        });
        let years = usize::try_from(self.criteria.min_dividend_years).unwrap_or(usize::MAX);
        let metrics = DerivedMetrics::compute_with_years(record, years);
        let result = self.score(&record.symbol, &metrics, sector);
        (metrics, result)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScreeningCriteria::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criterion::Evaluation;
    use crate::flags::FlagKind;
    use rstest::rstest;

    /// Everything comfortably inside every threshold.
    fn strong() -> DerivedMetrics {
        DerivedMetrics {
            dividend_yield: Some(3.0),
            payout_ratio: Some(40.0),
            dividend_growth_5yr: Some(12.0),
            interest_coverage: Some(20.0),
            debt_to_equity: Some(0.3),
            roic: Some(18.0),
            roe: Some(25.0),
            pe_ratio: Some(12.0),
            expected_return: Some(15.0),
            ..Default::default()
        }
    }

    fn score(metrics: &DerivedMetrics, sector: SectorClass) -> ScoreResult {
        Scorer::default().score("TEST", metrics, sector)
    }

    #[test]
    fn test_raw_maximum_is_capped() {
        let result = score(&strong(), SectorClass::General);
        let raw: u32 = result.breakdown.iter().map(|c| c.points).sum();
        assert_eq!(raw, 17);
        assert_eq!(result.score, MAX_SCORE);
        assert_eq!(result.verdict, Verdict::Pass);
        assert!(result.flags.is_empty());
    }

    #[test]
    fn test_empty_metrics_score_zero() {
        let result = score(&DerivedMetrics::default(), SectorClass::General);
        assert_eq!(result.score, 0);
        assert_eq!(result.verdict, Verdict::Review);
        assert_eq!(result.flags.len(), 1);
        assert_eq!(result.flags[0].kind, FlagKind::NoDividendData);
    }

    #[test]
    fn test_ten_points_without_flags_passes() {
        // yield 2 + payout 2 + coverage 2 + D/E 1 + ROE 1 + P/E 1 + expected 1
        let metrics = DerivedMetrics {
            dividend_yield: Some(3.0),
            payout_ratio: Some(40.0),
            interest_coverage: Some(12.0),
            debt_to_equity: Some(0.7),
            roe: Some(16.0),
            pe_ratio: Some(18.0),
            expected_return: Some(6.5),
            ..Default::default()
        };
        let result = score(&metrics, SectorClass::General);
        assert_eq!(result.score, 10);
        assert!(result.flags.is_empty());
        assert_eq!(result.verdict, Verdict::Pass);
        assert!(result.passed());
    }

    #[test]
    fn test_twelve_points_with_yield_trap_is_review() {
        // payout 2 + growth 3 + coverage 2 + D/E 2 + ROIC 2 + P/E 1, yield trapped
        let metrics = DerivedMetrics {
            dividend_yield: Some(9.2),
            payout_ratio: Some(45.0),
            dividend_growth_5yr: Some(11.0),
            interest_coverage: Some(15.0),
            debt_to_equity: Some(0.2),
            roic: Some(14.0),
            pe_ratio: Some(20.0),
            expected_return: Some(5.0),
            ..Default::default()
        };
        let result = score(&metrics, SectorClass::General);
        assert_eq!(result.score, 12);
        assert!(result.has_critical_flag());
        assert_eq!(result.flags[0].kind, FlagKind::YieldTrap);
        assert_eq!(result.verdict, Verdict::Review);
    }

    #[rstest]
    #[case(8.5)]
    #[case(12.0)]
    #[case(40.0)]
    fn test_high_yield_always_flagged(#[case] yield_pct: f64) {
        let metrics = DerivedMetrics {
            dividend_yield: Some(yield_pct),
            ..strong()
        };
        let result = score(&metrics, SectorClass::General);
        assert!(result.flags.iter().any(|f| f.kind == FlagKind::YieldTrap));
        assert_eq!(result.verdict, Verdict::Review);
    }

    #[test]
    fn test_dividend_at_risk_blocks_pass() {
        let metrics = DerivedMetrics {
            payout_ratio: Some(95.0),
            ..strong()
        };
        let result = score(&metrics, SectorClass::Reit);
        assert!(result.score >= PASS_SCORE);
        assert_eq!(result.verdict, Verdict::Review);
    }

    #[test]
    fn test_non_critical_flags_do_not_block_pass() {
        let metrics = DerivedMetrics {
            pe_ratio: Some(30.0),
            ..strong()
        };
        let result = score(&metrics, SectorClass::General);
        assert_eq!(result.flags.len(), 1);
        assert_eq!(result.verdict, Verdict::Pass);
    }

    #[test]
    fn test_reit_payout_threshold() {
        let metrics = DerivedMetrics {
            payout_ratio: Some(70.0),
            ..strong()
        };
        let reit = score(&metrics, SectorClass::Reit);
        let general = score(&metrics, SectorClass::General);

        let payout_points = |r: &ScoreResult| {
            r.breakdown
                .iter()
                .find(|c| c.name == "payout_ratio")
                .map(|c| c.points)
        };
        assert_eq!(payout_points(&reit), Some(2));
        assert_eq!(payout_points(&general), Some(0));
        assert!(general.flags.iter().any(|f| f.kind == FlagKind::HighPayout));
        assert!(reit.flags.is_empty());
    }

    #[test]
    fn test_missing_growth_contributes_nothing() {
        let metrics = DerivedMetrics {
            dividend_growth_5yr: None,
            ..strong()
        };
        let result = score(&metrics, SectorClass::General);
        let growth = result
            .breakdown
            .iter()
            .find(|c| c.name == "dividend_growth")
            .unwrap();
        assert_eq!(growth.points, 0);
        assert!(result.flags.is_empty());
    }

    #[test]
    fn test_score_bounded_for_arbitrary_metrics() {
        let samples = [-50.0, 0.0, 0.5, 4.0, 9.0, 14.0, 30.0, 120.0];
        for &a in &samples {
            for &b in &samples {
                let metrics = DerivedMetrics {
                    dividend_yield: Some(a),
                    payout_ratio: Some(b),
                    dividend_growth_5yr: Some(a),
                    interest_coverage: Some(b),
                    debt_to_equity: Some(a.abs() / 10.0),
                    roic: Some(b),
                    roe: Some(a),
                    pe_ratio: Some(b),
                    expected_return: Some(a + b),
                    ..Default::default()
                };
                let result = score(&metrics, SectorClass::General);
                assert!(result.score <= MAX_SCORE);
                assert_eq!(
                    result.verdict.is_pass(),
                    result.score >= PASS_SCORE && !result.has_critical_flag()
                );
            }
        }
    }

    #[derive(Debug)]
    struct Greedy;

    impl Criterion for Greedy {
        fn name(&self) -> &'static str {
            "greedy"
        }

        fn category(&self) -> CriterionCategory {
            CriterionCategory::Valuation
        }

        fn max_points(&self) -> u32 {
            1
        }

        fn evaluate(&self, _: &DerivedMetrics, _: &Context<'_>) -> Evaluation {
            Evaluation::award(50)
        }
    }

    #[test]
    fn test_rule_points_clamped_to_their_maximum() {
        let scorer = Scorer::with_rules(ScreeningCriteria::default(), vec![Box::new(Greedy)]);
        let result = scorer.score("X", &DerivedMetrics::default(), SectorClass::General);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_evaluate_detects_sector() {
        let mut record = TickerRecord::new("O");
        record.sector = Some("Real Estate".to_string());
        record.reported_payout_ratio = Some(0.70);

        let scorer = Scorer::default();
        let (metrics, detected) = scorer.evaluate(&record, None);
        assert_eq!(metrics.payout_ratio, Some(70.0));
        assert_eq!(detected.sector, SectorClass::Reit);
        assert!(detected.flags.iter().all(|f| f.kind != FlagKind::HighPayout));

        let (_, overridden) = scorer.evaluate(&record, Some(SectorClass::General));
        assert!(overridden.flags.iter().any(|f| f.kind == FlagKind::HighPayout));
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Pass.to_string(), "PASS");
        assert_eq!(Verdict::Review.to_string(), "REVIEW");
    }

    #[test]
    fn test_flags_joined() {
        let metrics = DerivedMetrics {
            dividend_yield: Some(1.0),
            pe_ratio: Some(30.0),
            ..Default::default()
        };
        let result = score(&metrics, SectorClass::General);
        assert_eq!(
            result.flags_joined(),
            "Low dividend yield: 1.00%; High P/E ratio: 30.0"
        );
    }
}

//! Per-ticker text rendering.
//!
//! Each renderer is a borrowed view implementing [`fmt::Display`], so the
//! caller decides where the text goes.

use bluechip_data::TickerRecord;
use bluechip_screen::{MAX_SCORE, ScreenOutcome, ScreenedTicker, ScreeningCriteria, SectorClass};
use std::fmt;

const RULE_WIDTH: usize = 60;

/// Rendering style for a screened ticker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportStyle {
    /// Full block with every metric
    #[default]
    Detailed,
    /// One line per ticker
    Brief,
}

/// Format an optional value with fixed decimals, or `N/A`.
pub fn format_value(value: Option<f64>, suffix: &str, decimals: usize) -> String {
    value.map_or_else(
        || "N/A".to_string(),
        |v| format!("{v:.decimals$}{suffix}"),
    )
}

/// Full report block for one ticker.
#[derive(Debug, Clone, Copy)]
pub struct DetailedReport<'a>(pub &'a ScreenedTicker);

impl DetailedReport<'_> {
    fn write_header(
        f: &mut fmt::Formatter<'_>,
        record: &TickerRecord,
        sector: SectorClass,
    ) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "{} - {}", record.symbol, record.display_name())?;
        if sector.uses_relaxed_thresholds() {
            writeln!(
                f,
                "Sector: {} ({} thresholds)",
                record.sector_or_unknown(),
                sector
            )
        } else {
            writeln!(f, "Sector: {}", record.sector_or_unknown())
        }
    }
}

impl fmt::Display for DetailedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ScreenedTicker {
            record,
            metrics: m,
            result,
        } = self.0;

        Self::write_header(f, record, result.sector)?;
        writeln!(
            f,
            "Score: {}/{MAX_SCORE} | Status: {}",
            result.score, result.verdict
        )?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;

        writeln!(f)?;
        writeln!(f, "Dividend Metrics:")?;
        writeln!(f, "  Dividend Yield:     {}", format_value(m.dividend_yield, "%", 2))?;
        writeln!(f, "  Payout Ratio:       {}", format_value(m.payout_ratio, "%", 1))?;
        let growth = m
            .dividend_growth_5yr
            .map_or_else(|| "unavailable".to_string(), |g| format!("{g:.1}%"));
        writeln!(f, "  5-Year Div Growth:  {growth}")?;

        writeln!(f)?;
        writeln!(f, "Balance Sheet:")?;
        writeln!(f, "  Interest Coverage:  {}", format_value(m.interest_coverage, "x", 1))?;
        writeln!(f, "  Debt/Equity:        {}", format_value(m.debt_to_equity, "", 2))?;
        writeln!(f, "  Current Ratio:      {}", format_value(m.current_ratio, "", 2))?;

        writeln!(f)?;
        writeln!(f, "Profitability:")?;
        writeln!(f, "  ROIC (est):         {}", format_value(m.roic, "%", 1))?;
        writeln!(f, "  ROE:                {}", format_value(m.roe, "%", 1))?;
        writeln!(f, "  Profit Margin:      {}", format_value(m.profit_margin, "%", 1))?;

        writeln!(f)?;
        writeln!(f, "Valuation:")?;
        writeln!(f, "  P/E Ratio:          {}", format_value(m.pe_ratio, "", 1))?;
        writeln!(f, "  Forward P/E:        {}", format_value(m.forward_pe, "", 1))?;
        writeln!(f, "  Price/Book:         {}", format_value(m.price_to_book, "", 2))?;

        writeln!(f)?;
        writeln!(f, "Expected Return:      {}", format_value(m.expected_return, "%", 1))?;
        writeln!(f, "  (Dividend Yield + Growth Rate)")?;

        if !result.flags.is_empty() {
            writeln!(f)?;
            writeln!(f, "Flags/Concerns:")?;
            for flag in &result.flags {
                writeln!(f, "  - {flag}")?;
            }
        }
        Ok(())
    }
}

/// One-line rendering: ticker, score, status, yield, P/E, expected return
/// and flag count.
#[derive(Debug, Clone, Copy)]
pub struct BriefLine<'a>(pub &'a ScreenedTicker);

impl fmt::Display for BriefLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ScreenedTicker {
            record,
            metrics,
            result,
        } = self.0;
        write!(
            f,
            "{:<6} {:>2}/{MAX_SCORE}  {:<6}  Yield {:>7}  P/E {:>6}  ExpRet {:>7}  Flags {}",
            record.symbol,
            result.score,
            result.verdict.to_string(),
            format_value(metrics.dividend_yield, "%", 2),
            format_value(metrics.pe_ratio, "", 1),
            format_value(metrics.expected_return, "%", 1),
            result.flags.len(),
        )
    }
}

/// `SYMBOL - SKIPPED: reason`
#[derive(Debug, Clone, Copy)]
pub struct SkippedLine<'a> {
    /// Requested symbol
    pub symbol: &'a str,
    /// Why it was skipped
    pub reason: &'a str,
}

impl fmt::Display for SkippedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - SKIPPED: {}", self.symbol, self.reason)
    }
}

/// Render one outcome in `style`.
pub fn render_outcome(outcome: &ScreenOutcome, style: ReportStyle) -> String {
    match (outcome, style) {
        (ScreenOutcome::Screened(t), ReportStyle::Detailed) => DetailedReport(t).to_string(),
        (ScreenOutcome::Screened(t), ReportStyle::Brief) => BriefLine(t).to_string(),
        (ScreenOutcome::Skipped { symbol, reason }, _) => SkippedLine { symbol, reason }.to_string(),
    }
}

/// Active thresholds, printed before a run.
#[derive(Debug, Clone, Copy)]
pub struct CriteriaBanner<'a>(pub &'a ScreeningCriteria);

impl fmt::Display for CriteriaBanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        writeln!(f, "Screening Criteria:")?;
        writeln!(
            f,
            "  Dividend Yield: {}% - {}%",
            c.min_dividend_yield, c.max_dividend_yield
        )?;
        writeln!(f, "  Max P/E Ratio: {}", c.max_pe_ratio)?;
        writeln!(f, "  Min ROIC: {}%", c.min_roic)?;
        writeln!(
            f,
            "  Max Payout Ratio: {}% (REIT/Utility {}%)",
            c.max_payout_ratio, c.max_payout_ratio_reit
        )?;
        writeln!(
            f,
            "  Min Interest Coverage: {}x (REIT/Utility {}x)",
            c.min_interest_coverage, c.min_interest_coverage_reit
        )?;
        write!(f, "  Max Debt/Equity: {}", c.max_debt_to_equity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluechip_screen::{DerivedMetrics, Scorer};
    use rstest::rstest;

    fn screened(metrics: DerivedMetrics) -> ScreenedTicker {
        let mut record = TickerRecord::new("KO");
        record.name = Some("The Coca-Cola Company".to_string());
        record.sector = Some("Consumer Defensive".to_string());
        let result = Scorer::default().score("KO", &metrics, SectorClass::General);
        ScreenedTicker {
            record,
            metrics,
            result,
        }
    }

    fn full_metrics() -> DerivedMetrics {
        DerivedMetrics {
            dividend_yield: Some(3.05),
            payout_ratio: Some(45.0),
            dividend_growth_5yr: Some(4.2),
            interest_coverage: Some(14.0),
            debt_to_equity: Some(0.42),
            current_ratio: Some(1.13),
            roic: Some(13.1),
            roe: Some(40.2),
            profit_margin: Some(22.7),
            pe_ratio: Some(23.9),
            forward_pe: Some(21.4),
            price_to_book: Some(10.5),
            expected_return: Some(7.26),
        }
    }

    #[rstest]
    #[case(Some(3.14159), "%", 2, "3.14%")]
    #[case(Some(12.0), "x", 1, "12.0x")]
    #[case(Some(0.5), "", 2, "0.50")]
    #[case(None, "%", 1, "N/A")]
    fn test_format_value(
        #[case] value: Option<f64>,
        #[case] suffix: &str,
        #[case] decimals: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(format_value(value, suffix, decimals), expected);
    }

    #[test]
    fn test_detailed_report_layout() {
        let ticker = screened(full_metrics());
        let text = DetailedReport(&ticker).to_string();

        assert!(text.contains("KO - The Coca-Cola Company\n"));
        assert!(text.contains("Sector: Consumer Defensive\n"));
        assert!(text.contains(&format!("Score: {}/15 | Status: PASS", ticker.result.score)));
        assert!(text.contains("  Dividend Yield:     3.05%\n"));
        assert!(text.contains("  5-Year Div Growth:  4.2%\n"));
        assert!(text.contains("  Debt/Equity:        0.42\n"));
        assert!(text.contains("  P/E Ratio:          23.9\n"));
        assert!(text.contains("Expected Return:      7.3%"));
        assert!(!text.contains("Flags/Concerns"));

        let sections: Vec<_> = ["Dividend Metrics:", "Balance Sheet:", "Profitability:", "Valuation:"]
            .iter()
            .map(|s| text.find(s).unwrap())
            .collect();
        assert!(sections.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_missing_growth_renders_unavailable() {
        let ticker = screened(DerivedMetrics {
            dividend_growth_5yr: None,
            ..full_metrics()
        });
        let text = DetailedReport(&ticker).to_string();
        assert!(text.contains("  5-Year Div Growth:  unavailable\n"));
    }

    #[test]
    fn test_flags_listed() {
        let ticker = screened(DerivedMetrics {
            dividend_yield: Some(9.5),
            ..full_metrics()
        });
        let text = DetailedReport(&ticker).to_string();
        assert!(text.contains("Status: REVIEW"));
        assert!(text.contains("Flags/Concerns:\n  - YIELD TRAP WARNING: 9.50% (unusually high)\n"));
    }

    #[test]
    fn test_relaxed_sector_noted() {
        let mut ticker = screened(full_metrics());
        ticker.record.sector = Some("Real Estate".to_string());
        ticker.result.sector = SectorClass::Reit;
        let text = DetailedReport(&ticker).to_string();
        assert!(text.contains("Sector: Real Estate (REIT thresholds)\n"));
    }

    #[test]
    fn test_brief_line() {
        let ticker = screened(full_metrics());
        let line = BriefLine(&ticker).to_string();
        assert!(line.starts_with("KO "));
        assert!(line.contains("PASS"));
        assert!(line.contains("3.05%"));
        assert!(line.contains("23.9"));
        assert!(line.contains("7.3%"));
        assert!(line.ends_with("Flags 0"));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_render_skipped() {
        let outcome = ScreenOutcome::skipped("ZZZZ", "symbol not found");
        assert_eq!(
            render_outcome(&outcome, ReportStyle::Detailed),
            "ZZZZ - SKIPPED: symbol not found"
        );
        assert_eq!(
            render_outcome(&outcome, ReportStyle::Brief),
            "ZZZZ - SKIPPED: symbol not found"
        );
    }

    #[test]
    fn test_criteria_banner() {
        let text = CriteriaBanner(&ScreeningCriteria::default()).to_string();
        assert!(text.starts_with("Screening Criteria:\n"));
        assert!(text.contains("Dividend Yield: 1.5% - 8%"));
        assert!(text.contains("Max P/E Ratio: 25"));
        assert!(text.contains("Min ROIC: 12%"));
        assert!(text.contains("Max Payout Ratio: 50% (REIT/Utility 85%)"));
        assert!(text.contains("Min Interest Coverage: 10x (REIT/Utility 4x)"));
    }
}

//! Run orchestration: screen, print, export, save.

use crate::error::Result;
use bluechip::data::FundamentalsProvider;
use bluechip::output::{CriteriaBanner, ReportStyle, Summary, export_outcomes, render_outcome};
use bluechip::screen::ScreeningCriteria;
use bluechip::{Screener, Watchlist};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::PathBuf;

/// Everything needed for one screening run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScreenPlan {
    /// Symbols in input order
    pub(crate) tickers: Vec<String>,
    /// Thresholds after all layers
    pub(crate) criteria: ScreeningCriteria,
    pub(crate) style: ReportStyle,
    /// CSV or JSON export target
    pub(crate) export: Option<PathBuf>,
    /// Where to save the ticker list
    pub(crate) save_watchlist: Option<PathBuf>,
}

/// Progress bar on stderr, or a hidden one.
pub(crate) fn progress_bar(len: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓░")),
        Err(e) => tracing::debug!(error = %e, "progress template rejected"),
    }
    pb
}

/// Screen `plan.tickers` and write reports and the summary to `out`.
///
/// Per-ticker failures show up as skipped lines; only export and watchlist
/// failures end in an error.
pub(crate) async fn execute<P: FundamentalsProvider>(
    plan: &ScreenPlan,
    screener: &Screener<P>,
    progress: &ProgressBar,
    out: &mut dyn Write,
) -> Result<Summary> {
    writeln!(out, "{}", CriteriaBanner(screener.criteria()))?;
    writeln!(out)?;

    progress.set_length(plan.tickers.len() as u64);
    let outcomes = screener
        .run_with_progress(&plan.tickers, |outcome| {
            progress.set_message(outcome.symbol().to_string());
            progress.inc(1);
        })
        .await;
    progress.finish_and_clear();

    for outcome in &outcomes {
        if plan.style == ReportStyle::Detailed {
            writeln!(out)?;
        }
        writeln!(out, "{}", render_outcome(outcome, plan.style))?;
    }

    let summary = Summary::from_outcomes(&outcomes);
    writeln!(out)?;
    writeln!(out, "{summary}")?;

    if let Some(path) = &plan.export {
        let format = export_outcomes(&outcomes, path)?;
        tracing::info!(path = %path.display(), ?format, rows = outcomes.len(), "exported results");
        writeln!(out, "\nResults exported to {}", path.display())?;
    }

    if let Some(path) = &plan.save_watchlist {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let watchlist = Watchlist::new(name, &plan.tickers);
        watchlist.write(path, true)?;
        writeln!(out, "Saved {} tickers to {}", watchlist.len(), path.display())?;
    }

    Ok(summary)
}

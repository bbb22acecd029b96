//! The screening pipeline.
//!
//! Fetch fundamentals for each ticker, derive metrics, score. A ticker whose
//! data cannot be fetched becomes [`ScreenOutcome::Skipped`] and never aborts
//! the run. Outcomes come back in input order regardless of how many fetches
//! run at once.
//!
//! Constituents of a registered [`DividendUniverse`] fill in the name and
//! sector when the provider leaves them out.

use crate::error::{Result, ScreenError};
use crate::universe::{Constituent, DividendUniverse};
use crate::watchlist::Watchlist;
use bluechip_data::{FundamentalsProvider, TickerRecord};
use bluechip_screen::{ScreenOutcome, Scorer, ScreeningCriteria, SectorClass};
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// One fetch at a time unless asked otherwise.
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Runs tickers through a provider and a [`Scorer`].
#[derive(Debug)]
pub struct Screener<P> {
    provider: P,
    scorer: Scorer,
    sector_overrides: HashMap<String, SectorClass>,
    known: HashMap<String, Constituent>,
    concurrency: usize,
}

impl<P: FundamentalsProvider> Screener<P> {
    /// Create a screener.
    ///
    /// Fails with [`ScreenError::Configuration`] when the criteria do not
    /// validate.
    pub fn new(provider: P, criteria: ScreeningCriteria) -> Result<Self> {
        criteria.validate()?;
        Ok(Self {
            provider,
            scorer: Scorer::new(criteria),
            sector_overrides: HashMap::new(),
            known: HashMap::new(),
            concurrency: DEFAULT_CONCURRENCY,
        })
    }

    /// Maximum number of in-flight fetches (at least one).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Force the sector class used for `symbol`.
    pub fn with_sector_override(mut self, symbol: &str, sector: SectorClass) -> Self {
        self.sector_overrides
            .insert(symbol.trim().to_uppercase(), sector);
        self
    }

    /// Use `universe` constituents as a fallback for name and sector.
    ///
    /// The first universe registered for a symbol wins.
    pub fn with_universe(mut self, universe: &DividendUniverse) -> Self {
        for constituent in universe.constituents() {
            self.known
                .entry(constituent.symbol.clone())
                .or_insert_with(|| constituent.clone());
        }
        self
    }

    /// Thresholds in use.
    pub const fn criteria(&self) -> &ScreeningCriteria {
        self.scorer.criteria()
    }

    /// Sector override for `symbol`, if any.
    pub fn sector_override(&self, symbol: &str) -> Option<SectorClass> {
        self.sector_overrides.get(&symbol.to_uppercase()).copied()
    }

    fn fill_known(&self, record: &mut TickerRecord) {
        let Some(known) = self.known.get(&record.symbol.to_uppercase()) else {
            return;
        };
        if record.name.is_none() {
            record.name = Some(known.name.clone());
        }
        if record.sector.is_none() {
            debug!(symbol = %record.symbol, sector = %known.sector, "sector from universe");
            record.sector = Some(known.sector.name().to_string());
        }
    }

    /// Screen a single ticker.
    pub async fn screen_one(&self, symbol: &str) -> ScreenOutcome {
        debug!(symbol, provider = self.provider.name(), "fetching fundamentals");
        match self.provider.fetch(symbol).await {
            Ok(mut record) => {
                self.fill_known(&mut record);
                let (metrics, result) = self
                    .scorer
                    .evaluate(&record, self.sector_override(symbol));
                info!(
                    symbol,
                    score = result.score,
                    verdict = %result.verdict,
                    flags = result.flags.len(),
                    "screened"
                );
                ScreenOutcome::screened(record, metrics, result)
            }
            Err(source) => {
                let loud = !source.is_unavailable();
                let err = ScreenError::data_unavailable(symbol, source);
                if loud {
                    warn!(symbol, error = %err, "skipping ticker");
                } else {
                    info!(symbol, error = %err, "skipping ticker");
                }
                ScreenOutcome::skipped(symbol, err.skip_reason())
            }
        }
    }

    /// Screen `symbols`, returning one outcome per unique symbol in input
    /// order.
    pub async fn run<S: AsRef<str>>(&self, symbols: &[S]) -> Vec<ScreenOutcome> {
        self.run_with_progress(symbols, |_| {}).await
    }

    /// Like [`Screener::run`], calling `on_done` as each outcome is ready.
    ///
    /// Symbols are upper-cased and de-duplicated first; blanks are dropped.
    pub async fn run_with_progress<S, F>(&self, symbols: &[S], mut on_done: F) -> Vec<ScreenOutcome>
    where
        S: AsRef<str>,
        F: FnMut(&ScreenOutcome),
    {
        let unique = Watchlist::new("", symbols).symbols;
        info!(
            tickers = unique.len(),
            concurrency = self.concurrency,
            "starting screen"
        );

        let mut outcomes = Vec::with_capacity(unique.len());
        let mut pending = stream::iter(unique.iter())
            .map(|symbol| self.screen_one(symbol))
            .buffered(self.concurrency);
        while let Some(outcome) = pending.next().await {
            on_done(&outcome);
            outcomes.push(outcome);
        }

        let skipped = outcomes.iter().filter(|o| o.as_screened().is_none()).count();
        info!(
            screened = outcomes.len() - skipped,
            skipped, "screen complete"
        );
        outcomes
    }
}

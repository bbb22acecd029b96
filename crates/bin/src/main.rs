//! bluechip CLI binary.
//!
//! Screens dividend stocks given on the command line, from a watchlist or
//! from a built-in universe. With no ticker source it falls back to a
//! guided interactive mode.

mod app;
mod config;
mod error;
mod interactive;
mod logging;
mod source;

use app::ScreenPlan;
use bluechip::output::{ExportFormat, ReportStyle};
use bluechip::{DEFAULT_CONCURRENCY, DividendUniverse, Screener, UniverseKind, Watchlist};
use clap::{ArgAction, Parser};
use config::CriteriaOverrides;
use error::{CliError, Result};
use interactive::TermPrompter;
use logging::LogFormat;
use source::DataSource;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Debug, Parser)]
#[command(name = "bluechip")]
#[command(about = "Blue-chip dividend stock screener", long_about = None)]
#[command(version)]
struct Cli {
    /// Stock tickers to analyze (e.g. JNJ PG KO)
    tickers: Vec<String>,

    /// Screen the Dividend Aristocrats
    #[arg(long)]
    aristocrats: bool,

    /// Screen the Dividend Kings
    #[arg(long)]
    kings: bool,

    /// Load tickers from a watchlist file
    #[arg(long, value_name = "FILE")]
    watchlist: Option<PathBuf>,

    /// Save the screened tickers to a watchlist file
    #[arg(long, value_name = "FILE")]
    save_watchlist: Option<PathBuf>,

    /// Minimum dividend yield % (default: 1.5)
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    min_yield: Option<f64>,

    /// Maximum P/E ratio (default: 25)
    #[arg(long, value_name = "RATIO", allow_negative_numbers = true)]
    max_pe: Option<f64>,

    /// Minimum ROIC % (default: 12)
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    min_roic: Option<f64>,

    /// One line per ticker instead of the full report
    #[arg(long)]
    brief: bool,

    /// Export results to a CSV file (or JSON with a .json extension)
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// JSON file with screening thresholds
    #[arg(long, value_name = "FILE")]
    criteria: Option<PathBuf>,

    /// Screen SYMBOL with REIT thresholds
    #[arg(long, value_name = "SYMBOL")]
    reit: Vec<String>,

    /// Force the sector of a ticker, e.g. NEE=Utilities
    #[arg(long, value_name = "SYMBOL=SECTOR")]
    sector: Vec<String>,

    /// Read fundamentals from a JSON data file instead of Yahoo Finance
    #[arg(long, value_name = "FILE")]
    data_file: Option<PathBuf>,

    /// Number of tickers fetched at once
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Cli {
    const fn overrides(&self) -> CriteriaOverrides {
        CriteriaOverrides {
            min_yield: self.min_yield,
            max_pe: self.max_pe,
            min_roic: self.min_roic,
        }
    }

    const fn style(&self) -> ReportStyle {
        if self.brief {
            ReportStyle::Brief
        } else {
            ReportStyle::Detailed
        }
    }
}

/// Where the tickers come from, highest precedence first.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TickerSource {
    Watchlist(PathBuf),
    Tickers(Vec<String>),
    Universe(UniverseKind),
}

impl TickerSource {
    fn from_cli(cli: &Cli) -> Option<Self> {
        if let Some(path) = &cli.watchlist {
            Some(Self::Watchlist(path.clone()))
        } else if !cli.tickers.is_empty() {
            Some(Self::Tickers(cli.tickers.clone()))
        } else if cli.kings {
            Some(Self::Universe(UniverseKind::Kings))
        } else if cli.aristocrats {
            Some(Self::Universe(UniverseKind::Aristocrats))
        } else {
            None
        }
    }

    fn resolve(&self, out: &mut dyn Write) -> Result<Vec<String>> {
        let tickers = match self {
            Self::Watchlist(path) => {
                let watchlist = Watchlist::read(path)?;
                writeln!(
                    out,
                    "Loaded {} tickers from watchlist: {}",
                    watchlist.len(),
                    path.display()
                )?;
                watchlist.symbols
            }
            Self::Tickers(tickers) => Watchlist::new("", tickers).symbols,
            Self::Universe(kind) => {
                writeln!(
                    out,
                    "Screening {} ({}+ years of consecutive dividend increases)",
                    kind.name(),
                    kind.min_years()
                )?;
                DividendUniverse::new(*kind).symbols()
            }
        };

        if tickers.is_empty() {
            return Err(CliError::config("no tickers to screen"));
        }
        Ok(tickers)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_format);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.concurrency == 0 {
        return Err(CliError::config("--concurrency must be at least 1"));
    }

    let mut criteria = config::load_criteria(cli.criteria.as_deref())?;
    cli.overrides().apply(&mut criteria);
    criteria.validate().map_err(bluechip::ScreenError::from)?;
    let sector_overrides = config::sector_overrides(&cli.reit, &cli.sector)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let plan = match TickerSource::from_cli(&cli) {
        Some(source) => ScreenPlan {
            tickers: source.resolve(&mut out)?,
            criteria,
            style: cli.style(),
            export: cli.export.clone(),
            save_watchlist: cli.save_watchlist.clone(),
        },
        None => {
            let mut prompter = TermPrompter::default();
            match interactive::run_wizard(&mut prompter, criteria, Path::new("."), &mut out)? {
                Some(plan) => plan,
                None => return Ok(()),
            }
        }
    };

    // reject a bad export extension before any fetching
    if let Some(path) = &plan.export {
        ExportFormat::from_path(path)?;
    }

    let provider = DataSource::open(cli.data_file.as_deref(), plan.criteria.history_years())?;
    let screener = Screener::new(provider, plan.criteria.clone())?
        .with_concurrency(cli.concurrency)
        .with_universe(&DividendUniverse::kings())
        .with_universe(&DividendUniverse::aristocrats());
    let screener = sector_overrides
        .iter()
        .fold(screener, |s, (symbol, class)| s.with_sector_override(symbol, *class));

    let progress = app::progress_bar(plan.tickers.len(), !cli.no_progress);
    app::execute(&plan, &screener, &progress, &mut out).await?;
    out.flush()?;
    Ok(())
}

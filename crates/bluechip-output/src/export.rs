//! CSV and JSON export of screen results.
//!
//! One [`ScreenRow`] per requested ticker, in input order. The CSV header is
//! fixed so files from different runs line up column for column.

use bluechip_screen::ScreenOutcome;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized CSV was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Pick a format from a file extension: `.json` gives pretty JSON,
    /// `.csv` or no extension gives CSV.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            None | Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::PrettyJson),
            Some(other) => Err(ExportError::InvalidFormat(format!(
                "unsupported export extension `.{other}` (use .csv or .json)"
            ))),
        }
    }
}

/// Flat export row. Field order is the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenRow {
    /// Ticker symbol.
    #[serde(rename = "Ticker")]
    pub ticker: String,

    /// Company name.
    #[serde(rename = "Name")]
    pub name: String,

    /// Provider sector.
    #[serde(rename = "Sector")]
    pub sector: String,

    /// PASS, REVIEW or SKIPPED.
    #[serde(rename = "Status")]
    pub status: String,

    /// Capped score, empty when skipped.
    #[serde(rename = "Score")]
    pub score: Option<u32>,

    /// Whether the ticker passed, empty when skipped.
    #[serde(rename = "Pass")]
    pub pass: Option<bool>,

    /// Dividend yield (%).
    #[serde(rename = "Div Yield")]
    pub dividend_yield: Option<f64>,

    /// Payout ratio (%).
    #[serde(rename = "Payout Ratio")]
    pub payout_ratio: Option<f64>,

    /// Five-year dividend growth (%).
    #[serde(rename = "Div Growth 5Y")]
    pub dividend_growth_5yr: Option<f64>,

    /// Interest coverage (x).
    #[serde(rename = "Interest Cov")]
    pub interest_coverage: Option<f64>,

    /// Debt to equity.
    #[serde(rename = "Debt/Equity")]
    pub debt_to_equity: Option<f64>,

    /// Current ratio.
    #[serde(rename = "Current Ratio")]
    pub current_ratio: Option<f64>,

    /// Estimated ROIC (%).
    #[serde(rename = "ROIC")]
    pub roic: Option<f64>,

    /// ROE (%).
    #[serde(rename = "ROE")]
    pub roe: Option<f64>,

    /// Profit margin (%).
    #[serde(rename = "Profit Margin")]
    pub profit_margin: Option<f64>,

    /// Trailing P/E.
    #[serde(rename = "P/E")]
    pub pe_ratio: Option<f64>,

    /// Forward P/E.
    #[serde(rename = "Forward P/E")]
    pub forward_pe: Option<f64>,

    /// Price to book.
    #[serde(rename = "Price/Book")]
    pub price_to_book: Option<f64>,

    /// Expected return (%).
    #[serde(rename = "Expected Return")]
    pub expected_return: Option<f64>,

    /// Flags joined with `"; "`.
    #[serde(rename = "Flags")]
    pub flags: String,

    /// Skip reason.
    #[serde(rename = "Error")]
    pub error: String,
}

impl ScreenRow {
    /// CSV header, in column order.
    pub const HEADER: [&'static str; 21] = [
        "Ticker",
        "Name",
        "Sector",
        "Status",
        "Score",
        "Pass",
        "Div Yield",
        "Payout Ratio",
        "Div Growth 5Y",
        "Interest Cov",
        "Debt/Equity",
        "Current Ratio",
        "ROIC",
        "ROE",
        "Profit Margin",
        "P/E",
        "Forward P/E",
        "Price/Book",
        "Expected Return",
        "Flags",
        "Error",
    ];

    /// One row per outcome, preserving order.
    pub fn from_outcomes(outcomes: &[ScreenOutcome]) -> Vec<Self> {
        outcomes.iter().map(Self::from).collect()
    }
}

impl From<&ScreenOutcome> for ScreenRow {
    fn from(outcome: &ScreenOutcome) -> Self {
        match outcome {
            ScreenOutcome::Screened(t) => {
                let m = &t.metrics;
                Self {
                    ticker: t.record.symbol.clone(),
                    name: t.record.display_name().to_string(),
                    sector: t.record.sector_or_unknown().to_string(),
                    status: t.result.verdict.to_string(),
                    score: Some(t.result.score),
                    pass: Some(t.result.passed()),
                    dividend_yield: m.dividend_yield,
                    payout_ratio: m.payout_ratio,
                    dividend_growth_5yr: m.dividend_growth_5yr,
                    interest_coverage: m.interest_coverage,
                    debt_to_equity: m.debt_to_equity,
                    current_ratio: m.current_ratio,
                    roic: m.roic,
                    roe: m.roe,
                    profit_margin: m.profit_margin,
                    pe_ratio: m.pe_ratio,
                    forward_pe: m.forward_pe,
                    price_to_book: m.price_to_book,
                    expected_return: m.expected_return,
                    flags: t.result.flags_joined(),
                    error: String::new(),
                }
            }
            ScreenOutcome::Skipped { symbol, reason } => Self {
                ticker: symbol.clone(),
                status: "SKIPPED".to_string(),
                error: reason.clone(),
                ..Default::default()
            },
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for [ScreenRow] {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                // header written explicitly so an empty run still has one
                let mut wtr = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(vec![]);
                wtr.write_record(ScreenRow::HEADER)?;
                for row in self {
                    wtr.serialize(row)?;
                }
                let data = String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)?;
                Ok(data)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<ScreenRow> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        self.as_slice().export_to_string(format)
    }
}

/// Write `outcomes` to `path`, choosing the format from its extension.
///
/// Returns the format used.
pub fn export_outcomes(outcomes: &[ScreenOutcome], path: &Path) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_path(path)?;
    ScreenRow::from_outcomes(outcomes).export_to_file(path, format)?;
    Ok(format)
}

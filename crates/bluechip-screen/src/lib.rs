#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/bluechip/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod balance_sheet;
pub mod criteria;
pub mod criterion;
pub mod dividend;
pub mod error;
pub mod flags;
pub mod metrics;
pub mod outcome;
pub mod profitability;
pub mod registry;
pub mod scoring;
pub mod sector;
pub mod valuation;

pub use criteria::{CriteriaError, ScreeningCriteria};
pub use criterion::{Context, Criterion, CriterionCategory, Evaluation};
pub use error::ComputationError;
pub use flags::{Flag, FlagKind};
pub use metrics::DerivedMetrics;
pub use outcome::{ScreenOutcome, ScreenedTicker};
pub use registry::default_criteria;
pub use scoring::{CriterionScore, MAX_SCORE, PASS_SCORE, ScoreResult, Scorer, Verdict};
pub use sector::{GicsSector, SectorClass};

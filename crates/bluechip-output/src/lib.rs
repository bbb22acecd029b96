#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/bluechip/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod report;
pub mod summary;

pub use export::{ExportError, ExportFormat, Exporter, ScreenRow, export_outcomes};
pub use report::{
    BriefLine, CriteriaBanner, DetailedReport, ReportStyle, SkippedLine, format_value,
    render_outcome,
};
pub use summary::{Summary, SummaryRow};

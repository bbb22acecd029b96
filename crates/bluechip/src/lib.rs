#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/bluechip/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod screener;
pub mod universe;
pub mod watchlist;

// Re-export the sub-crates
pub use bluechip_data as data;
pub use bluechip_output as output;
pub use bluechip_screen as screen;

pub use error::{Result, ScreenError, WatchlistError};
pub use screener::{DEFAULT_CONCURRENCY, Screener};
pub use screen::{ScreenOutcome, ScreenedTicker};
pub use universe::{Constituent, DividendUniverse, Universe, UniverseKind};
pub use watchlist::{Watchlist, list_watchlists};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

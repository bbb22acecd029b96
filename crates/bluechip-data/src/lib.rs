#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/bluechip/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod file;
pub mod memory;
pub mod provider;
pub mod record;
pub mod yahoo;

pub use error::{DataError, Result};
pub use file::JsonFileProvider;
pub use memory::MemoryProvider;
pub use provider::FundamentalsProvider;
pub use record::{DividendPayment, TickerRecord};
pub use yahoo::YahooFundamentalsProvider;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

//! The provider seam between the screener and its data source.

use crate::error::Result;
use crate::record::TickerRecord;
use std::future::Future;

/// A source of per-ticker fundamentals.
///
/// Implementations either return a complete-as-possible [`TickerRecord`] or
/// fail with a "symbol not found / data unavailable" [`crate::DataError`].
/// Missing individual fields are not errors.
pub trait FundamentalsProvider {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetch fundamentals for a single symbol.
    fn fetch(&self, symbol: &str) -> impl Future<Output = Result<TickerRecord>> + Send;
}

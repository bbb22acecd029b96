//! In-memory provider.

use crate::error::{DataError, Result};
use crate::provider::FundamentalsProvider;
use crate::record::TickerRecord;
use std::collections::HashMap;
use std::time::Duration;

/// Serves records from memory.
///
/// Symbols registered with [`MemoryProvider::with_failure`] fail with
/// [`DataError::MissingData`]; unknown symbols fail with
/// [`DataError::SymbolNotFound`].
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    records: HashMap<String, TickerRecord>,
    failures: HashMap<String, String>,
    delays: HashMap<String, Duration>,
}

impl MemoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider from a set of records, keyed by upper-cased symbol.
    pub fn from_records(records: impl IntoIterator<Item = TickerRecord>) -> Self {
        let mut provider = Self::new();
        for record in records {
            provider.insert(record);
        }
        provider
    }

    /// Add or replace a record.
    pub fn insert(&mut self, record: TickerRecord) {
        self.records.insert(record.symbol.to_uppercase(), record);
    }

    /// Make `symbol` fail with `reason`.
    pub fn with_failure(mut self, symbol: &str, reason: impl Into<String>) -> Self {
        self.failures.insert(symbol.to_uppercase(), reason.into());
        self
    }

    /// Delay the response for `symbol`, to exercise out-of-order completion.
    pub fn with_delay(mut self, symbol: &str, delay: Duration) -> Self {
        self.delays.insert(symbol.to_uppercase(), delay);
        self
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the provider holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn lookup(&self, symbol: &str) -> Result<TickerRecord> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }
        let key = symbol.to_uppercase();
        if let Some(reason) = self.failures.get(&key) {
            return Err(DataError::MissingData {
                symbol: key,
                reason: reason.clone(),
            });
        }
        self.records
            .get(&key)
            .cloned()
            .ok_or(DataError::SymbolNotFound(key))
    }
}

impl FundamentalsProvider for MemoryProvider {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch(&self, symbol: &str) -> Result<TickerRecord> {
        if let Some(delay) = self.delays.get(&symbol.to_uppercase()) {
            tokio::time::sleep(*delay).await;
        }
        self.lookup(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_known_symbol() {
        let provider = MemoryProvider::from_records([TickerRecord::new("KO")]);
        let record = provider.fetch("ko").await.unwrap();
        assert_eq!(record.symbol, "KO");
    }

    #[tokio::test]
    async fn test_unknown_symbol() {
        let provider = MemoryProvider::new();
        let result = provider.fetch("ZZZZ").await;
        assert!(matches!(result, Err(DataError::SymbolNotFound(s)) if s == "ZZZZ"));
    }

    #[tokio::test]
    async fn test_configured_failure() {
        let provider =
            MemoryProvider::from_records([TickerRecord::new("MMM")]).with_failure("MMM", "timeout");
        let err = provider.fetch("MMM").await.unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("timeout"));
    }
}

//! Offline provider backed by a JSON data file.
//!
//! The file holds a JSON array of [`TickerRecord`] objects. Fields that are
//! absent deserialize to `None`, so hand-written files only need the values
//! they care about:
//!
//! ```json
//! [
//!   {"symbol": "KO", "name": "Coca-Cola", "sector": "Consumer Defensive",
//!    "price": 60.0, "eps_ttm": 2.5, "dividend_per_share": 1.84}
//! ]
//! ```

use crate::error::Result;
use crate::memory::MemoryProvider;
use crate::provider::FundamentalsProvider;
use crate::record::TickerRecord;
use std::path::{Path, PathBuf};

/// Serves records loaded from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
    inner: MemoryProvider,
}

impl JsonFileProvider {
    /// Load all records from `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = std::fs::read_to_string(&path)?;
        let records: Vec<TickerRecord> = serde_json::from_str(&contents)?;
        tracing::info!(path = %path.display(), records = records.len(), "loaded data file");

        Ok(Self {
            path,
            inner: MemoryProvider::from_records(records),
        })
    }

    /// Path the records were loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records loaded.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the file held no records.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FundamentalsProvider for JsonFileProvider {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn fetch(&self, symbol: &str) -> Result<TickerRecord> {
        self.inner.fetch(symbol).await
    }
}

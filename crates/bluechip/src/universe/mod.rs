//! Built-in ticker universes.
//!
//! Fixed, ordered lists of long-running dividend growers that can be
//! screened without a watchlist.

pub mod dividend;

pub use dividend::{Constituent, DividendUniverse, UniverseKind};

/// Trait for stock universes.
pub trait Universe {
    /// Human-readable universe name.
    fn name(&self) -> &str;

    /// Get all symbols in the universe, in display order.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe.
    fn contains(&self, symbol: &str) -> bool {
        self.symbols().iter().any(|s| s.eq_ignore_ascii_case(symbol))
    }

    /// Get the number of constituents.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for DividendUniverse {
    fn name(&self) -> &str {
        self.kind().name()
    }

    fn symbols(&self) -> Vec<String> {
        self.symbols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_trait() {
        let universe = DividendUniverse::aristocrats();

        assert_eq!(Universe::name(&universe), "Dividend Aristocrats");
        assert!(universe.contains("JNJ"));
        assert!(universe.contains("jnj"));
        assert!(!universe.contains("NOTREAL"));
        assert_eq!(universe.size(), 20);
    }
}

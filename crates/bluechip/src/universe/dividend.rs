//! Dividend Aristocrats and Dividend Kings.
//!
//! Aristocrats have raised their dividend for at least 25 consecutive
//! years, Kings for at least 50. Both lists are a representative subset,
//! not the full index membership.

use bluechip_screen::GicsSector;

/// Which built-in list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniverseKind {
    /// 25+ years of dividend increases
    Aristocrats,
    /// 50+ years of dividend increases
    Kings,
}

impl UniverseKind {
    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Aristocrats => "Dividend Aristocrats",
            Self::Kings => "Dividend Kings",
        }
    }

    /// Minimum consecutive years of increases.
    pub const fn min_years(&self) -> u32 {
        match self {
            Self::Aristocrats => 25,
            Self::Kings => 50,
        }
    }
}

/// Universe constituent with GICS sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constituent {
    /// Stock symbol.
    pub symbol: String,
    /// Company name.
    pub name: String,
    /// GICS sector.
    pub sector: GicsSector,
}

impl Constituent {
    /// Create a new constituent.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, sector: GicsSector) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            sector,
        }
    }
}

/// A built-in dividend-growth universe.
#[derive(Debug, Clone)]
pub struct DividendUniverse {
    kind: UniverseKind,
    constituents: Vec<Constituent>,
}

impl DividendUniverse {
    /// Build the universe for `kind`.
    pub fn new(kind: UniverseKind) -> Self {
        let constituents = match kind {
            UniverseKind::Aristocrats => Self::aristocrat_constituents(),
            UniverseKind::Kings => Self::king_constituents(),
        };
        Self { kind, constituents }
    }

    /// Dividend Aristocrats.
    pub fn aristocrats() -> Self {
        Self::new(UniverseKind::Aristocrats)
    }

    /// Dividend Kings.
    pub fn kings() -> Self {
        Self::new(UniverseKind::Kings)
    }

    /// Which list this is.
    pub const fn kind(&self) -> UniverseKind {
        self.kind
    }

    /// Get all constituents.
    pub fn constituents(&self) -> &[Constituent] {
        &self.constituents
    }

    /// Get all symbols, in list order.
    pub fn symbols(&self) -> Vec<String> {
        self.constituents.iter().map(|c| c.symbol.clone()).collect()
    }

    fn aristocrat_constituents() -> Vec<Constituent> {
        use GicsSector::*;
        vec![
            Constituent::new("JNJ", "Johnson & Johnson", HealthCare),
            Constituent::new("PG", "Procter & Gamble", ConsumerStaples),
            Constituent::new("KO", "Coca-Cola", ConsumerStaples),
            Constituent::new("PEP", "PepsiCo", ConsumerStaples),
            Constituent::new("MMM", "3M", Industrials),
            Constituent::new("ABT", "Abbott Laboratories", HealthCare),
            Constituent::new("ABBV", "AbbVie", HealthCare),
            Constituent::new("MCD", "McDonald's", ConsumerDiscretionary),
            Constituent::new("WMT", "Walmart", ConsumerStaples),
            Constituent::new("XOM", "Exxon Mobil", Energy),
            Constituent::new("CVX", "Chevron", Energy),
            Constituent::new("HD", "Home Depot", ConsumerDiscretionary),
            Constituent::new("LOW", "Lowe's", ConsumerDiscretionary),
            Constituent::new("TGT", "Target", ConsumerStaples),
            Constituent::new("CL", "Colgate-Palmolive", ConsumerStaples),
            Constituent::new("GPC", "Genuine Parts", ConsumerDiscretionary),
            Constituent::new("SWK", "Stanley Black & Decker", Industrials),
            Constituent::new("EMR", "Emerson Electric", Industrials),
            Constituent::new("ITW", "Illinois Tool Works", Industrials),
            Constituent::new("ADP", "Automatic Data Processing", Industrials),
        ]
    }

    fn king_constituents() -> Vec<Constituent> {
        use GicsSector::*;
        vec![
            Constituent::new("PG", "Procter & Gamble", ConsumerStaples),
            Constituent::new("KO", "Coca-Cola", ConsumerStaples),
            Constituent::new("JNJ", "Johnson & Johnson", HealthCare),
            Constituent::new("CL", "Colgate-Palmolive", ConsumerStaples),
            Constituent::new("EMR", "Emerson Electric", Industrials),
            Constituent::new("MMM", "3M", Industrials),
            Constituent::new("GPC", "Genuine Parts", ConsumerDiscretionary),
            Constituent::new("DOV", "Dover Corporation", Industrials),
            Constituent::new("NWN", "Northwest Natural", Utilities),
            Constituent::new("PH", "Parker Hannifin", Industrials),
        ]
    }
}

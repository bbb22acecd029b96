//! Sector classification.
//!
//! Providers report sectors as free text ("Real Estate", "Consumer
//! Defensive", "Financial Services", ...). The scorer only needs to know
//! whether a ticker is a REIT, a utility, or anything else, because REITs
//! and utilities carry structurally higher payout and leverage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// GICS Level 1 sectors (11 sectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GicsSector {
    /// Information Technology
    InformationTechnology,

    /// Health Care
    HealthCare,

    /// Financials
    Financials,

    /// Consumer Discretionary
    ConsumerDiscretionary,

    /// Communication Services
    CommunicationServices,

    /// Industrials
    Industrials,

    /// Consumer Staples
    ConsumerStaples,

    /// Energy
    Energy,

    /// Utilities
    Utilities,

    /// Real Estate
    RealEstate,

    /// Materials
    Materials,
}

impl GicsSector {
    /// Returns the full sector name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InformationTechnology => "Information Technology",
            Self::HealthCare => "Health Care",
            Self::Financials => "Financials",
            Self::ConsumerDiscretionary => "Consumer Discretionary",
            Self::CommunicationServices => "Communication Services",
            Self::Industrials => "Industrials",
            Self::ConsumerStaples => "Consumer Staples",
            Self::Energy => "Energy",
            Self::Utilities => "Utilities",
            Self::RealEstate => "Real Estate",
            Self::Materials => "Materials",
        }
    }

    /// Parse a sector name.
    ///
    /// Accepts GICS names, Yahoo Finance's own sector names ("Healthcare",
    /// "Consumer Defensive", "Basic Materials", ...) and a few short
    /// aliases. Case and whitespace are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '&' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        let sector = match normalized.as_str() {
            "informationtechnology" | "technology" | "it" | "tech" => Self::InformationTechnology,
            "healthcare" | "health" => Self::HealthCare,
            "financials" | "financialservices" | "finance" => Self::Financials,
            "consumerdiscretionary" | "consumercyclical" | "discretionary" => {
                Self::ConsumerDiscretionary
            }
            "communicationservices" | "communication" | "comms" => Self::CommunicationServices,
            "industrials" | "industrial" => Self::Industrials,
            "consumerstaples" | "consumerdefensive" | "staples" => Self::ConsumerStaples,
            "energy" => Self::Energy,
            "utilities" | "utility" => Self::Utilities,
            "realestate" | "estate" | "reit" | "reits" => Self::RealEstate,
            "materials" | "basicmaterials" => Self::Materials,
            _ => return None,
        };

        Some(sector)
    }
}

impl fmt::Display for GicsSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Threshold class a ticker is screened under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectorClass {
    /// Real estate investment trust
    Reit,
    /// Regulated utility
    Utility,
    /// Everything else
    #[default]
    General,
}

impl SectorClass {
    /// Classify from provider-reported sector and industry text.
    ///
    /// Any mention of "REIT" in either field wins; otherwise the sector name
    /// is mapped through [`GicsSector::from_name`].
    pub fn detect(sector: Option<&str>, industry: Option<&str>) -> Self {
        let mentions_reit = [sector, industry]
            .into_iter()
            .flatten()
            .any(|s| s.to_uppercase().contains("REIT"));
        if mentions_reit {
            return Self::Reit;
        }

        match sector.and_then(GicsSector::from_name) {
            Some(GicsSector::RealEstate) => Self::Reit,
            Some(GicsSector::Utilities) => Self::Utility,
            _ => Self::General,
        }
    }

    /// Parse a user-supplied sector override ("REIT", "utility", a sector name).
    pub fn from_name(name: &str) -> Option<Self> {
        if name.trim().eq_ignore_ascii_case("general") || name.trim().eq_ignore_ascii_case("other")
        {
            return Some(Self::General);
        }
        GicsSector::from_name(name).map(|sector| match sector {
            GicsSector::RealEstate => Self::Reit,
            GicsSector::Utilities => Self::Utility,
            _ => Self::General,
        })
    }

    /// Whether the relaxed payout / coverage / leverage thresholds apply.
    pub const fn uses_relaxed_thresholds(&self) -> bool {
        matches!(self, Self::Reit | Self::Utility)
    }

    /// Short label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Reit => "REIT",
            Self::Utility => "Utility",
            Self::General => "General",
        }
    }
}

impl fmt::Display for SectorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Dividend criteria - is the dividend sized sensibly and growing?
//!
//! Yield is checked against a band rather than a floor: a yield far above
//! the market usually means the price has collapsed ahead of a cut.

pub mod growth;
pub mod payout;
pub mod yield_range;

pub use growth::DividendGrowthCriterion;
pub use payout::PayoutRatioCriterion;
pub use yield_range::DividendYieldCriterion;

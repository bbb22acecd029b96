//! Balance sheet criteria - can the company carry its debt?

pub mod coverage;
pub mod leverage;

pub use coverage::InterestCoverageCriterion;
pub use leverage::DebtToEquityCriterion;

//! Profitability criteria - does the business earn its cost of capital?

pub mod returns;

pub use returns::ReturnsCriterion;

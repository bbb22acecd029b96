//! Valuation criteria - is the price reasonable for what is being bought?

pub mod expected_return;
pub mod pe;

pub use expected_return::ExpectedReturnCriterion;
pub use pe::PeRatioCriterion;

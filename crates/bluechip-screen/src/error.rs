//! Errors raised while deriving a single metric.

use thiserror::Error;

/// Why a derived metric could not be computed.
///
/// These never abort a screen: the metric calculator logs them and marks
/// the metric unavailable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    /// A required input field was absent
    #[error("{metric}: missing input `{input}`")]
    MissingInput {
        /// Metric being computed
        metric: &'static str,
        /// Input field that was missing
        input: &'static str,
    },

    /// The denominator was zero
    #[error("{metric}: division by zero")]
    DivisionByZero {
        /// Metric being computed
        metric: &'static str,
    },

    /// The denominator must be strictly positive for the ratio to mean anything
    #[error("{metric}: non-positive denominator {value}")]
    NonPositiveDenominator {
        /// Metric being computed
        metric: &'static str,
        /// Offending denominator
        value: f64,
    },

    /// Result was NaN or infinite
    #[error("{metric}: non-finite result")]
    NonFinite {
        /// Metric being computed
        metric: &'static str,
    },

    /// Not enough annual history
    #[error("{metric}: {years} year(s) of history, {required} required")]
    InsufficientHistory {
        /// Metric being computed
        metric: &'static str,
        /// Years available
        years: usize,
        /// Years required
        required: usize,
    },
}

impl ComputationError {
    /// Name of the metric that failed.
    pub const fn metric(&self) -> &'static str {
        match self {
            Self::MissingInput { metric, .. }
            | Self::DivisionByZero { metric }
            | Self::NonPositiveDenominator { metric, .. }
            | Self::NonFinite { metric }
            | Self::InsufficientHistory { metric, .. } => metric,
        }
    }
}

//! Unified error type for the commission engine
//!
//! The engine favors silent, well-defined defaulting: a missing budget,
//! a missing sales entry or an unparseable record date is a normal
//! business condition and produces zeros, never an error. The variants
//! below are the contract violations that must fail loudly instead,
//! because they indicate a data-model mismatch the caller has to fix
//! upstream.

use thiserror::Error;

/// Contract violations surfaced to the caller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Role tag outside the closed set (manager/advisor/cashier/logistics/online-manager)
    #[error("Unknown role tag: {0}")]
    UnknownRole(String),

    /// Month label the calendar primitives cannot parse (expected "MMM YYYY")
    #[error("Invalid month label: {0}")]
    InvalidMonthLabel(String),

    /// Allocation policy percentage outside [0, 100]
    #[error("Invalid allocation policy: {0}")]
    InvalidPolicy(String),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

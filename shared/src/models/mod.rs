//! Data models
//!
//! Shared between the engine and the UI layer. Input records mirror the
//! documents the remote record store returns (dates are `YYYY-MM-DD`
//! strings, role tags are free-form); result objects keep the legacy
//! Spanish JSON keys the frontend renders.

pub mod budget;
pub mod commission;
pub mod role;
pub mod sales;
pub mod staff;

// Re-exports
pub use budget::*;
pub use commission::*;
pub use role::*;
pub use sales::*;
pub use staff::*;

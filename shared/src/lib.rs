//! Shared types for the commissions module
//!
//! Input records as handed over by the remote record store, the result
//! objects rendered by the UI layer, and the unified error type. No
//! computation lives here; the engine is in `comision-engine`.

pub mod error;
pub mod models;

// Re-exports
pub use error::{EngineError, EngineResult};
pub use serde::{Deserialize, Serialize};

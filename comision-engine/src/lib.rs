//! Commission & Budget Calculation Engine
//!
//! Pure, synchronous computation over record collections supplied
//! wholesale by the caller: budgets, staff presence and daily sales,
//! loosely joined by store and date. No I/O, no persisted state, no
//! mutation of inputs; every call builds its results from scratch, so a
//! caller re-invokes whenever fresh data arrives.
//!
//! Entry points:
//! - [`store_day::store_day_summary`] — one store on one date
//! - [`month::month_summary`] — one month across all stores

pub mod allocator;
pub mod calendar;
pub mod money;
pub mod month;
pub mod sales;
pub mod store_day;
pub mod strategies;
pub mod tiers;

mod config;

pub use allocator::{Allocation, AllocationPolicy, PolicyKind, RolePolicy};
pub use config::EngineConfig;
pub use month::month_summary;
pub use store_day::store_day_summary;

// The data model lives in `shared`; re-export for one-import consumers.
pub use shared::models;
pub use shared::{EngineError, EngineResult};

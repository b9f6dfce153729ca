//! Budget Models (presupuestos)

use serde::{Deserialize, Serialize};

/// A store's assigned budget for one calendar date.
///
/// Read-only input produced upstream. The amount only seeds the monetary
/// envelope before allocation; the authoritative store budget on a
/// summary is always recomputed from the employee-level budgets.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BudgetRecord {
    /// Store name (join key against staff and sales)
    #[serde(rename = "tienda")]
    pub store: String,
    /// Store id (join key against daily assignments, sort key for summaries)
    #[serde(rename = "tienda_id")]
    pub store_id: String,
    #[serde(rename = "empresa")]
    pub company: String,
    /// Business date (YYYY-MM-DD)
    #[serde(rename = "fecha")]
    pub date: String,
    /// Total budget amount for the date
    #[serde(rename = "presupuesto")]
    pub budget: f64,
}

/// Explicit per-employee daily budget override.
///
/// When present for an employee+store+date it takes precedence over the
/// computed allocation and bypasses the allocator entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DailyBudgetAssignment {
    #[serde(rename = "empleado_id")]
    pub employee_id: String,
    #[serde(rename = "tienda_id")]
    pub store_id: String,
    /// Business date (YYYY-MM-DD)
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "presupuesto")]
    pub budget: f64,
}

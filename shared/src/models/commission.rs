//! Commission Result Models (comisiones)
//!
//! Plain value objects, created fresh on every calculation call and never
//! mutated after construction. Field names serialize to the legacy
//! Spanish keys the payroll UI renders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::role::Role;

/// Projection of the next achievable commission tier.
///
/// Suppressed (the `Option` on the result is `None`) when the employee is
/// already at the top tier or the projected figures are not meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextTier {
    /// Rate at the next tier (fraction, e.g. 0.007)
    #[serde(rename = "porcentaje")]
    pub rate: f64,
    /// Budget the current sales would satisfy at exactly that tier
    #[serde(rename = "presupuesto_proyectado")]
    pub projected_budget: f64,
    /// Sales needed at the current budget to reach that tier
    #[serde(rename = "venta_proyectada")]
    pub projected_sales: f64,
    /// Commission amount at the hypothetical tier
    #[serde(rename = "comision_proyectada")]
    pub projected_commission: f64,
}

/// Computed result for one employee in one context (day or month).
///
/// For manager and collective roles `compliance`, `rate`,
/// `commission_base` and `commission` derive from store-wide figures,
/// while `sales`/`budget` stay the employee's own registered figures and
/// are display-only. Keeping both on the same object is deliberate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCommission {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "documento")]
    pub document_id: String,
    #[serde(rename = "cargo")]
    pub role: Role,
    #[serde(rename = "tienda")]
    pub store: String,
    /// Business date, or the month label for monthly rollups
    #[serde(rename = "fecha")]
    pub date: String,
    /// Individual budget (display field for store-driven roles)
    #[serde(rename = "presupuesto")]
    pub budget: f64,
    /// Individual sales (display field for store-driven roles)
    #[serde(rename = "ventas")]
    pub sales: f64,
    /// Compliance % driving the rate (4 decimal places)
    #[serde(rename = "cumplimiento")]
    pub compliance: f64,
    /// Commission rate (fraction, one of 0 / 0.0035 / 0.005 / 0.007 / 0.01)
    #[serde(rename = "porcentaje_comision")]
    pub rate: f64,
    /// After-tax sales base the commission was computed on
    #[serde(rename = "base_comision")]
    pub commission_base: f64,
    /// Commission amount, rounded to currency precision
    #[serde(rename = "comision")]
    pub commission: f64,
    /// Days worked (1 for single-day calls, overwritten by monthly rollups)
    #[serde(rename = "dias_laborados")]
    pub days_worked: u32,
    #[serde(rename = "siguiente_nivel", skip_serializing_if = "Option::is_none")]
    pub next_tier: Option<NextTier>,
}

/// Aggregated result for one store (one date, or rolled up over a month).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSummary {
    #[serde(rename = "tienda")]
    pub store: String,
    #[serde(rename = "tienda_id")]
    pub store_id: String,
    #[serde(rename = "empresa")]
    pub company: String,
    /// Business date, or the month label for monthly rollups
    #[serde(rename = "fecha")]
    pub date: String,
    /// Authoritative store budget: always the sum of the employee budgets,
    /// never the raw BudgetRecord amount
    #[serde(rename = "presupuesto_tienda")]
    pub store_budget: f64,
    #[serde(rename = "venta_tienda")]
    pub store_sales: f64,
    #[serde(rename = "cumplimiento_tienda")]
    pub store_compliance: f64,
    #[serde(rename = "empleados")]
    pub employees: Vec<EmployeeCommission>,
    #[serde(rename = "total_comisiones")]
    pub total_commissions: f64,
}

impl StoreSummary {
    /// Zero-valued summary: the well-defined "no data for this store/date"
    /// result, not an error.
    pub fn empty(store: &str, date: &str) -> Self {
        Self {
            store: store.to_string(),
            store_id: String::new(),
            company: String::new(),
            date: date.to_string(),
            store_budget: 0.0,
            store_sales: 0.0,
            store_compliance: 0.0,
            employees: Vec::new(),
            total_commissions: 0.0,
        }
    }
}

/// Aggregated result for one month across all stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Month label ("MMM YYYY", e.g. "Ene 2026")
    #[serde(rename = "mes")]
    pub month: String,
    /// Store summaries, sorted by store id
    #[serde(rename = "tiendas")]
    pub stores: Vec<StoreSummary>,
    #[serde(rename = "total_comisiones")]
    pub total_commissions: f64,
    /// Commission totals broken down by role
    #[serde(rename = "comisiones_por_cargo")]
    pub by_role: BTreeMap<Role, f64>,
}

impl MonthSummary {
    /// Empty month: no budget data at all for the month.
    pub fn empty(month: &str) -> Self {
        Self {
            month: month.to_string(),
            stores: Vec::new(),
            total_commissions: 0.0,
            by_role: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_summary_serializes_legacy_keys() {
        let summary = StoreSummary::empty("Centro", "2026-02-14");
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("presupuesto_tienda").is_some());
        assert!(json.get("total_comisiones").is_some());
        assert!(json.get("empleados").is_some());
        assert!(json.get("store_budget").is_none());
    }

    #[test]
    fn test_empty_store_summary_is_zero_valued() {
        let summary = StoreSummary::empty("X", "2026-02-14");
        assert_eq!(summary.store_budget, 0.0);
        assert_eq!(summary.total_commissions, 0.0);
        assert!(summary.employees.is_empty());
    }
}

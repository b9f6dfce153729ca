//! Sales Model (ventas)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sales observed for one store on one date.
///
/// Read-only input. `by_employee` maps employee id to that employee's
/// individual sales amount; an absent entry means no sales registered.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SalesRecord {
    #[serde(rename = "tienda")]
    pub store: String,
    /// Business date (YYYY-MM-DD)
    #[serde(rename = "fecha")]
    pub date: String,
    /// Store-wide sales total for the date
    #[serde(rename = "venta_tienda")]
    pub store_total: f64,
    /// Employee id → that employee's individual sales amount
    #[serde(rename = "ventas_empleados", default)]
    pub by_employee: HashMap<String, f64>,
}

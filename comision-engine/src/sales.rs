//! Record accessors — sales lookups
//!
//! Pure lookups into the sales stream for one store+date. A missing
//! record or a missing employee entry is a normal business condition
//! (a newly hired cashier has no registered sales yet) and reads as 0.

use shared::models::SalesRecord;

/// The (store, date) sales record, if one exists
fn record_for<'a>(store: &str, date: &str, stream: &'a [SalesRecord]) -> Option<&'a SalesRecord> {
    stream.iter().find(|r| r.store == store && r.date == date)
}

/// An employee's individual sales at a store on a date, 0 on any miss
pub fn sales_of(employee_id: &str, store: &str, date: &str, stream: &[SalesRecord]) -> f64 {
    record_for(store, date, stream)
        .and_then(|r| r.by_employee.get(employee_id).copied())
        .unwrap_or(0.0)
}

/// A store's total sales on a date, 0 on any miss
pub fn store_sales_of(store: &str, date: &str, stream: &[SalesRecord]) -> f64 {
    record_for(store, date, stream)
        .map(|r| r.store_total)
        .unwrap_or(0.0)
}

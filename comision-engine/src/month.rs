//! Month Aggregator
//!
//! Groups store-day data across a whole month: filters the three record
//! streams to the target month (clipped to today for the current month),
//! builds one deduplicated row per (employee, store) pair, derives
//! monthly budgets, and re-runs every employee through their role
//! strategy against monthly totals.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

use shared::models::{
    BudgetRecord, DailyBudgetAssignment, MonthSummary, Role, SalesRecord, StaffMember,
    StoreSummary,
};
use shared::EngineResult;

use crate::allocator::allocate;
use crate::calendar::{is_current_month, parse_date, require_month_ordinal, today};
use crate::config::EngineConfig;
use crate::money::sum2;
use crate::sales::sales_of;
use crate::strategies::{compute, StrategyInput};
use crate::tiers::compliance;

/// One deduplicated (employee, store) row being accumulated
struct MonthEntry {
    id: String,
    name: String,
    document_id: String,
    role: Role,
    /// Distinct dates present at this store
    dates: BTreeSet<String>,
    /// Own sales per present date, summed at the end
    daily_sales: Vec<f64>,
}

/// Month-membership filter: inside the target month, and for the current
/// calendar month never after today. Unparseable dates fall out.
fn month_filter(ordinal: i32, clip: Option<NaiveDate>) -> impl Fn(&str) -> bool {
    move |date: &str| match parse_date(date) {
        Some(d) => {
            d.year() * 12 + d.month0() as i32 == ordinal && clip.is_none_or(|t| d <= t)
        }
        None => {
            tracing::warn!(date, "unparseable record date, skipping record");
            false
        }
    }
}

/// Compute the commission summary for one month across all stores.
///
/// A month with no BudgetRecord at all yields an empty MonthSummary.
/// A store seen only through staff or sales records (no BudgetRecord)
/// still gets a summary, but carries an empty store id: it sorts ahead
/// of all real ids and never matches a DailyBudgetAssignment.
/// Failures are the same contract violations as the store-day path, plus
/// an unparseable month label.
pub fn month_summary(
    label: &str,
    budgets: &[BudgetRecord],
    staff: &[StaffMember],
    sales: &[SalesRecord],
    assignments: &[DailyBudgetAssignment],
    config: &EngineConfig,
) -> EngineResult<MonthSummary> {
    let ordinal = require_month_ordinal(label)?;
    let clip = is_current_month(label).then(today);
    let in_month = month_filter(ordinal, clip);

    let budgets: Vec<&BudgetRecord> = budgets.iter().filter(|b| in_month(&b.date)).collect();
    if budgets.is_empty() {
        tracing::debug!(label, "no budget records in month, returning empty summary");
        return Ok(MonthSummary::empty(label));
    }
    let staff: Vec<&StaffMember> = staff.iter().filter(|m| in_month(&m.date)).collect();
    let sales: Vec<SalesRecord> = sales
        .iter()
        .filter(|s| in_month(&s.date))
        .cloned()
        .collect();
    let assignments: Vec<&DailyBudgetAssignment> =
        assignments.iter().filter(|a| in_month(&a.date)).collect();

    // Every store appearing in any stream gets a summary
    let mut store_names: BTreeSet<&str> = BTreeSet::new();
    store_names.extend(budgets.iter().map(|b| b.store.as_str()));
    store_names.extend(staff.iter().map(|m| m.store.as_str()));
    store_names.extend(sales.iter().map(|s| s.store.as_str()));

    let mut stores = Vec::new();
    for store in store_names {
        stores.push(one_store(
            store,
            label,
            &budgets,
            &staff,
            &sales,
            &assignments,
            config,
        )?);
    }
    stores.sort_by(|a, b| a.store_id.cmp(&b.store_id));

    let total_commissions = sum2(stores.iter().map(|s| s.total_commissions));
    let mut by_role_parts: BTreeMap<Role, Vec<f64>> = BTreeMap::new();
    for employee in stores.iter().flat_map(|s| &s.employees) {
        by_role_parts
            .entry(employee.role)
            .or_default()
            .push(employee.commission);
    }
    let by_role: BTreeMap<Role, f64> = by_role_parts
        .into_iter()
        .map(|(role, parts)| (role, sum2(parts)))
        .collect();

    tracing::debug!(
        label,
        stores = stores.len(),
        total_commissions,
        "month summary computed"
    );
    Ok(MonthSummary {
        month: label.to_string(),
        stores,
        total_commissions,
        by_role,
    })
}

fn one_store(
    store: &str,
    label: &str,
    budgets: &[&BudgetRecord],
    staff: &[&StaffMember],
    sales: &[SalesRecord],
    assignments: &[&DailyBudgetAssignment],
    config: &EngineConfig,
) -> EngineResult<StoreSummary> {
    let store_budgets: Vec<&BudgetRecord> =
        budgets.iter().copied().filter(|b| b.store == store).collect();
    let (store_id, company) = store_budgets
        .first()
        .map(|b| (b.store_id.clone(), b.company.clone()))
        .unwrap_or_default();
    // Monthly envelope, the seed for the estimate fallback below
    let envelope = sum2(store_budgets.iter().map(|b| b.budget));

    // One deduplicated entry per employee at this store. Every record's
    // role tag is validated; on a mid-month role change the first record
    // wins.
    let mut entries: Vec<MonthEntry> = Vec::new();
    for member in staff.iter().filter(|m| m.store == store) {
        let role = Role::from_tag(&member.role)?;
        match entries.iter_mut().find(|e| e.id == member.id) {
            Some(entry) => {
                if entry.role != role {
                    tracing::warn!(
                        employee = %member.id,
                        date = %member.date,
                        "conflicting role tag within month, keeping first seen"
                    );
                }
                entry.dates.insert(member.date.clone());
            }
            None => {
                entries.push(MonthEntry {
                    id: member.id.clone(),
                    name: member.name.clone(),
                    document_id: member.document_id.clone(),
                    role,
                    dates: BTreeSet::from([member.date.clone()]),
                    daily_sales: Vec::new(),
                });
            }
        }
    }
    for entry in &mut entries {
        for date in &entry.dates {
            entry
                .daily_sales
                .push(sales_of(&entry.id, store, date, sales));
        }
    }

    let mut headcounts: BTreeMap<Role, u32> = BTreeMap::new();
    for entry in &entries {
        *headcounts.entry(entry.role).or_insert(0) += 1;
    }
    // Headcount-based estimate for employees without any assignment rows:
    // the daily allocation policy applied to the monthly envelope
    let allocation = allocate(envelope, &config.policy(), &headcounts)?;

    let own_budgets: Vec<f64> = entries
        .iter()
        .map(|entry| {
            let rows: Vec<f64> = assignments
                .iter()
                .filter(|a| a.employee_id == entry.id && a.store_id == store_id)
                .map(|a| a.budget)
                .collect();
            if rows.is_empty() {
                allocation.share_for(entry.role)
            } else {
                sum2(rows)
            }
        })
        .collect();

    let store_budget = sum2(own_budgets.iter().copied());
    let store_sales = sum2(sales.iter().filter(|s| s.store == store).map(|s| s.store_total));
    let headcount_present = entries.len() as u32;

    let employees: Vec<_> = entries
        .iter()
        .zip(&own_budgets)
        .map(|(entry, &own_budget)| {
            let mut row = compute(&StrategyInput {
                id: &entry.id,
                name: &entry.name,
                document_id: &entry.document_id,
                role: entry.role,
                store,
                date: label,
                own_sales: sum2(entry.daily_sales.iter().copied()),
                own_budget,
                store_sales,
                store_budget,
                headcount_present,
            });
            row.days_worked = entry.dates.len() as u32;
            row
        })
        .collect();

    let total_commissions = sum2(employees.iter().map(|e| e.commission));
    Ok(StoreSummary {
        store: store.to_string(),
        store_id,
        company,
        date: label.to_string(),
        store_budget,
        store_sales,
        store_compliance: compliance(store_sales, store_budget),
        employees,
        total_commissions,
    })
}

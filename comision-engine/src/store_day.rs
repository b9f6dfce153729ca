//! Store-Day Aggregator
//!
//! Joins budget, staff and sales for one store on one date, dispatches
//! each employee to their role strategy, and recomputes the authoritative
//! store budget bottom-up as the sum of employee budgets. The raw
//! BudgetRecord amount only seeds the allocation envelope; it is never
//! reported as the store budget.

use std::collections::BTreeMap;

use shared::models::{
    BudgetRecord, DailyBudgetAssignment, Role, SalesRecord, StaffMember, StoreSummary,
};
use shared::EngineResult;

use crate::allocator::allocate;
use crate::config::EngineConfig;
use crate::money::sum2;
use crate::sales::{sales_of, store_sales_of};
use crate::strategies::{compute, StrategyInput};
use crate::tiers::compliance;

/// Explicit daily override for an employee, if one exists
fn assignment_for(
    employee_id: &str,
    store_id: &str,
    date: &str,
    assignments: &[DailyBudgetAssignment],
) -> Option<f64> {
    assignments
        .iter()
        .find(|a| a.employee_id == employee_id && a.store_id == store_id && a.date == date)
        .map(|a| a.budget)
}

/// Compute the commission summary for one store on one date.
///
/// A missing BudgetRecord is not an error: it means "no data for this
/// store/date" and yields a zero-valued summary. The only failure is an
/// unrecognized role tag on a present staff member.
pub fn store_day_summary(
    store: &str,
    date: &str,
    budgets: &[BudgetRecord],
    staff: &[StaffMember],
    sales: &[SalesRecord],
    assignments: &[DailyBudgetAssignment],
    config: &EngineConfig,
) -> EngineResult<StoreSummary> {
    let Some(budget_record) = budgets.iter().find(|b| b.store == store && b.date == date) else {
        tracing::debug!(store, date, "no budget record, returning empty summary");
        return Ok(StoreSummary::empty(store, date));
    };

    // Staff present that day, with parsed roles (loud on unknown tags)
    let mut present: Vec<(&StaffMember, Role)> = Vec::new();
    for member in staff.iter().filter(|m| m.store == store && m.date == date) {
        present.push((member, Role::from_tag(&member.role)?));
    }

    let mut headcounts: BTreeMap<Role, u32> = BTreeMap::new();
    for (_, role) in &present {
        *headcounts.entry(*role).or_insert(0) += 1;
    }

    let allocation = allocate(budget_record.budget, &config.policy(), &headcounts)?;

    // Phase 1: resolve every employee's own budget. The override wins and
    // bypasses the allocator for that employee.
    let own_budgets: Vec<f64> = present
        .iter()
        .map(|(member, role)| {
            assignment_for(&member.id, &budget_record.store_id, date, assignments)
                .unwrap_or_else(|| allocation.share_for(*role))
        })
        .collect();

    // The corrected store budget supersedes the raw record amount
    let store_budget = sum2(own_budgets.iter().copied());
    let store_sales = store_sales_of(store, date, sales);
    let headcount_present = present.len() as u32;

    // Phase 2: run strategies against the corrected store budget
    let employees: Vec<_> = present
        .iter()
        .zip(&own_budgets)
        .map(|((member, role), &own_budget)| {
            compute(&StrategyInput {
                id: &member.id,
                name: &member.name,
                document_id: &member.document_id,
                role: *role,
                store,
                date,
                own_sales: sales_of(&member.id, store, date, sales),
                own_budget,
                store_sales,
                store_budget,
                headcount_present,
            })
        })
        .collect();

    let total_commissions = sum2(employees.iter().map(|e| e.commission));
    tracing::debug!(
        store,
        date,
        employees = employees.len(),
        store_budget,
        total_commissions,
        "store-day summary computed"
    );

    Ok(StoreSummary {
        store: store.to_string(),
        store_id: budget_record.store_id.clone(),
        company: budget_record.company.clone(),
        date: date.to_string(),
        store_budget,
        store_sales,
        store_compliance: compliance(store_sales, store_budget),
        employees,
        total_commissions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn budget(store: &str, date: &str, amount: f64) -> BudgetRecord {
        BudgetRecord {
            store: store.to_string(),
            store_id: format!("{store}-01"),
            company: "Retail SAS".to_string(),
            date: date.to_string(),
            budget: amount,
        }
    }

    fn member(id: &str, role: &str, store: &str, date: &str) -> StaffMember {
        StaffMember {
            id: id.to_string(),
            name: format!("Empleado {id}"),
            document_id: format!("doc-{id}"),
            role: role.to_string(),
            store: store.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_missing_budget_record_yields_empty_summary() {
        let summary =
            store_day_summary("X", "2026-02-14", &[], &[], &[], &[], &EngineConfig::default())
                .unwrap();
        assert_eq!(summary.store_budget, 0.0);
        assert_eq!(summary.total_commissions, 0.0);
        assert!(summary.employees.is_empty());
    }

    #[test]
    fn test_store_budget_is_sum_of_employee_budgets() {
        let budgets = vec![budget("Centro", "2026-02-14", 1_000_000.0)];
        let staff = vec![
            member("m1", "MANAGER", "Centro", "2026-02-14"),
            member("a1", "ADVISOR", "Centro", "2026-02-14"),
            member("c1", "CASHIER", "Centro", "2026-02-14"),
        ];
        let summary = store_day_summary(
            "Centro",
            "2026-02-14",
            &budgets,
            &staff,
            &[],
            &[],
            &EngineConfig::default(),
        )
        .unwrap();

        let employee_sum = sum2(summary.employees.iter().map(|e| e.budget));
        assert_eq!(summary.store_budget, employee_sum);
        // Cashier carries no allocation, so the corrected budget is below
        // the raw record amount: 250,000 (manager) + 750,000 (one advisor)
        assert_eq!(summary.store_budget, 1_000_000.0);
        assert_eq!(summary.employees[2].budget, 0.0);
    }

    #[test]
    fn test_assignment_override_bypasses_allocator() {
        let budgets = vec![budget("Centro", "2026-02-14", 1_000_000.0)];
        let staff = vec![
            member("m1", "MANAGER", "Centro", "2026-02-14"),
            member("a1", "ADVISOR", "Centro", "2026-02-14"),
        ];
        let assignments = vec![DailyBudgetAssignment {
            employee_id: "a1".to_string(),
            store_id: "Centro-01".to_string(),
            date: "2026-02-14".to_string(),
            budget: 480_000.0,
        }];
        let summary = store_day_summary(
            "Centro",
            "2026-02-14",
            &budgets,
            &staff,
            &[],
            &assignments,
            &EngineConfig::default(),
        )
        .unwrap();

        let advisor = summary
            .employees
            .iter()
            .find(|e| e.id == "a1")
            .unwrap();
        assert_eq!(advisor.budget, 480_000.0);
        // Corrected budget reflects the override, not the raw envelope
        assert_eq!(summary.store_budget, 250_000.0 + 480_000.0);
    }

    #[test]
    fn test_unknown_role_tag_fails_loudly() {
        let budgets = vec![budget("Centro", "2026-02-14", 1_000_000.0)];
        let staff = vec![member("x1", "INTERN", "Centro", "2026-02-14")];
        let err = store_day_summary(
            "Centro",
            "2026-02-14",
            &budgets,
            &staff,
            &[],
            &[],
            &EngineConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, shared::EngineError::UnknownRole("INTERN".to_string()));
    }

    #[test]
    fn test_collective_scenario_full_store() {
        // Store sales 2,000,000 vs corrected budget 2,000,000: compliance
        // 100, rate 0.007, 4 staff present, per-head 420,168.07
        let budgets = vec![budget("Centro", "2026-02-14", 2_000_000.0)];
        let staff = vec![
            member("m1", "MANAGER", "Centro", "2026-02-14"),
            member("a1", "ADVISOR", "Centro", "2026-02-14"),
            member("c1", "CASHIER", "Centro", "2026-02-14"),
            member("c2", "CASHIER", "Centro", "2026-02-14"),
        ];
        let sales = vec![SalesRecord {
            store: "Centro".to_string(),
            date: "2026-02-14".to_string(),
            store_total: 2_000_000.0,
            by_employee: HashMap::new(),
        }];
        let summary = store_day_summary(
            "Centro",
            "2026-02-14",
            &budgets,
            &staff,
            &sales,
            &[],
            &EngineConfig::default(),
        )
        .unwrap();

        // Corrected budget: manager 500,000 + advisor 1,500,000
        assert_eq!(summary.store_budget, 2_000_000.0);
        assert_eq!(summary.store_compliance, 100.0);
        for cashier in summary.employees.iter().filter(|e| e.id.starts_with('c')) {
            assert_eq!(cashier.commission_base, 420_168.07);
            assert_eq!(cashier.commission, 2_941.18);
        }
    }
}

//! Role Commission Strategies
//!
//! Four stateless, one-shot-per-employee variants dispatched on the role
//! tag. Some deliberately cross role boundaries: a manager's commission
//! follows store-wide sales, never their own, and collective roles split
//! the store's after-tax base across everyone present that day.

use rust_decimal::prelude::*;

use shared::models::{EmployeeCommission, Role};

use crate::money::{base_sale, to_decimal, to_f64};
use crate::tiers::{commission_amount, commission_rate, compliance, next_tier};

/// Flat rate for the online manager, independent of compliance
const ONLINE_RATE: f64 = 0.01;

/// Everything a strategy needs for one employee in one context
/// (a single store-day, or a monthly rollup with monthly totals).
#[derive(Debug, Clone)]
pub struct StrategyInput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub document_id: &'a str,
    pub role: Role,
    pub store: &'a str,
    /// Business date, or the month label for monthly rollups
    pub date: &'a str,
    /// Employee's own registered sales (0 if none registered)
    pub own_sales: f64,
    /// Daily-assignment override or allocator share, resolved by the caller
    pub own_budget: f64,
    /// Store-wide sales in the same context
    pub store_sales: f64,
    /// Corrected store budget: sum of all employee budgets in the context
    pub store_budget: f64,
    /// Staff present in the context, across ALL roles
    pub headcount_present: u32,
}

/// Dispatch an employee to the strategy for their role
pub fn compute(input: &StrategyInput) -> EmployeeCommission {
    match input.role {
        Role::Advisor => advisor(input),
        Role::Manager => manager(input),
        Role::Cashier | Role::Logistics => collective(input),
        Role::OnlineManager => online_manager(input),
    }
}

fn result(input: &StrategyInput) -> EmployeeCommission {
    EmployeeCommission {
        id: input.id.to_string(),
        name: input.name.to_string(),
        document_id: input.document_id.to_string(),
        role: input.role,
        store: input.store.to_string(),
        date: input.date.to_string(),
        budget: input.own_budget,
        sales: input.own_sales,
        compliance: 0.0,
        rate: 0.0,
        commission_base: 0.0,
        commission: 0.0,
        days_worked: 1,
        next_tier: None,
    }
}

/// Individual advisor: own budget and own sales end to end
fn advisor(input: &StrategyInput) -> EmployeeCommission {
    let mut row = result(input);
    row.compliance = compliance(input.own_sales, input.own_budget);
    row.rate = commission_rate(row.compliance);
    row.commission_base = base_sale(input.own_sales);
    row.commission = commission_amount(row.commission_base, row.rate);
    row.next_tier = next_tier(input.own_sales, input.own_budget, row.rate);
    row
}

/// Manager: compliance, rate, amount and projection from store-wide
/// figures; own sales/budget stay on the row for display only
fn manager(input: &StrategyInput) -> EmployeeCommission {
    let mut row = result(input);
    row.compliance = compliance(input.store_sales, input.store_budget);
    row.rate = commission_rate(row.compliance);
    row.commission_base = base_sale(input.store_sales);
    row.commission = commission_amount(row.commission_base, row.rate);
    row.next_tier = next_tier(input.store_sales, input.store_budget, row.rate);
    row
}

/// Cashier/logistics: store-wide compliance and rate, but the amount is
/// the store's after-tax base split evenly across every staff member
/// present (all roles), with the rate applied to that one share
fn collective(input: &StrategyInput) -> EmployeeCommission {
    let mut row = result(input);
    row.compliance = compliance(input.store_sales, input.store_budget);
    row.rate = commission_rate(row.compliance);
    row.commission_base = if input.headcount_present == 0 {
        0.0
    } else {
        to_f64(to_decimal(base_sale(input.store_sales)) / Decimal::from(input.headcount_present))
    };
    row.commission = commission_amount(row.commission_base, row.rate);
    row.next_tier = next_tier(input.store_sales, input.store_budget, row.rate);
    row
}

/// Online manager: flat 1% on own sales; compliance is computed and
/// shown but never influences the rate, so no tier projection applies
fn online_manager(input: &StrategyInput) -> EmployeeCommission {
    let mut row = result(input);
    row.compliance = compliance(input.own_sales, input.own_budget);
    row.rate = ONLINE_RATE;
    row.commission_base = base_sale(input.own_sales);
    row.commission = commission_amount(row.commission_base, ONLINE_RATE);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(role: Role) -> StrategyInput<'static> {
        StrategyInput {
            id: "e1",
            name: "Ana",
            document_id: "100200300",
            role,
            store: "Centro",
            date: "2026-02-14",
            own_sales: 1_000_000.0,
            own_budget: 1_000_000.0,
            store_sales: 2_000_000.0,
            store_budget: 2_000_000.0,
            headcount_present: 4,
        }
    }

    #[test]
    fn test_advisor_uses_own_figures() {
        let row = compute(&input(Role::Advisor));
        assert_eq!(row.compliance, 100.0);
        assert_eq!(row.rate, 0.007);
        assert_eq!(row.commission_base, 840_336.13);
        assert_eq!(row.commission, 5_882.35);
        assert_eq!(row.days_worked, 1);
    }

    #[test]
    fn test_manager_uses_store_figures() {
        let mut ctx = input(Role::Manager);
        ctx.own_sales = 0.0;
        ctx.own_budget = 500_000.0;
        let row = compute(&ctx);
        // Own figures would give compliance 0; store figures drive everything
        assert_eq!(row.compliance, 100.0);
        assert_eq!(row.rate, 0.007);
        assert_eq!(row.commission_base, 1_680_672.27);
        assert_eq!(row.commission, 11_764.71);
        // Display fields stay the manager's own
        assert_eq!(row.sales, 0.0);
        assert_eq!(row.budget, 500_000.0);
    }

    #[test]
    fn test_collective_splits_base_across_all_present() {
        let row = compute(&input(Role::Cashier));
        assert_eq!(row.rate, 0.007);
        // base_sale(2,000,000) = 1,680,672.27; / 4 heads = 420,168.07
        assert_eq!(row.commission_base, 420_168.07);
        assert_eq!(row.commission, 2_941.18);
    }

    #[test]
    fn test_logistics_matches_cashier() {
        let cashier = compute(&input(Role::Cashier));
        let logistics = compute(&input(Role::Logistics));
        assert_eq!(cashier.commission, logistics.commission);
        assert_eq!(cashier.rate, logistics.rate);
    }

    #[test]
    fn test_collective_zero_headcount_is_zero() {
        let mut ctx = input(Role::Cashier);
        ctx.headcount_present = 0;
        let row = compute(&ctx);
        assert_eq!(row.commission_base, 0.0);
        assert_eq!(row.commission, 0.0);
    }

    #[test]
    fn test_online_manager_flat_rate_ignores_compliance() {
        let mut ctx = input(Role::OnlineManager);
        ctx.own_sales = 400_000.0; // compliance 40, well under every band
        let row = compute(&ctx);
        assert_eq!(row.compliance, 40.0);
        assert_eq!(row.rate, 0.01);
        assert_eq!(row.commission_base, crate::money::base_sale(400_000.0));
        assert_eq!(
            row.commission,
            crate::money::round2(row.commission_base * 0.01)
        );
        assert!(row.next_tier.is_none());
    }

    #[test]
    fn test_manager_projection_uses_store_figures() {
        let row = compute(&input(Role::Manager));
        let tier = row.next_tier.unwrap();
        assert_eq!(tier.rate, 0.01);
        assert_eq!(tier.projected_sales, 2_200_000.0);
    }
}

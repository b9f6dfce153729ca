//! Compliance & Tier Calculator
//!
//! Sales-vs-budget compliance, the four-band commission rate step
//! function, commission amounts net of IVA, and the next-achievable-tier
//! projection shown next to each employee row.

use rust_decimal::prelude::*;

use shared::models::NextTier;

use crate::money::{round2, round4, to_decimal, to_f64, IVA_FACTOR};

/// Compliance bands, highest first: (inclusive floor %, rate)
const TIERS: [(f64, f64); 4] = [(110.0, 0.01), (100.0, 0.007), (95.0, 0.005), (90.0, 0.0035)];

/// Sales achieved as a percentage of budget, 4 decimal places.
///
/// A zero (or non-positive) budget defines compliance as 0 — a new store
/// with no budget yet is a normal condition, never a division by zero.
pub fn compliance(sales: f64, budget: f64) -> f64 {
    if budget <= 0.0 {
        return 0.0;
    }
    round4(sales / budget * 100.0)
}

/// Commission rate for a compliance percentage.
///
/// Bands are inclusive on the lower bound and evaluated highest-first;
/// below 90% the rate floors at 0.
pub fn commission_rate(compliance: f64) -> f64 {
    for (floor, rate) in TIERS {
        if compliance >= floor {
            return rate;
        }
    }
    0.0
}

/// Commission amount on an after-tax base
pub fn commission_amount(base_sale: f64, rate: f64) -> f64 {
    to_f64(to_decimal(base_sale) * to_decimal(rate))
}

/// Next higher rate tier, `None` at the top
pub fn next_rate(rate: f64) -> Option<f64> {
    TIERS.iter().rev().find(|(_, r)| *r > rate).map(|(_, r)| *r)
}

/// Inclusive compliance floor for a tier rate
pub fn tier_floor(rate: f64) -> Option<f64> {
    TIERS.iter().find(|(_, r)| *r == rate).map(|(f, _)| *f)
}

/// Budget at which the current sales would land exactly on the tier floor
pub fn implied_budget(next_rate: f64, sales: f64) -> Option<f64> {
    let floor = tier_floor(next_rate)?;
    if sales <= 0.0 {
        return None;
    }
    Some(to_f64(
        to_decimal(sales) * Decimal::ONE_HUNDRED / to_decimal(floor),
    ))
}

/// Sales needed at the current budget to land exactly on the tier floor
pub fn implied_sales(next_rate: f64, budget: f64) -> Option<f64> {
    let floor = tier_floor(next_rate)?;
    if budget <= 0.0 {
        return None;
    }
    Some(to_f64(
        to_decimal(budget) * to_decimal(floor) / Decimal::ONE_HUNDRED,
    ))
}

/// Project the next achievable tier for the figures a strategy computed
/// against. Suppressed at the top tier, when the implied budget cannot be
/// derived, or when the projected sales come out non-positive.
pub fn next_tier(sales: f64, budget: f64, current_rate: f64) -> Option<NextTier> {
    let rate = next_rate(current_rate)?;
    let projected_budget = implied_budget(rate, sales)?;
    let projected_sales = implied_sales(rate, budget)?;
    if projected_sales <= 0.0 {
        return None;
    }
    let projected_commission = round2(projected_budget * rate / IVA_FACTOR);
    Some(NextTier {
        rate,
        projected_budget,
        projected_sales,
        projected_commission,
    })
}

//! Budget Allocator
//!
//! Splits a store's total budget across roles. Fixed roles carve their
//! percentage out of the total first; whatever remains is divided by the
//! summed headcount of the distributive roles into an even per-employee
//! share. The allocator never looks at daily budget overrides — those
//! are applied one layer up and bypass it entirely for that employee.

use rust_decimal::prelude::*;
use std::collections::BTreeMap;

use shared::models::Role;
use shared::{EngineError, EngineResult};

use crate::money::{to_decimal, to_f64};

/// How a role's budget share is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyKind {
    /// Flat percentage of the total budget
    Fixed,
    /// Even per-head split of whatever remains after fixed carve-outs
    Distributive,
}

/// Allocation rule for one role
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RolePolicy {
    #[serde(rename = "tipo")]
    pub kind: PolicyKind,
    /// Percentage of the total (fixed roles only; ignored for distributive)
    #[serde(rename = "porcentaje", default)]
    pub percentage: f64,
}

/// Per-role allocation policy for one store
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AllocationPolicy {
    roles: BTreeMap<Role, RolePolicy>,
}

impl AllocationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default policy: manager takes a fixed percentage off the top,
    /// advisors split the remainder evenly. Other roles carry no budget
    /// unless explicit daily assignments exist for them.
    pub fn with_manager_pct(manager_pct: f64) -> Self {
        Self::new()
            .fixed(Role::Manager, manager_pct)
            .distributive(Role::Advisor)
    }

    pub fn fixed(mut self, role: Role, percentage: f64) -> Self {
        self.roles.insert(
            role,
            RolePolicy {
                kind: PolicyKind::Fixed,
                percentage,
            },
        );
        self
    }

    pub fn distributive(mut self, role: Role) -> Self {
        self.roles.insert(
            role,
            RolePolicy {
                kind: PolicyKind::Distributive,
                percentage: 0.0,
            },
        );
        self
    }

    /// Fixed percentages must land in [0, 100]
    pub fn validate(&self) -> EngineResult<()> {
        for (role, policy) in &self.roles {
            if policy.kind == PolicyKind::Fixed
                && !(0.0..=100.0).contains(&policy.percentage)
            {
                return Err(EngineError::InvalidPolicy(format!(
                    "{role:?} fixed percentage must be between 0 and 100, got {}",
                    policy.percentage
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, role: Role) -> Option<&RolePolicy> {
        self.roles.get(&role)
    }
}

/// Result of one allocation pass
#[derive(Debug, Clone, Default)]
pub struct Allocation {
    /// Role → total bucket carved out for that role
    pub buckets: BTreeMap<Role, f64>,
    /// Role → per-employee share within the bucket
    pub per_head: BTreeMap<Role, f64>,
}

impl Allocation {
    /// Per-employee share for a role (0 for roles with no bucket)
    pub fn share_for(&self, role: Role) -> f64 {
        self.per_head.get(&role).copied().unwrap_or(0.0)
    }
}

/// Split `total` across the policy's roles given present headcounts.
///
/// Fixed roles with headcount > 0 consume first; distributive roles with
/// headcount > 0 split the remainder by their summed headcount. A role
/// with zero headcount always gets 0 regardless of policy, and if no
/// distributive role has headcount the remainder stays unallocated.
pub fn allocate(
    total: f64,
    policy: &AllocationPolicy,
    headcounts: &BTreeMap<Role, u32>,
) -> EngineResult<Allocation> {
    policy.validate()?;

    let total = to_decimal(total);
    let hundred = Decimal::ONE_HUNDRED;
    let mut remaining = total;
    let mut allocation = Allocation::default();

    // Pass 1: fixed carve-outs
    for (&role, role_policy) in &policy.roles {
        let heads = headcounts.get(&role).copied().unwrap_or(0);
        if role_policy.kind != PolicyKind::Fixed {
            continue;
        }
        if heads == 0 {
            allocation.buckets.insert(role, 0.0);
            continue;
        }
        let bucket = to_f64(total * to_decimal(role_policy.percentage) / hundred);
        remaining -= to_decimal(bucket);
        allocation.buckets.insert(role, bucket);
        allocation
            .per_head
            .insert(role, to_f64(to_decimal(bucket) / Decimal::from(heads)));
    }

    // Pass 2: distributive split over the summed headcount
    let distributive: Vec<(Role, u32)> = policy
        .roles
        .iter()
        .filter(|(_, p)| p.kind == PolicyKind::Distributive)
        .map(|(&role, _)| (role, headcounts.get(&role).copied().unwrap_or(0)))
        .collect();

    let total_heads: u32 = distributive.iter().map(|(_, h)| h).sum();
    for (role, heads) in distributive {
        if heads == 0 || total_heads == 0 {
            allocation.buckets.insert(role, 0.0);
            continue;
        }
        let share = to_f64(remaining / Decimal::from(total_heads));
        allocation
            .buckets
            .insert(role, to_f64(to_decimal(share) * Decimal::from(heads)));
        allocation.per_head.insert(role, share);
    }

    Ok(allocation)
}

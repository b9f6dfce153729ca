//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::allocator::AllocationPolicy;

/// Default manager carve-out when the caller does not configure one
const DEFAULT_MANAGER_PCT: f64 = 25.0;

/// Caller-supplied configuration for one calculation pass.
///
/// `manager_pct` is the store manager's fixed share of the budget
/// envelope; callers with non-standard stores can replace the whole
/// allocation policy instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(rename = "porcentaje_jefe")]
    pub manager_pct: f64,
    #[serde(rename = "politica", default, skip_serializing_if = "Option::is_none")]
    custom_policy: Option<AllocationPolicy>,
}

impl EngineConfig {
    pub fn new(manager_pct: f64) -> Self {
        Self {
            manager_pct,
            custom_policy: None,
        }
    }

    pub fn with_policy(mut self, policy: AllocationPolicy) -> Self {
        self.custom_policy = Some(policy);
        self
    }

    /// The allocation policy in effect for this pass
    pub fn policy(&self) -> AllocationPolicy {
        self.custom_policy
            .clone()
            .unwrap_or_else(|| AllocationPolicy::with_manager_pct(self.manager_pct))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MANAGER_PCT)
    }
}

//! Role Model (cargos)

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Closed set of commissionable roles.
///
/// The record store carries these as free-form tags; [`Role::from_tag`]
/// is the only place a tag becomes a `Role`, so an unrecognized tag
/// fails before it can reach strategy dispatch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Jefe de tienda — commission follows store-wide figures
    Manager,
    /// Asesor — commission follows own figures
    #[default]
    Advisor,
    /// Cajero — collective share of store-wide figures
    Cashier,
    /// Logística — collective share of store-wide figures
    Logistics,
    /// Encargado online — flat rate on own sales
    OnlineManager,
}

impl Role {
    /// Parse a record-store role tag.
    ///
    /// Tags are matched case-insensitively; both the English tags and the
    /// legacy Spanish ones the older records carry are accepted.
    pub fn from_tag(tag: &str) -> EngineResult<Role> {
        match tag.trim().to_uppercase().as_str() {
            "MANAGER" | "JEFE_DE_TIENDA" | "JEFE DE TIENDA" => Ok(Role::Manager),
            "ADVISOR" | "ASESOR" | "ASESORA" => Ok(Role::Advisor),
            "CASHIER" | "CAJERO" | "CAJERA" => Ok(Role::Cashier),
            "LOGISTICS" | "LOGISTICA" | "LOGÍSTICA" => Ok(Role::Logistics),
            "ONLINE_MANAGER" | "ENCARGADO_ONLINE" | "ENCARGADO ONLINE" => Ok(Role::OnlineManager),
            _ => Err(EngineError::UnknownRole(tag.to_string())),
        }
    }

    /// All roles, in breakdown/reporting order
    pub const ALL: [Role; 5] = [
        Role::Manager,
        Role::Advisor,
        Role::Cashier,
        Role::Logistics,
        Role::OnlineManager,
    ];

    /// Whether the commission amount is driven by store-wide figures
    /// split across everyone present (cashier/logistics)
    pub fn is_collective(&self) -> bool {
        matches!(self, Role::Cashier | Role::Logistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_accepts_both_languages() {
        assert_eq!(Role::from_tag("MANAGER").unwrap(), Role::Manager);
        assert_eq!(Role::from_tag("jefe de tienda").unwrap(), Role::Manager);
        assert_eq!(Role::from_tag("Asesor").unwrap(), Role::Advisor);
        assert_eq!(Role::from_tag("cajera").unwrap(), Role::Cashier);
        assert_eq!(Role::from_tag("logística").unwrap(), Role::Logistics);
        assert_eq!(
            Role::from_tag("ENCARGADO_ONLINE").unwrap(),
            Role::OnlineManager
        );
    }

    #[test]
    fn test_from_tag_rejects_unknown() {
        let err = Role::from_tag("INTERN").unwrap_err();
        assert_eq!(err, EngineError::UnknownRole("INTERN".to_string()));
    }

    #[test]
    fn test_collective_roles() {
        assert!(Role::Cashier.is_collective());
        assert!(Role::Logistics.is_collective());
        assert!(!Role::Manager.is_collective());
        assert!(!Role::Advisor.is_collective());
        assert!(!Role::OnlineManager.is_collective());
    }
}

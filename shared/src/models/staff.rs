//! Staff Model (personal)

use serde::{Deserialize, Serialize};

/// One person's presence at one store on one date.
///
/// Read-only input. `role` is the raw tag from the record store; the
/// engine parses it into [`crate::models::Role`] at dispatch time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaffMember {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Document id (cédula)
    #[serde(rename = "documento")]
    pub document_id: String,
    /// Role tag (free-form, matched case-insensitively)
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "tienda")]
    pub store: String,
    /// Business date the person was present (YYYY-MM-DD)
    #[serde(rename = "fecha")]
    pub date: String,
}

//! Organization domain model.

use serde::{Deserialize, Serialize};

/// The user's membership role within an organization.
///
/// Fixed once assigned; there is no role change flow in this scope.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationRole {
    /// Full administrative access to the organization
    Administrator,
    /// Regular member
    Member,
}

impl Default for OrganizationRole {
    fn default() -> Self {
        OrganizationRole::Member
    }
}

/// A company or workplace the user can administer or belong to, distinct
/// from the user's personal identity.
///
/// Organizations are appended to a session's known set and never removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Logo image reference, if any
    #[serde(default)]
    pub logo_url: Option<String>,
    /// The user's role within this organization
    #[serde(default)]
    pub role: OrganizationRole,
}

impl Organization {
    /// Creates an organization with no logo.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: OrganizationRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            logo_url: None,
            role,
        }
    }
}

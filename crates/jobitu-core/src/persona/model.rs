//! Persona domain model.
//!
//! Represents the role the authenticated user is currently acting as and
//! the canonical landing view for each role.

use serde::{Deserialize, Serialize};

/// Landing view for candidates.
pub const CANDIDATE_DASHBOARD_VIEW: &str = "dashboard";

/// Landing view for employers.
///
/// Employer flows always land here, never on the separate
/// "employer-dashboard" analytics view.
pub const EMPLOYER_HOME_VIEW: &str = "employer-home";

/// Landing view for platform administrators.
pub const ADMIN_PANEL_VIEW: &str = "admin-panel";

/// The role the authenticated user is currently acting as.
///
/// Exactly one persona is active at a time; a fresh session starts as
/// `Candidate`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// Job-seeking candidate
    Candidate,
    /// Employer acting on behalf of an organization
    Employer,
    /// Platform administrator
    Admin,
}

impl Default for Persona {
    fn default() -> Self {
        Persona::Candidate
    }
}

impl Persona {
    /// Stable string form used in event payloads and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Candidate => "candidate",
            Persona::Employer => "employer",
            Persona::Admin => "admin",
        }
    }

    /// The view a switch to this persona routes to.
    pub fn landing_view(&self) -> &'static str {
        match self {
            Persona::Candidate => CANDIDATE_DASHBOARD_VIEW,
            Persona::Employer => EMPLOYER_HOME_VIEW,
            Persona::Admin => ADMIN_PANEL_VIEW,
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

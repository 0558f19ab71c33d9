//! Identity domain model.
//!
//! Represents the profile of the user the session is acting for.

use serde::{Deserialize, Serialize};

/// The acting user's profile.
///
/// Created at login and replaced wholesale; `selected_organization_id`, when
/// set, references an entry in the session's known organization set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identifier for the user
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Avatar image reference, if the user has one
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Currently selected organization, if any
    #[serde(default)]
    pub selected_organization_id: Option<String>,
}

impl Identity {
    /// Creates an identity with no avatar and no selected organization.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar_url: None,
            selected_organization_id: None,
        }
    }

    /// Returns the anonymous identity used before login and after logout.
    pub fn anonymous() -> Self {
        Self {
            id: String::new(),
            name: "Guest".to_string(),
            email: String::new(),
            avatar_url: None,
            selected_organization_id: None,
        }
    }

    /// Whether this is the anonymous placeholder identity.
    pub fn is_anonymous(&self) -> bool {
        self.id.is_empty()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::anonymous()
    }
}

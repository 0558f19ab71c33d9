use serde::{Deserialize, Serialize};

use crate::persona::Persona;

/// Routing notifications published by the session store.
///
/// Consumers subscribe explicitly via [`super::SessionStore::subscribe`];
/// delivery is fire-and-forget over an unbounded channel and has no failure
/// path observable to the publisher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The active persona changed.
    PersonaChanged {
        persona: Persona,
        /// Canonical landing view for the new persona.
        target_view: String,
    },
    /// The selected organization changed.
    OrganizationChanged {
        organization_id: String,
        /// Organization switches always route to the employer home view.
        target_view: String,
    },
}

impl SessionEvent {
    /// The view the router should navigate to.
    pub fn target_view(&self) -> &str {
        match self {
            SessionEvent::PersonaChanged { target_view, .. } => target_view,
            SessionEvent::OrganizationChanged { target_view, .. } => target_view,
        }
    }
}

//! Session state store.
//!
//! Single source of truth for "who is the user acting as, and where have
//! they been". Views read through the accessors and mutate only through the
//! methods here; routing consumers subscribe for change notifications.
//!
//! Every operation is a synchronous, total function over in-memory state.
//! The store performs no I/O; publishing a notification is a non-blocking
//! channel send whose outcome the caller never observes.

use tokio::sync::mpsc;

use crate::identity::Identity;
use crate::navigation::NavigationHistory;
use crate::organization::Organization;
use crate::persona::{EMPLOYER_HOME_VIEW, Persona};

use super::event::SessionEvent;

/// Shared container for identity, persona, organization set, authentication
/// flag, and navigation history.
///
/// # Invariants
///
/// - Exactly one persona is active at all times; a fresh store starts as
///   `Candidate`, unauthenticated.
/// - A set `selected_organization_id` always references a member of the
///   known organization set.
/// - [`Self::logout`] restores every field to its initial default.
///
/// # Sharing
///
/// The store holds no interior locking; the owning layer serializes access
/// (e.g. behind `Arc<RwLock<_>>`) and consumers never mutate fields
/// directly.
#[derive(Default)]
pub struct SessionStore {
    identity: Identity,
    persona: Persona,
    organizations: Vec<Organization>,
    authenticated: bool,
    history: NavigationHistory,
    logged_in_at: Option<String>,
    subscribers: Vec<mpsc::UnboundedSender<SessionEvent>>,
}

impl SessionStore {
    /// Creates a fresh store: anonymous identity, `Candidate` persona,
    /// unauthenticated, empty organization set and history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The acting user's profile.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The currently active persona.
    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// True only between a successful login and an explicit logout.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The known organization set, in insertion order.
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    /// Looks up a known organization by identifier.
    pub fn organization(&self, id: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.id == id)
    }

    /// The currently selected organization, if any.
    pub fn selected_organization(&self) -> Option<&Organization> {
        let id = self.identity.selected_organization_id.as_deref()?;
        self.organization(id)
    }

    /// The navigation history.
    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// RFC 3339 timestamp of the current login, if authenticated.
    pub fn logged_in_at(&self) -> Option<&str> {
        self.logged_in_at.as_deref()
    }

    /// Subscribes to routing notifications.
    ///
    /// Each subscriber gets its own unbounded receiver; events are delivered
    /// in publication order. Subscribers that drop their receiver are pruned
    /// on the next publish.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Starts a session for the given identity and persona.
    ///
    /// Replaces the current identity and persona, marks the session
    /// authenticated, clears the navigation history, and stamps the login
    /// time. When logging in as an employer with no organization selected,
    /// the first known organization becomes the selection. Inputs are
    /// trusted; no notification is published.
    pub fn login(&mut self, identity: Identity, persona: Persona) {
        self.identity = identity;
        self.persona = persona;
        self.authenticated = true;
        self.history.clear();
        self.logged_in_at = Some(chrono::Utc::now().to_rfc3339());
        self.select_default_organization();
    }

    /// Ends the session and restores every field to its initial default.
    pub fn logout(&mut self) {
        self.identity = Identity::anonymous();
        self.persona = Persona::default();
        self.authenticated = false;
        self.organizations.clear();
        self.history.clear();
        self.logged_in_at = None;
    }

    /// Activates a different persona.
    ///
    /// Switching to `Employer` with no organization selected picks the first
    /// known organization, as at login. Publishes a
    /// [`SessionEvent::PersonaChanged`] carrying the persona's canonical
    /// landing view.
    pub fn switch_persona(&mut self, persona: Persona) {
        self.persona = persona;
        self.select_default_organization();
        self.publish(SessionEvent::PersonaChanged {
            persona,
            target_view: persona.landing_view().to_string(),
        });
    }

    /// Selects a different organization.
    ///
    /// Unknown identifiers are a no-op: the selection and the known set stay
    /// untouched and `false` is returned, with no error raised. On success,
    /// publishes a [`SessionEvent::OrganizationChanged`] routing to the
    /// employer home view.
    pub fn switch_organization(&mut self, organization_id: &str) -> bool {
        if self.organization(organization_id).is_none() {
            return false;
        }
        self.identity.selected_organization_id = Some(organization_id.to_string());
        self.publish(SessionEvent::OrganizationChanged {
            organization_id: organization_id.to_string(),
            target_view: EMPLOYER_HOME_VIEW.to_string(),
        });
        true
    }

    /// Adds an organization to the known set and selects it.
    ///
    /// The set keeps insertion order and performs no de-duplication: adding
    /// an identifier twice yields two entries.
    pub fn add_organization(&mut self, organization: Organization) {
        let id = organization.id.clone();
        self.organizations.push(organization);
        self.identity.selected_organization_id = Some(id);
    }

    /// Records a visited view in the navigation history.
    pub fn push_history(&mut self, view: impl Into<String>) {
        self.history.push(view);
    }

    /// Steps back one view; see [`NavigationHistory::go_back`].
    pub fn go_back(&mut self) -> Option<String> {
        self.history.go_back()
    }

    // Selection is only defaulted for employers; candidates and admins keep
    // whatever selection they already have.
    fn select_default_organization(&mut self) {
        if self.persona == Persona::Employer && self.identity.selected_organization_id.is_none() {
            if let Some(first) = self.organizations.first() {
                self.identity.selected_organization_id = Some(first.id.clone());
            }
        }
    }

    // Non-blocking send; subscribers that went away are pruned here.
    fn publish(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

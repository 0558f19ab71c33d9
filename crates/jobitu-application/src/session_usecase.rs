//! Session use case implementation.
//!
//! This module provides the `SessionUseCase` which owns the session state
//! store and coordinates it with the organization directory to keep the
//! known organization set consistent with the acting user.

use std::sync::Arc;

use anyhow::Result;
use jobitu_core::identity::Identity;
use jobitu_core::organization::{Organization, OrganizationRepository};
use jobitu_core::persona::Persona;
use jobitu_core::session::{SessionEvent, SessionStore};
use serde::Serialize;
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

/// Serializable view of the session state for view layers.
///
/// Snapshots are cheap copies taken under the read lock; holding one never
/// blocks mutations.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    /// The acting user's profile
    pub identity: Identity,
    /// The currently active persona
    pub persona: Persona,
    /// Whether a session is active
    pub authenticated: bool,
    /// The currently selected organization, if any
    pub selected_organization: Option<Organization>,
    /// Navigation history entries, oldest first
    pub history: Vec<String>,
    /// RFC 3339 timestamp of the current login, if authenticated
    pub logged_in_at: Option<String>,
    /// Identifier assigned to the current login, if authenticated
    pub session_id: Option<String>,
}

/// Use case facade for session and role state.
///
/// `SessionUseCase` is responsible for:
/// - Seeding the store with the user's organizations at login
/// - Assigning a session identifier per login for log correlation
/// - Serializing all store access behind a write lock
/// - Exposing snapshots and event subscriptions to view layers
///
/// # Thread Safety
///
/// The store is wrapped in `Arc<RwLock<_>>`; consumers clone the use case's
/// `Arc` and never touch store fields directly.
pub struct SessionUseCase {
    /// The session state store, single writer behind the lock
    store: Arc<RwLock<SessionStore>>,
    /// Directory of the organizations a user belongs to
    organization_repository: Arc<dyn OrganizationRepository>,
    /// Identifier of the current login, used in log fields
    session_id: RwLock<Option<String>>,
}

impl SessionUseCase {
    /// Creates a new `SessionUseCase` over a fresh store.
    ///
    /// # Arguments
    ///
    /// * `organization_repository` - Directory supplying each user's
    ///   organizations at login
    pub fn new(organization_repository: Arc<dyn OrganizationRepository>) -> Self {
        Self {
            store: Arc::new(RwLock::new(SessionStore::new())),
            organization_repository,
            session_id: RwLock::new(None),
        }
    }

    /// Starts a session for the given identity and persona.
    ///
    /// Loads the identity's organizations from the directory and seeds the
    /// store with them before delegating, so an employer login selects its
    /// default organization deterministically (first directory entry).
    ///
    /// # Errors
    ///
    /// Returns an error if the organization directory cannot be reached.
    pub async fn login(&self, identity: Identity, persona: Persona) -> Result<()> {
        let organizations = self
            .organization_repository
            .list_for_user(&identity.id)
            .await?;

        let session_id = Uuid::new_v4().to_string();
        {
            let mut store = self.store.write().await;
            // Reset any previous session before seeding the new directory.
            store.logout();
            for organization in organizations {
                store.add_organization(organization);
            }
            store.login(identity, persona);
        }
        tracing::info!(session_id = %session_id, persona = %persona, "session started");
        *self.session_id.write().await = Some(session_id);

        Ok(())
    }

    /// Ends the session and restores the store's initial defaults.
    pub async fn logout(&self) {
        self.store.write().await.logout();
        if let Some(session_id) = self.session_id.write().await.take() {
            tracing::info!(session_id = %session_id, "session ended");
        }
    }

    /// Activates a different persona.
    pub async fn switch_persona(&self, persona: Persona) {
        self.store.write().await.switch_persona(persona);
        tracing::debug!(persona = %persona, "persona switched");
    }

    /// Selects a different organization.
    ///
    /// Unknown identifiers leave the state untouched; only the log betrays
    /// the bad id.
    pub async fn switch_organization(&self, organization_id: &str) {
        let switched = self.store.write().await.switch_organization(organization_id);
        if !switched {
            tracing::warn!(organization_id, "ignoring switch to unknown organization");
        }
    }

    /// Adds an organization to the known set and selects it.
    pub async fn add_organization(&self, organization: Organization) {
        self.store.write().await.add_organization(organization);
    }

    /// Records a visited view in the navigation history.
    pub async fn push_view(&self, view: &str) {
        self.store.write().await.push_history(view);
    }

    /// Steps back one view and returns the view to present, if any.
    pub async fn go_back(&self) -> Option<String> {
        self.store.write().await.go_back()
    }

    /// Subscribes to the store's routing notifications.
    pub async fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionEvent> {
        self.store.write().await.subscribe()
    }

    /// Returns a serializable snapshot of the current session state.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let store = self.store.read().await;
        SessionSnapshot {
            identity: store.identity().clone(),
            persona: store.persona(),
            authenticated: store.is_authenticated(),
            selected_organization: store.selected_organization().cloned(),
            history: store.history().entries().to_vec(),
            logged_in_at: store.logged_in_at().map(str::to_string),
            session_id: self.session_id.read().await.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobitu_core::error::Result as CoreResult;
    use jobitu_core::organization::OrganizationRole;

    // Mock directory returning a fixed organization list
    struct FixtureOrganizationRepository {
        organizations: Vec<Organization>,
    }

    impl FixtureOrganizationRepository {
        fn new(organizations: Vec<Organization>) -> Self {
            Self { organizations }
        }

        fn empty() -> Self {
            Self::new(Vec::new())
        }
    }

    #[async_trait::async_trait]
    impl OrganizationRepository for FixtureOrganizationRepository {
        async fn list_for_user(&self, _user_id: &str) -> CoreResult<Vec<Organization>> {
            Ok(self.organizations.clone())
        }
    }

    fn directory() -> Arc<FixtureOrganizationRepository> {
        Arc::new(FixtureOrganizationRepository::new(vec![
            Organization::new("techflow", "TechFlow", OrganizationRole::Administrator),
            Organization::new("innovate", "Innovate Labs", OrganizationRole::Member),
        ]))
    }

    #[tokio::test]
    async fn test_employer_login_selects_first_directory_entry() {
        let usecase = SessionUseCase::new(directory());
        usecase
            .login(Identity::new("u-1", "Ada", "ada@example.com"), Persona::Employer)
            .await
            .unwrap();

        let snapshot = usecase.snapshot().await;
        assert!(snapshot.authenticated);
        assert_eq!(snapshot.persona, Persona::Employer);
        assert_eq!(
            snapshot.selected_organization.map(|o| o.id),
            Some("techflow".to_string())
        );
        assert!(snapshot.session_id.is_some());
        assert!(snapshot.logged_in_at.is_some());
    }

    #[tokio::test]
    async fn test_candidate_login_selects_no_organization() {
        let usecase = SessionUseCase::new(directory());
        usecase
            .login(Identity::new("u-1", "Ada", "ada@example.com"), Persona::Candidate)
            .await
            .unwrap();

        let snapshot = usecase.snapshot().await;
        assert_eq!(snapshot.selected_organization, None);
    }

    #[tokio::test]
    async fn test_relogin_replaces_previous_directory() {
        let usecase = SessionUseCase::new(directory());
        usecase
            .login(Identity::new("u-1", "Ada", "ada@example.com"), Persona::Employer)
            .await
            .unwrap();
        usecase
            .login(Identity::new("u-2", "Grace", "grace@example.com"), Persona::Employer)
            .await
            .unwrap();

        let snapshot = usecase.snapshot().await;
        assert_eq!(snapshot.identity.id, "u-2");
        assert_eq!(snapshot.history, Vec::<String>::new());
        assert_eq!(
            snapshot.selected_organization.map(|o| o.id),
            Some("techflow".to_string())
        );
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let usecase = SessionUseCase::new(directory());
        usecase
            .login(Identity::new("u-1", "Ada", "ada@example.com"), Persona::Employer)
            .await
            .unwrap();
        usecase.logout().await;

        let snapshot = usecase.snapshot().await;
        assert!(!snapshot.authenticated);
        assert_eq!(snapshot.persona, Persona::Candidate);
        assert!(snapshot.identity.is_anonymous());
        assert_eq!(snapshot.session_id, None);
        assert_eq!(snapshot.logged_in_at, None);
    }

    #[tokio::test]
    async fn test_unknown_organization_switch_is_a_noop() {
        let usecase = SessionUseCase::new(directory());
        usecase
            .login(Identity::new("u-1", "Ada", "ada@example.com"), Persona::Employer)
            .await
            .unwrap();
        usecase.switch_organization("ghost-corp").await;

        let snapshot = usecase.snapshot().await;
        assert_eq!(
            snapshot.selected_organization.map(|o| o.id),
            Some("techflow".to_string())
        );
    }

    #[tokio::test]
    async fn test_navigation_round_trip() {
        let usecase = SessionUseCase::new(Arc::new(FixtureOrganizationRepository::empty()));
        usecase
            .login(Identity::new("u-1", "Ada", "ada@example.com"), Persona::Candidate)
            .await
            .unwrap();
        usecase.push_view("dashboard").await;
        usecase.push_view("dashboard").await;
        usecase.push_view("inbox").await;

        assert_eq!(usecase.snapshot().await.history, ["dashboard", "inbox"]);
        assert_eq!(usecase.go_back().await, Some("dashboard".to_string()));
        assert_eq!(usecase.go_back().await, None);
    }

    #[tokio::test]
    async fn test_subscription_sees_persona_switch() {
        let usecase = SessionUseCase::new(directory());
        usecase
            .login(Identity::new("u-1", "Ada", "ada@example.com"), Persona::Candidate)
            .await
            .unwrap();
        let mut events = usecase.subscribe().await;

        usecase.switch_persona(Persona::Employer).await;

        let event = events.recv().await.unwrap();
        assert_eq!(event.target_view(), "employer-home");
    }
}

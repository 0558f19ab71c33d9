//! View router.
//!
//! Consumes routing notifications from a session subscription and tracks the
//! view the shell should currently present. The store publishes without
//! waiting; the router applies whatever has queued up on its next drain,
//! which keeps switches decoupled from the interaction that caused them.

use jobitu_core::persona::Persona;
use jobitu_core::session::SessionEvent;
use tokio::sync::mpsc::UnboundedReceiver;

/// Tracks the current view from a stream of session events.
pub struct ViewRouter {
    events: UnboundedReceiver<SessionEvent>,
    current_view: String,
}

impl ViewRouter {
    /// Creates a router over a store subscription, starting at the landing
    /// view of the default persona.
    pub fn new(events: UnboundedReceiver<SessionEvent>) -> Self {
        Self {
            events,
            current_view: Persona::default().landing_view().to_string(),
        }
    }

    /// The view the shell should currently present.
    pub fn current_view(&self) -> &str {
        &self.current_view
    }

    /// Applies every notification already queued and returns how many were
    /// handled.
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Waits for the next notification and returns the view it routed to.
    ///
    /// Returns `None` once the publishing side has gone away.
    pub async fn next_view(&mut self) -> Option<&str> {
        let event = self.events.recv().await?;
        self.apply(event);
        Some(self.current_view())
    }

    fn apply(&mut self, event: SessionEvent) {
        tracing::debug!(target_view = event.target_view(), "routing");
        self.current_view = event.target_view().to_string();
    }
}

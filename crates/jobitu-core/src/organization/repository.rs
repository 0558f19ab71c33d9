//! Organization directory trait.
//!
//! Defines the interface for looking up the organizations a user belongs to.

use super::model::Organization;
use crate::error::Result;

/// An abstract directory of the organizations a user belongs to.
///
/// This trait decouples the session layer from the specific backing source
/// (HTTP API, database, fixture data); the session layer only consults it
/// when a session starts.
#[async_trait::async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Retrieves every organization the given user belongs to, in the
    /// directory's stable order.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Organization>)`: The user's organizations, possibly empty
    /// - `Err(JobituError)`: Error if the directory cannot be reached
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Organization>>;
}

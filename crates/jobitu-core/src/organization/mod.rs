//! Organization domain module.
//!
//! - `model`: workplace entity and membership role
//! - `repository`: directory trait the embedding application implements

mod model;
mod repository;

pub use model::{Organization, OrganizationRole};
pub use repository::OrganizationRepository;

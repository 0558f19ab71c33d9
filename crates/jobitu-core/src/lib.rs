//! Core domain layer for the Jobitu session platform.
//!
//! This crate holds the session state store - the single shared container
//! for the acting user's identity, known organizations, active persona,
//! authentication flag, and bounded navigation history - together with the
//! domain models it is built from.
//!
//! View layers consume the store read-only and mutate it only through its
//! methods; routing consumers subscribe explicitly for change notifications.

pub mod error;
pub mod identity;
pub mod navigation;
pub mod organization;
pub mod persona;
pub mod session;

// Re-export common error type
pub use error::JobituError;

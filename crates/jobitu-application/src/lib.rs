//! Application layer for the Jobitu session platform.
//!
//! Owns the session state store behind shared-state primitives, wires it to
//! the organization directory supplied by the embedding application, and
//! hosts the view router that consumes routing notifications.

pub mod router;
pub mod session_usecase;

pub use router::ViewRouter;
pub use session_usecase::{SessionSnapshot, SessionUseCase};

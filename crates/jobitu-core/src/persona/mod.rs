//! Persona domain module.
//!
//! - `model`: the active role variant and its landing-view mapping

mod model;

pub use model::{
    ADMIN_PANEL_VIEW, CANDIDATE_DASHBOARD_VIEW, EMPLOYER_HOME_VIEW, Persona,
};

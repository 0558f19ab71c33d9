//! Identity domain module.
//!
//! - `model`: the acting user's profile (`Identity`)

mod model;

pub use model::Identity;

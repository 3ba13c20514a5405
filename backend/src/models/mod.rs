//! Models served by the AgriGuru API
//!
//! Re-exports the dashboard models and common types from the shared crate

pub use shared::models::*;
pub use shared::types::*;

//! Shared types and pure logic for the AgriGuru farming dashboard
//!
//! This crate holds the forecast aggregation and soil classification rules
//! used by the backend server and, through WASM, by the browser dashboard.
//! Nothing in here performs I/O.

pub mod advice;
pub mod forecast;
pub mod models;
pub mod soil;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;

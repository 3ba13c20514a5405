//! Domain models for the AgriGuru dashboard

mod advice;
mod soil;
mod weather;

pub use advice::*;
pub use soil::*;
pub use weather::*;

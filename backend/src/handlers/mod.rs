//! HTTP handlers

mod advice;
mod health;
mod soil;
mod weather;

pub use advice::*;
pub use health::*;
pub use soil::*;
pub use weather::*;

//! Business logic services for the AgriGuru dashboard

pub mod advice;
pub mod soil;
pub mod weather;

pub use advice::AdviceService;
pub use soil::SoilService;
pub use weather::WeatherService;

//! External API integrations

pub mod advisor;
pub mod soil;
pub mod weather;

pub use advisor::AdvisorClient;
pub use soil::SoilGridsClient;
pub use weather::WeatherClient;

//! Configuration management for the AgriGuru server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRIGURU_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::GpsCoordinates;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// OpenWeatherMap configuration
    pub weather: WeatherConfig,

    /// SoilGrids configuration
    pub soil: SoilConfig,

    /// Expert advice backend configuration
    pub advisor: AdvisorConfig,

    /// Location used when a request has no coordinates
    pub location: LocationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SoilConfig {
    /// SoilGrids properties query endpoint
    pub api_endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdvisorConfig {
    /// Base URL of the expert advice API
    pub api_endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationConfig {
    pub fn coordinates(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.latitude, self.longitude)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRIGURU_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", "https://api.openweathermap.org/data/2.5")?
            .set_default("weather.api_key", "")?
            .set_default(
                "soil.api_endpoint",
                "https://rest.isric.org/soilgrids/v2.0/properties/query",
            )?
            .set_default("advisor.api_endpoint", "http://localhost:5000/api")?
            .set_default("advisor.timeout_secs", 10)?
            .set_default("location.latitude", shared::DEFAULT_LOCATION.latitude)?
            .set_default("location.longitude", shared::DEFAULT_LOCATION.longitude)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRIGURU_ prefix)
            .add_source(
                Environment::with_prefix("AGRIGURU")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        shared::validate_coordinates(&config.location.coordinates())
            .map_err(|e| ConfigError::Message(format!("location: {}", e)))?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
impl Config {
    /// Configuration pointing every upstream at a closed local port
    pub fn for_tests() -> Self {
        let unreachable = "http://127.0.0.1:9".to_string();
        Self {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            weather: WeatherConfig {
                api_endpoint: unreachable.clone(),
                api_key: "test-key".to_string(),
            },
            soil: SoilConfig {
                api_endpoint: unreachable.clone(),
            },
            advisor: AdvisorConfig {
                api_endpoint: unreachable,
                timeout_secs: 2,
            },
            location: LocationConfig {
                latitude: shared::DEFAULT_LOCATION.latitude,
                longitude: shared::DEFAULT_LOCATION.longitude,
            },
        }
    }
}

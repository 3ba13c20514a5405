//! Weather data models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Glyph shown for any condition label outside the known set
pub const DEFAULT_WEATHER_EMOJI: &str = "🌤️";

/// A single 3-hour forecast sample as delivered by the weather provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastSample {
    pub timestamp: NaiveDateTime,
    pub temperature_celsius: f64,
    pub humidity_percent: i32,
    /// Provider category label, e.g. "Clouds"
    pub condition: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feels_like_celsius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed_mps: Option<f64>,
    /// Provider icon code, e.g. "04d"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ForecastSample {
    /// Calendar date of the sample
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Temperature span across one forecast day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TemperatureRange {
    pub current: f64,
    pub min: f64,
    pub max: f64,
}

/// Tomorrow's representative forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TomorrowSummary {
    pub timestamp: NaiveDateTime,
    pub temperature: TemperatureRange,
    pub humidity_percent: i32,
    pub condition: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feels_like_celsius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed_mps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One row of the 7-day forecast strip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub day_name: String,
    pub condition: String,
    pub emoji: String,
    pub description: String,
    pub min_temp_celsius: i32,
    pub max_temp_celsius: i32,
    pub humidity_percent: i32,
}

/// Weather categories reported by the provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WeatherCategory {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Haze,
    Dust,
    Sand,
    Ash,
    Squall,
    Tornado,
}

impl WeatherCategory {
    pub const ALL: [WeatherCategory; 14] = [
        WeatherCategory::Clear,
        WeatherCategory::Clouds,
        WeatherCategory::Rain,
        WeatherCategory::Drizzle,
        WeatherCategory::Thunderstorm,
        WeatherCategory::Snow,
        WeatherCategory::Mist,
        WeatherCategory::Fog,
        WeatherCategory::Haze,
        WeatherCategory::Dust,
        WeatherCategory::Sand,
        WeatherCategory::Ash,
        WeatherCategory::Squall,
        WeatherCategory::Tornado,
    ];

    /// Parse a provider label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCategory::Clear => "Clear",
            WeatherCategory::Clouds => "Clouds",
            WeatherCategory::Rain => "Rain",
            WeatherCategory::Drizzle => "Drizzle",
            WeatherCategory::Thunderstorm => "Thunderstorm",
            WeatherCategory::Snow => "Snow",
            WeatherCategory::Mist => "Mist",
            WeatherCategory::Fog => "Fog",
            WeatherCategory::Haze => "Haze",
            WeatherCategory::Dust => "Dust",
            WeatherCategory::Sand => "Sand",
            WeatherCategory::Ash => "Ash",
            WeatherCategory::Squall => "Squall",
            WeatherCategory::Tornado => "Tornado",
        }
    }

    /// Display glyph for the category
    pub fn emoji(&self) -> &'static str {
        match self {
            WeatherCategory::Clear => "☀️",
            WeatherCategory::Clouds => "☁️",
            WeatherCategory::Rain => "🌧️",
            WeatherCategory::Drizzle => "🌦️",
            WeatherCategory::Thunderstorm => "⛈️",
            WeatherCategory::Snow => "❄️",
            WeatherCategory::Mist | WeatherCategory::Fog | WeatherCategory::Haze => "🌫️",
            WeatherCategory::Dust
            | WeatherCategory::Sand
            | WeatherCategory::Ash
            | WeatherCategory::Squall => "💨",
            WeatherCategory::Tornado => "🌪️",
        }
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

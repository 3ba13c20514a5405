//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap 2.5 for current conditions and the
//! 5-day / 3-hour forecast

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use shared::{forecast, ForecastSample, GpsCoordinates};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Current weather conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub location_name: String,
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: f64,
    pub feels_like_celsius: f64,
    pub humidity_percent: i32,
    pub pressure_hpa: i32,
    pub wind_speed_mps: f64,
    pub wind_speed_kmh: i32,
    pub visibility_meters: i32,
    pub condition: String,
    pub description: String,
    pub icon: String,
    /// Provider icon image; empty when no icon was reported
    pub icon_url: String,
    pub emoji: String,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
}

/// 5-day forecast in 3-hour steps, timestamps in UTC
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub location_name: String,
    pub coordinates: GpsCoordinates,
    pub timezone_offset_seconds: i32,
    pub samples: Vec<ForecastSample>,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    weather: Vec<OWMWeather>,
    main: OWMMain,
    visibility: Option<i32>,
    wind: OWMWind,
    dt: i64,
    sys: OWMSys,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct OWMCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    feels_like: f64,
    #[serde(default)]
    pressure: i32,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMSys {
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    city: OWMCity,
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMCity {
    #[serde(default)]
    name: String,
    coord: OWMCoord,
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt: i64,
    main: OWMMain,
    weather: Vec<OWMWeather>,
    wind: OWMWind,
}

impl WeatherClient {
    /// Create a new WeatherClient against the given API base URL
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn get_current_weather(&self, location: &GpsCoordinates) -> AppResult<CurrentWeather> {
        let data: OWMCurrentResponse = self.get("weather", location).await?;
        Ok(convert_current_response(data))
    }

    /// Fetch the 5-day / 3-hour forecast by GPS coordinates
    pub async fn get_forecast(&self, location: &GpsCoordinates) -> AppResult<WeatherForecast> {
        let data: OWMForecastResponse = self.get("forecast", location).await?;
        let forecast = convert_forecast_response(data);
        tracing::debug!(
            "Forecast for {} has {} samples",
            forecast.location_name,
            forecast.samples.len()
        );
        Ok(forecast)
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        location: &GpsCoordinates,
    ) -> AppResult<T> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::Configuration(
                "weather.api_key is not set".to_string(),
            ));
        }

        let url = format!(
            "{}/{}?lat={}&lon={}&appid={}&units=metric",
            self.base_url, endpoint, location.latitude, location.longitude, self.api_key
        );

        tracing::info!("Fetching weather {} for {}", endpoint, location);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Weather API request failed: {}", e)))?;

        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AppError::WeatherServiceUnavailable);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse weather response: {}", e))
        })
    }
}

/// Convert OpenWeatherMap current response to our format
fn convert_current_response(data: OWMCurrentResponse) -> CurrentWeather {
    let weather = data.weather.first();
    let condition = weather.map(|w| w.main.clone()).unwrap_or_default();
    let icon = weather.map(|w| w.icon.clone()).unwrap_or_default();

    CurrentWeather {
        location_name: data.name,
        timestamp: DateTime::from_timestamp(data.dt, 0).unwrap_or_else(Utc::now),
        temperature_celsius: data.main.temp,
        feels_like_celsius: data.main.feels_like,
        humidity_percent: data.main.humidity,
        pressure_hpa: data.main.pressure,
        wind_speed_mps: data.wind.speed,
        wind_speed_kmh: forecast::wind_speed_kmh(data.wind.speed),
        visibility_meters: data.visibility.unwrap_or(10000),
        emoji: forecast::weather_emoji(&condition).to_string(),
        condition,
        description: weather.map(|w| w.description.clone()).unwrap_or_default(),
        icon_url: if icon.is_empty() {
            String::new()
        } else {
            forecast::weather_icon_url(&icon)
        },
        icon,
        sunrise: data.sys.sunrise.and_then(|t| DateTime::from_timestamp(t, 0)),
        sunset: data.sys.sunset.and_then(|t| DateTime::from_timestamp(t, 0)),
    }
}

/// Convert OpenWeatherMap forecast response to our format
///
/// Timestamps stay on the provider's UTC 3-hour grid so every day keeps
/// its 00:00..21:00 slots and a 12:00 sample.
fn convert_forecast_response(data: OWMForecastResponse) -> WeatherForecast {
    let samples = data
        .list
        .into_iter()
        .filter_map(|item| {
            let timestamp = DateTime::from_timestamp(item.dt, 0)?.naive_utc();
            let weather = item.weather.into_iter().next();
            Some(ForecastSample {
                timestamp,
                temperature_celsius: item.main.temp,
                humidity_percent: item.main.humidity,
                feels_like_celsius: Some(item.main.feels_like),
                wind_speed_mps: Some(item.wind.speed),
                condition: weather.as_ref().map(|w| w.main.clone()).unwrap_or_default(),
                description: weather.as_ref().map(|w| w.description.clone()).unwrap_or_default(),
                icon: weather.map(|w| w.icon),
            })
        })
        .collect();

    WeatherForecast {
        location_name: data.city.name,
        coordinates: GpsCoordinates::new(data.city.coord.lat, data.city.coord.lon),
        timezone_offset_seconds: data.city.timezone,
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const FORECAST_JSON: &str = r#"{
        "city": {"name": "New Delhi", "coord": {"lat": 28.6139, "lon": 77.209}, "timezone": 19800},
        "list": [
            {"dt": 1717405200, "main": {"temp": 31.2, "feels_like": 33.0, "pressure": 1002, "humidity": 40},
             "weather": [{"main": "Clear", "description": "clear sky", "icon": "01d"}],
             "wind": {"speed": 3.1}},
            {"dt": 1717416000, "main": {"temp": 35.8, "feels_like": 37.5, "pressure": 1001, "humidity": 28},
             "weather": [], "wind": {"speed": 4.4}}
        ]
    }"#;

    #[test]
    fn test_convert_forecast_keeps_utc_grid() {
        let data: OWMForecastResponse = serde_json::from_str(FORECAST_JSON).unwrap();
        let forecast = convert_forecast_response(data);

        assert_eq!(forecast.location_name, "New Delhi");
        assert_eq!(forecast.timezone_offset_seconds, 19800);
        assert_eq!(forecast.samples.len(), 2);

        let first = &forecast.samples[0];
        assert_eq!(
            first.timestamp,
            NaiveDate::from_ymd_opt(2024, 6, 3)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        );
        assert_eq!(first.condition, "Clear");
        assert_eq!(first.icon.as_deref(), Some("01d"));
    }

    fn five_day_payload(timezone: i32) -> String {
        // 2024-06-03T00:00:00Z
        let start = 1717372800_i64;
        let items: Vec<serde_json::Value> = (0..40)
            .map(|i| {
                // Only the 12:00 UTC slot is clear
                let main = if i % 8 == 4 { "Clear" } else { "Clouds" };
                serde_json::json!({
                    "dt": start + i * 3 * 3600,
                    "main": {"temp": 25.0 + (i % 8) as f64, "feels_like": 26.0, "pressure": 1005, "humidity": 50},
                    "weather": [{"main": main, "description": "sky", "icon": "02d"}],
                    "wind": {"speed": 2.0}
                })
            })
            .collect();
        serde_json::json!({
            "city": {"name": "New Delhi", "coord": {"lat": 28.6139, "lon": 77.209}, "timezone": timezone},
            "list": items
        })
        .to_string()
    }

    #[test]
    fn test_half_hour_offset_keeps_five_noon_days() {
        let data: OWMForecastResponse = serde_json::from_str(&five_day_payload(19800)).unwrap();
        let forecast = convert_forecast_response(data);
        let week = forecast::summarize_week(&forecast.samples);

        assert_eq!(week.len(), 5);
        for (offset, day) in week.iter().enumerate() {
            let date = NaiveDate::from_ymd_opt(2024, 6, 3 + offset as u32).unwrap();
            assert_eq!(day.date, date);
            assert_eq!(day.condition, "Clear");
            assert_eq!(day.min_temp_celsius, 25);
            assert_eq!(day.max_temp_celsius, 32);
        }

        let tomorrow = forecast::summarize_tomorrow(
            &forecast.samples,
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        )
        .unwrap();
        assert_eq!(tomorrow.condition, "Clear");
        assert_eq!(
            tomorrow.timestamp,
            NaiveDate::from_ymd_opt(2024, 6, 4)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_convert_forecast_missing_weather_entry() {
        let data: OWMForecastResponse = serde_json::from_str(FORECAST_JSON).unwrap();
        let forecast = convert_forecast_response(data);

        let second = &forecast.samples[1];
        assert_eq!(second.condition, "");
        assert!(second.icon.is_none());
        assert_eq!(forecast::weather_emoji(&second.condition), shared::DEFAULT_WEATHER_EMOJI);
    }

    #[test]
    fn test_convert_current_response() {
        let json = r#"{
            "weather": [{"main": "Haze", "description": "haze", "icon": "50d"}],
            "main": {"temp": 29.0, "feels_like": 30.1, "pressure": 1008, "humidity": 62},
            "wind": {"speed": 2.5},
            "dt": 1717405200,
            "sys": {"sunrise": 1717371000, "sunset": 1717421000},
            "name": "New Delhi"
        }"#;
        let data: OWMCurrentResponse = serde_json::from_str(json).unwrap();
        let current = convert_current_response(data);

        assert_eq!(current.emoji, "🌫️");
        assert_eq!(current.icon_url, "https://openweathermap.org/img/wn/50d@2x.png");
        assert_eq!(current.wind_speed_kmh, 9);
        assert_eq!(current.visibility_meters, 10000);
        assert!(current.sunrise.is_some());
    }

    #[tokio::test]
    async fn test_blank_api_key_is_configuration_error() {
        let client = WeatherClient::with_base_url(String::new(), "http://127.0.0.1:9".into());
        let result = client.get_forecast(&GpsCoordinates::default()).await;
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_external_error() {
        let client = WeatherClient::with_base_url("key".into(), "http://127.0.0.1:9".into());
        let result = client.get_current_weather(&GpsCoordinates::default()).await;
        assert!(matches!(result, Err(AppError::ExternalService(_))));
    }
}

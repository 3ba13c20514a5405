//! Weather service: provider data in, dashboard widgets out

use chrono::Utc;
use serde::Serialize;
use shared::{forecast, DailySummary, GpsCoordinates, TomorrowSummary};

use crate::error::{AppError, AppResult};
use crate::external::weather::{CurrentWeather, WeatherClient, WeatherForecast};

/// Weather service for the dashboard widgets
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

/// Everything the weather widget shows in one response
#[derive(Debug, Clone, Serialize)]
pub struct WeatherDashboard {
    pub location_name: String,
    pub current: CurrentWeather,
    pub tomorrow: Option<TomorrowSummary>,
    pub week: Vec<DailySummary>,
}

impl WeatherService {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    pub async fn current(&self, location: &GpsCoordinates) -> AppResult<CurrentWeather> {
        self.client.get_current_weather(location).await
    }

    /// Tomorrow's representative forecast
    pub async fn tomorrow(&self, location: &GpsCoordinates) -> AppResult<TomorrowSummary> {
        let forecast = self.client.get_forecast(location).await?;
        tomorrow_from_forecast(&forecast).ok_or_else(|| {
            AppError::ExternalService("Weather API returned an empty forecast".to_string())
        })
    }

    /// Up to seven daily summaries
    pub async fn week(&self, location: &GpsCoordinates) -> AppResult<Vec<DailySummary>> {
        let forecast = self.client.get_forecast(location).await?;
        Ok(forecast::summarize_week(&forecast.samples))
    }

    /// Current conditions and forecast fetched concurrently
    pub async fn dashboard(&self, location: &GpsCoordinates) -> AppResult<WeatherDashboard> {
        let (current, forecast) = tokio::try_join!(
            self.client.get_current_weather(location),
            self.client.get_forecast(location),
        )?;

        let week = forecast::summarize_week(&forecast.samples);
        tracing::debug!("Built {} daily summaries for {}", week.len(), location);

        Ok(WeatherDashboard {
            location_name: forecast.location_name.clone(),
            tomorrow: tomorrow_from_forecast(&forecast),
            current,
            week,
        })
    }
}

/// Tomorrow relative to today's UTC date, matching the sample grid
pub fn tomorrow_from_forecast(forecast: &WeatherForecast) -> Option<TomorrowSummary> {
    forecast::summarize_tomorrow(&forecast.samples, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDateTime};
    use shared::ForecastSample;

    fn sample(timestamp: NaiveDateTime, temp: f64) -> ForecastSample {
        ForecastSample {
            timestamp,
            temperature_celsius: temp,
            humidity_percent: 50,
            condition: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
            feels_like_celsius: None,
            wind_speed_mps: None,
            icon: None,
        }
    }

    fn forecast_with(samples: Vec<ForecastSample>) -> WeatherForecast {
        WeatherForecast {
            location_name: "New Delhi".to_string(),
            coordinates: GpsCoordinates::default(),
            timezone_offset_seconds: 19800,
            samples,
        }
    }

    #[test]
    fn test_tomorrow_uses_utc_date() {
        let now = Utc::now().naive_utc();
        let tomorrow = now.date().checked_add_days(Days::new(1)).unwrap();

        let forecast = forecast_with(vec![
            sample(now, 30.0),
            sample(tomorrow.and_hms_opt(9, 0, 0).unwrap(), 27.0),
            sample(tomorrow.and_hms_opt(12, 0, 0).unwrap(), 33.0),
            sample(tomorrow.and_hms_opt(15, 0, 0).unwrap(), 35.0),
        ]);

        let summary = tomorrow_from_forecast(&forecast).unwrap();
        assert_eq!(summary.timestamp, tomorrow.and_hms_opt(12, 0, 0).unwrap());
        assert_eq!(summary.temperature.min, 27.0);
        assert_eq!(summary.temperature.max, 35.0);
    }

    #[test]
    fn test_tomorrow_empty_forecast() {
        assert!(tomorrow_from_forecast(&forecast_with(vec![])).is_none());
    }

    #[tokio::test]
    async fn test_dashboard_propagates_provider_failure() {
        let service = WeatherService::new(WeatherClient::with_base_url(
            "key".into(),
            "http://127.0.0.1:9".into(),
        ));
        let result = service.dashboard(&GpsCoordinates::default()).await;
        assert!(matches!(result, Err(AppError::ExternalService(_))));
    }
}

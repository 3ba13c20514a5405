//! HTTP handlers for the weather widget

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::external::weather::CurrentWeather;
use crate::models::{DailySummary, GpsCoordinates, TomorrowSummary};
use crate::services::weather::{WeatherDashboard, WeatherService};
use crate::AppState;

/// Optional coordinates; missing values fall back to the configured location
#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl LocationQuery {
    pub fn resolve(&self, default: GpsCoordinates) -> AppResult<GpsCoordinates> {
        let location = GpsCoordinates::new(
            self.lat.unwrap_or(default.latitude),
            self.lon.unwrap_or(default.longitude),
        );
        shared::validate_coordinates(&location).map_err(|msg| AppError::Validation {
            field: "location".to_string(),
            message: msg.to_string(),
        })?;
        Ok(location)
    }
}

fn service(state: &AppState) -> WeatherService {
    WeatherService::new(state.weather_client.clone())
}

/// Current conditions
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<CurrentWeather>> {
    let location = query.resolve(state.config.location.coordinates())?;
    let current = service(&state).current(&location).await?;
    Ok(Json(current))
}

/// Tomorrow's forecast summary
pub async fn get_tomorrow_forecast(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<TomorrowSummary>> {
    let location = query.resolve(state.config.location.coordinates())?;
    let tomorrow = service(&state).tomorrow(&location).await?;
    Ok(Json(tomorrow))
}

/// Daily summaries for the week view
pub async fn get_week_forecast(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<Vec<DailySummary>>> {
    let location = query.resolve(state.config.location.coordinates())?;
    let week = service(&state).week(&location).await?;
    Ok(Json(week))
}

/// Current, tomorrow and week in one call
pub async fn get_weather_dashboard(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<WeatherDashboard>> {
    let location = query.resolve(state.config.location.coordinates())?;
    let dashboard = service(&state).dashboard(&location).await?;
    Ok(Json(dashboard))
}

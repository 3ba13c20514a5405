//! HTTP handlers for the chat panel and advice widgets

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::models::{AdviceResponse, Crop, Season};
use crate::services::advice::{AdviceInput, AdviceService, InsightResponse};
use crate::AppState;

/// Question from the chat panel; the length limit is enforced by the service
#[derive(Debug, Deserialize, Validate)]
pub struct AdviceRequest {
    #[validate(length(min = 1, message = "Question cannot be empty"))]
    pub query: String,
    pub crop: Option<Crop>,
    pub season: Option<Season>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct WeatherAdviceBody {
    #[validate(length(min = 1, max = 100, message = "Location must be 1 to 100 characters"))]
    pub location: Option<String>,
    pub crop: Option<Crop>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MarketQuery {
    pub crop: Option<Crop>,
    #[validate(length(min = 1, max = 100, message = "Location must be 1 to 100 characters"))]
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CalendarQuery {
    pub season: Option<Season>,
    #[validate(length(min = 1, max = 100, message = "Location must be 1 to 100 characters"))]
    pub location: Option<String>,
}

fn service(state: &AppState) -> AdviceService {
    AdviceService::new(state.advisor_client.clone())
}

/// Ask a farming question
pub async fn get_advice(
    State(state): State<AppState>,
    Json(request): Json<AdviceRequest>,
) -> AppResult<Json<AdviceResponse>> {
    request.validate()?;

    let response = service(&state)
        .ask(AdviceInput {
            query: request.query,
            crop: request.crop,
            season: request.season,
            location: request.location,
        })
        .await?;
    Ok(Json(response))
}

/// Advice for the weather at a location, Delhi by default
pub async fn get_weather_advice(
    State(state): State<AppState>,
    Json(request): Json<WeatherAdviceBody>,
) -> AppResult<Json<InsightResponse>> {
    request.validate()?;

    let location = request.location.as_deref().unwrap_or("Delhi");
    Ok(Json(service(&state).weather_advice(location, request.crop).await))
}

/// Market insights, rice across India by default
pub async fn get_market_insights(
    State(state): State<AppState>,
    Query(query): Query<MarketQuery>,
) -> AppResult<Json<InsightResponse>> {
    query.validate()?;

    let crop = query.crop.unwrap_or(Crop::Rice);
    let location = query.location.as_deref().unwrap_or("india");
    Ok(Json(service(&state).market_insights(crop, location).await))
}

/// Seasonal calendar, kharif across India by default
pub async fn get_seasonal_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<InsightResponse>> {
    query.validate()?;

    let season = query.season.unwrap_or(Season::Kharif);
    let location = query.location.as_deref().unwrap_or("india");
    Ok(Json(service(&state).seasonal_calendar(season, location).await))
}

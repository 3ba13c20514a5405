//! HTTP handlers for the soil widget

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::models::{SoilProperties, SoilReport};
use crate::services::soil::{self, LocationSoilReport, SoilService, TextureInfo};
use crate::AppState;

use super::LocationQuery;

/// Soil report for a location
pub async fn get_soil_report(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<LocationSoilReport>> {
    let location = query.resolve(state.config.location.coordinates())?;
    let service = SoilService::new(state.soil_client);
    Ok(Json(service.report_for_location(&location).await))
}

/// Classify soil readings supplied by the caller
pub async fn analyze_soil(Json(properties): Json<SoilProperties>) -> Json<SoilReport> {
    Json(soil::analyze(properties))
}

#[derive(Debug, Deserialize, Validate)]
pub struct TextureQuery {
    #[validate(range(min = 0.0, max = 100.0, message = "Sand must be between 0 and 100"))]
    pub sand: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Clay must be between 0 and 100"))]
    pub clay: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Silt must be between 0 and 100"))]
    pub silt: f64,
}

/// Texture class for sand/clay/silt percentages
pub async fn get_soil_texture(Query(query): Query<TextureQuery>) -> AppResult<Json<TextureInfo>> {
    query.validate()?;
    Ok(Json(soil::texture_info(query.sand, query.clay, query.silt)))
}

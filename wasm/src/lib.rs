//! WebAssembly module for the AgriGuru dashboard
//!
//! Provides client-side computation for:
//! - Forecast aggregation (tomorrow card, weekly strip)
//! - Soil texture and health classification
//! - Offline chat advice
//!
//! Structured values cross the boundary as JSON strings.

use chrono::NaiveDate;
use shared::{advice, forecast, soil, Crop, ForecastSample, OverallRating, SoilProperties};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Log to the browser console and hand the message back as a JS error
fn js_error(message: String) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn parse_samples(samples_json: &str) -> Result<Vec<ForecastSample>, String> {
    serde_json::from_str(samples_json).map_err(|e| format!("Invalid forecast JSON: {}", e))
}

fn parse_soil(properties_json: &str) -> Result<SoilProperties, String> {
    serde_json::from_str(properties_json).map_err(|e| format!("Invalid soil JSON: {}", e))
}

fn week_json(samples_json: &str) -> Result<String, String> {
    let week = forecast::summarize_week(&parse_samples(samples_json)?);
    serde_json::to_string(&week).map_err(|e| e.to_string())
}

fn tomorrow_json(samples_json: &str, reference_date: &str) -> Result<String, String> {
    let date = NaiveDate::parse_from_str(reference_date, "%Y-%m-%d")
        .map_err(|e| format!("Invalid reference date '{}': {}", reference_date, e))?;
    let tomorrow = forecast::summarize_tomorrow(&parse_samples(samples_json)?, date);
    serde_json::to_string(&tomorrow).map_err(|e| e.to_string())
}

fn health_json(properties_json: &str) -> Result<String, String> {
    let assessment = soil::assess_soil_health(&parse_soil(properties_json)?);
    serde_json::to_string(&assessment).map_err(|e| e.to_string())
}

fn report_json(properties_json: &str) -> Result<String, String> {
    let report = soil::analyze_soil(parse_soil(properties_json)?);
    serde_json::to_string(&report).map_err(|e| e.to_string())
}

fn parse_label<T: serde::de::DeserializeOwned>(label: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(label.to_string())).ok()
}

/// Daily summaries (up to seven) for a list of 3-hour samples
#[wasm_bindgen]
pub fn summarize_week_json(samples_json: &str) -> Result<String, JsValue> {
    week_json(samples_json).map_err(js_error)
}

/// Tomorrow's card relative to `reference_date` (YYYY-MM-DD); `null` for an
/// empty forecast
#[wasm_bindgen]
pub fn summarize_tomorrow_json(samples_json: &str, reference_date: &str) -> Result<String, JsValue> {
    tomorrow_json(samples_json, reference_date).map_err(js_error)
}

/// Tomorrow's card relative to the browser's local date
#[wasm_bindgen]
pub fn summarize_tomorrow_local_json(samples_json: &str) -> Result<String, JsValue> {
    let now = js_sys::Date::new_0();
    let today = format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    );
    summarize_tomorrow_json(samples_json, &today)
}

/// Texture class label for sand/clay/silt percentages
#[wasm_bindgen]
pub fn classify_soil_texture(sand: f64, clay: f64, silt: f64) -> String {
    soil::classify_soil_texture(sand, clay, silt).to_string()
}

/// Soil health assessment for a soil properties record
#[wasm_bindgen]
pub fn assess_soil_health_json(properties_json: &str) -> Result<String, JsValue> {
    health_json(properties_json).map_err(js_error)
}

/// Full soil widget payload for a soil properties record
#[wasm_bindgen]
pub fn analyze_soil_json(properties_json: &str) -> Result<String, JsValue> {
    report_json(properties_json).map_err(js_error)
}

#[wasm_bindgen]
pub fn weather_emoji(condition: &str) -> String {
    forecast::weather_emoji(condition).to_string()
}

/// Provider icon image URL for an icon code such as "10d"
#[wasm_bindgen]
pub fn weather_icon_url(icon_code: &str) -> String {
    forecast::weather_icon_url(icon_code)
}

#[wasm_bindgen]
pub fn soil_color(organic_carbon: f64) -> String {
    soil::soil_color(organic_carbon).to_string()
}

/// Glyph for an overall rating label such as "Needs Improvement"
#[wasm_bindgen]
pub fn soil_health_emoji(overall: &str) -> Result<String, JsValue> {
    parse_label::<OverallRating>(overall)
        .map(|rating| soil::soil_health_emoji(rating).to_string())
        .ok_or_else(|| js_error(format!("Unknown soil rating: {}", overall)))
}

/// Rounded temperature for display
#[wasm_bindgen]
pub fn format_temperature(celsius: f64) -> i32 {
    forecast::format_temperature(celsius)
}

/// Offline chat answer; `crop` is a lowercase crop code if known
#[wasm_bindgen]
pub fn fallback_advice(query: &str, crop: Option<String>) -> String {
    let crop = crop
        .as_deref()
        .and_then(parse_label::<Crop>)
        .or_else(|| advice::extract_crop_and_season(query).0);
    advice::fallback_advice(query, crop)
}

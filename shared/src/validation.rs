//! Validation utilities for AgriGuru inputs
//!
//! The forecast and soil classifiers accept any numeric input; these checks
//! are for the edges of the system where a caller wants to reject bad data.

use crate::types::GpsCoordinates;

/// Longest question the advice service accepts
pub const MAX_QUESTION_LENGTH: usize = 2000;

// ============================================================================
// Location Validations
// ============================================================================

/// Validate latitude is in [-90, 90] and longitude in [-180, 180]
pub fn validate_coordinates(coords: &GpsCoordinates) -> Result<(), &'static str> {
    if !coords.latitude.is_finite() || !coords.longitude.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    if !(-90.0..=90.0).contains(&coords.latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&coords.longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

// ============================================================================
// Soil Validations
// ============================================================================

/// Check whether sand, clay and silt add up to roughly 100%
///
/// Lab and SoilGrids figures rarely sum exactly, so a couple of points of
/// slack are allowed.
pub fn is_complete_texture(sand: f64, clay: f64, silt: f64) -> bool {
    ((sand + clay + silt) - 100.0).abs() <= 2.0
}

// ============================================================================
// Advice Validations
// ============================================================================

/// Validate a farmer question is non-blank and not too long
pub fn validate_question(query: &str) -> Result<(), &'static str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err("Question cannot be empty");
    }
    if trimmed.chars().count() > MAX_QUESTION_LENGTH {
        return Err("Question must be at most 2000 characters");
    }
    Ok(())
}

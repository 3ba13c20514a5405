//! Rule-based soil health classification
//!
//! Thresholds are fixed and evaluated in a fixed order; callers rely on the
//! exact boundaries, so keep the comparisons as written.

use crate::models::{
    FertilityLevel, OverallRating, PhStatus, SoilAssessment, SoilProperties, SoilReport,
    SoilTexture,
};

pub const RECOMMEND_LIME: &str = "Consider lime application to raise pH";
pub const RECOMMEND_SULFUR: &str = "Consider sulfur application to lower pH";
pub const PH_SUITABLE: &str = "pH level is suitable for most crops";
pub const RECOMMEND_ORGANIC_MATTER: &str = "Add compost or organic matter";
pub const EXCELLENT_ORGANIC_MATTER: &str = "Excellent organic matter content";
pub const RECOMMEND_NITROGEN: &str = "Consider nitrogen fertilizer application";

/// Below this nitrogen level (mg/kg) a fertilizer recommendation is added
const NITROGEN_RECOMMENDATION_THRESHOLD: f64 = 50.0;
/// At or above this nitrogen level (mg/kg) nitrogen counts toward the score.
/// Not the same value as the recommendation threshold.
const NITROGEN_SCORE_THRESHOLD: f64 = 60.0;

/// Texture class from sand/clay/silt percentages. First matching rule wins;
/// the percentages are not required to sum to 100.
pub fn classify_soil_texture(sand: f64, clay: f64, silt: f64) -> SoilTexture {
    if sand > 85.0 {
        SoilTexture::Sand
    } else if clay > 40.0 {
        SoilTexture::Clay
    } else if silt > 80.0 {
        SoilTexture::Silt
    } else if sand > 45.0 && clay < 20.0 {
        SoilTexture::SandyLoam
    } else if clay > 27.0 && clay < 40.0 && sand > 20.0 {
        SoilTexture::ClayLoam
    } else if silt > 50.0 && clay < 27.0 {
        SoilTexture::SiltLoam
    } else {
        SoilTexture::Loam
    }
}

/// Assess soil health from its chemistry.
///
/// Recommendations come out in evaluation order (pH, organic carbon,
/// nitrogen) and are not deduplicated.
pub fn assess_soil_health(soil: &SoilProperties) -> SoilAssessment {
    let mut recommendations = Vec::new();

    let ph_status = if soil.ph < 6.0 {
        recommendations.push(RECOMMEND_LIME.to_string());
        PhStatus::Acidic
    } else if soil.ph > 8.0 {
        recommendations.push(RECOMMEND_SULFUR.to_string());
        PhStatus::Alkaline
    } else {
        recommendations.push(PH_SUITABLE.to_string());
        PhStatus::Optimal
    };

    let mut fertility_level = FertilityLevel::default();
    if soil.organic_carbon < 1.5 {
        fertility_level = FertilityLevel::Low;
        recommendations.push(RECOMMEND_ORGANIC_MATTER.to_string());
    } else if soil.organic_carbon > 3.0 {
        fertility_level = FertilityLevel::High;
        recommendations.push(EXCELLENT_ORGANIC_MATTER.to_string());
    }

    if soil.nitrogen < NITROGEN_RECOMMENDATION_THRESHOLD {
        recommendations.push(RECOMMEND_NITROGEN.to_string());
    }

    SoilAssessment {
        overall: overall_rating(soil),
        ph_status,
        fertility_level,
        recommendations,
    }
}

/// Count the indicators that hold and map the count to a rating
fn overall_rating(soil: &SoilProperties) -> OverallRating {
    let indicators = [
        soil.ph >= 6.0 && soil.ph <= 8.0,
        soil.organic_carbon >= 2.0,
        soil.nitrogen >= NITROGEN_SCORE_THRESHOLD,
    ];

    match indicators.iter().filter(|&&ok| ok).count() {
        0 => OverallRating::NeedsImprovement,
        1 => OverallRating::Good,
        _ => OverallRating::Excellent,
    }
}

/// Swatch color for the soil widget, darker with more organic carbon
pub fn soil_color(organic_carbon: f64) -> &'static str {
    if organic_carbon > 3.0 {
        "#3d2914"
    } else if organic_carbon > 2.0 {
        "#8b4513"
    } else if organic_carbon > 1.0 {
        "#daa520"
    } else {
        "#d2b48c"
    }
}

pub fn soil_health_emoji(overall: OverallRating) -> &'static str {
    match overall {
        OverallRating::Excellent => "🌱",
        OverallRating::Good => "🌿",
        OverallRating::NeedsImprovement => "🌾",
    }
}

/// Full soil widget payload for one set of properties
pub fn analyze_soil(properties: SoilProperties) -> SoilReport {
    let assessment = assess_soil_health(&properties);
    let texture = classify_soil_texture(properties.sand, properties.clay, properties.silt);

    SoilReport {
        color: soil_color(properties.organic_carbon),
        health_emoji: soil_health_emoji(assessment.overall),
        texture,
        assessment,
        properties,
    }
}

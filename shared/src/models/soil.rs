//! Soil data models

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Soil properties for a location, topsoil (0-30cm)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilProperties {
    pub ph: f64,
    /// mg/kg
    pub nitrogen: f64,
    /// Percent
    pub organic_carbon: f64,
    pub sand: f64,
    pub clay: f64,
    pub silt: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moisture: Option<f64>,
}

impl SoilProperties {
    /// Demonstration record shown when the soil provider cannot be reached
    pub fn sample() -> Self {
        Self {
            ph: 6.8,
            nitrogen: 85.0,
            organic_carbon: 2.3,
            sand: 45.0,
            clay: 25.0,
            silt: 30.0,
            moisture: Some(65.0),
        }
    }
}

/// Overall soil rating
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OverallRating {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl std::fmt::Display for OverallRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallRating::Excellent => write!(f, "Excellent"),
            OverallRating::Good => write!(f, "Good"),
            OverallRating::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// pH band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PhStatus {
    Acidic,
    Optimal,
    Alkaline,
}

impl std::fmt::Display for PhStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhStatus::Acidic => write!(f, "Acidic"),
            PhStatus::Optimal => write!(f, "Optimal"),
            PhStatus::Alkaline => write!(f, "Alkaline"),
        }
    }
}

/// Fertility level derived from organic carbon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FertilityLevel {
    Low,
    #[default]
    Good,
    High,
}

impl std::fmt::Display for FertilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FertilityLevel::Low => write!(f, "Low"),
            FertilityLevel::Good => write!(f, "Good"),
            FertilityLevel::High => write!(f, "High"),
        }
    }
}

/// Result of a soil health assessment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilAssessment {
    pub overall: OverallRating,
    pub ph_status: PhStatus,
    pub fertility_level: FertilityLevel,
    /// In rule evaluation order: pH, organic carbon, nitrogen
    pub recommendations: Vec<String>,
}

/// Soil texture class from the sand/clay/silt decision list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SoilTexture {
    Sand,
    Clay,
    Silt,
    #[serde(rename = "Sandy Loam")]
    SandyLoam,
    #[serde(rename = "Clay Loam")]
    ClayLoam,
    #[serde(rename = "Silt Loam")]
    SiltLoam,
    Loam,
}

impl SoilTexture {
    pub fn label(&self) -> &'static str {
        match self {
            SoilTexture::Sand => "Sand",
            SoilTexture::Clay => "Clay",
            SoilTexture::Silt => "Silt",
            SoilTexture::SandyLoam => "Sandy Loam",
            SoilTexture::ClayLoam => "Clay Loam",
            SoilTexture::SiltLoam => "Silt Loam",
            SoilTexture::Loam => "Loam",
        }
    }

    /// General character of the texture family
    pub fn characteristics(&self) -> &'static str {
        match self {
            SoilTexture::Clay | SoilTexture::ClayLoam => {
                "Heavy, water-retentive, nutrient-rich"
            }
            SoilTexture::Sand | SoilTexture::SandyLoam => {
                "Light, well-draining, low nutrient retention"
            }
            SoilTexture::Silt | SoilTexture::SiltLoam => {
                "Smooth, fertile, holds moisture but crusts easily"
            }
            SoilTexture::Loam => "Well-balanced, ideal for most crops",
        }
    }

    /// Management advice for the texture family
    pub fn management(&self) -> &'static str {
        match self {
            SoilTexture::Clay | SoilTexture::ClayLoam => {
                "Add organic matter, improve drainage"
            }
            SoilTexture::Sand | SoilTexture::SandyLoam => {
                "Add organic matter, frequent irrigation"
            }
            SoilTexture::Silt | SoilTexture::SiltLoam => {
                "Keep soil covered, avoid working it when wet"
            }
            SoilTexture::Loam => "Maintain organic matter, balanced fertilization",
        }
    }
}

impl std::fmt::Display for SoilTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown soil texture: {0}")]
pub struct UnknownTexture(pub String);

impl std::str::FromStr for SoilTexture {
    type Err = UnknownTexture;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sand" => Ok(SoilTexture::Sand),
            "Clay" => Ok(SoilTexture::Clay),
            "Silt" => Ok(SoilTexture::Silt),
            "Sandy Loam" => Ok(SoilTexture::SandyLoam),
            "Clay Loam" => Ok(SoilTexture::ClayLoam),
            "Silt Loam" => Ok(SoilTexture::SiltLoam),
            "Loam" => Ok(SoilTexture::Loam),
            other => Err(UnknownTexture(other.to_string())),
        }
    }
}

/// Everything the soil widget renders for one location
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SoilReport {
    pub properties: SoilProperties,
    pub assessment: SoilAssessment,
    pub texture: SoilTexture,
    /// Hex color for the soil swatch
    pub color: &'static str,
    pub health_emoji: &'static str,
}
